//! Named geometry entries (`searchable*` dictionaries) that projections
//! refer to.

/// Geometry entries in declaration order; each property line is emitted
/// verbatim into the entry's body.
#[derive(Clone, Debug, Default)]
pub struct GeometryList {
    pub entries: Vec<(String, Vec<String>)>,
}

impl GeometryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: Into<String>>(&mut self, name: &str, properties: impl IntoIterator<Item = S>) {
        let properties = properties.into_iter().map(Into::into).collect();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = properties;
        } else {
            self.entries.push((name.to_string(), properties));
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
