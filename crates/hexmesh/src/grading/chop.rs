//! Chop declarations.

/// Which of an axis's four wire lengths anchors the cell-size arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Take {
    #[default]
    Avg,
    Min,
    Max,
}

/// A declaration of how to subdivide (a fraction of) an axis.
///
/// Any two of `{count, total_expansion, start_size, end_size}` determine the
/// rest for a given length; `c2c_expansion` pairs with any one of them. A
/// lone `count`, `start_size` or `end_size` implies a uniform progression.
/// Over- or under-constrained combinations fail at resolution time.
#[derive(Clone, Debug, Default)]
pub struct Chop {
    pub count: Option<usize>,
    /// Ratio of the last to the first cell size.
    pub total_expansion: Option<f64>,
    pub start_size: Option<f64>,
    pub end_size: Option<f64>,
    /// Cell-to-cell expansion ratio.
    pub c2c_expansion: Option<f64>,
    /// Fraction of the axis length this chop covers; all chops of an axis
    /// must sum to 1.
    pub length_ratio: f64,
    pub take: Take,
}

impl Chop {
    pub fn new() -> Self {
        Self {
            length_ratio: 1.0,
            ..Self::default()
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn total_expansion(mut self, expansion: f64) -> Self {
        self.total_expansion = Some(expansion);
        self
    }

    pub fn start_size(mut self, size: f64) -> Self {
        self.start_size = Some(size);
        self
    }

    pub fn end_size(mut self, size: f64) -> Self {
        self.end_size = Some(size);
        self
    }

    pub fn c2c_expansion(mut self, expansion: f64) -> Self {
        self.c2c_expansion = Some(expansion);
        self
    }

    pub fn length_ratio(mut self, ratio: f64) -> Self {
        self.length_ratio = ratio;
        self
    }

    pub fn take(mut self, take: Take) -> Self {
        self.take = take;
        self
    }
}
