//! Clamps: parametric constraints on vertex positions.
//!
//! A clamp binds a vertex to a manifold (point set, line, curve, circle,
//! surface, plane) through a small parameter vector; the optimizer only ever
//! sees those parameters. Construction projects the vertex's current
//! position onto the manifold to get reasonable initial parameters.

use std::f64::consts::PI;

use crate::geometry::{rotate_around, Vec3};
use crate::items::VertexId;

use super::minimize::{minimize_scalar, nelder_mead, NmOptions};

/// Parametric curve `t -> point`.
pub type CurveFn = Box<dyn Fn(f64) -> Vec3>;
/// Parametric surface `(u, v) -> point`.
pub type SurfaceFn = Box<dyn Fn(f64, f64) -> Vec3>;

enum ClampKind {
    Free,
    Line { anchor: Vec3, direction: Vec3 },
    Curve { f: CurveFn },
    Radial { origin: Vec3, axis: Vec3, initial: Vec3 },
    Surface { f: SurfaceFn },
    Plane { origin: Vec3, e_u: Vec3, e_v: Vec3 },
}

/// A released vertex together with its constraint.
pub struct Clamp {
    vertex: VertexId,
    kind: ClampKind,
    params: Vec<f64>,
    bounds: Vec<Option<(f64, f64)>>,
}

impl Clamp {
    /// No constraint; parameters are the coordinates themselves.
    pub fn free(vertex: VertexId, position: Vec3) -> Self {
        Self {
            vertex,
            kind: ClampKind::Free,
            params: vec![position.x, position.y, position.z],
            bounds: vec![None, None, None],
        }
    }

    /// Constrain to the line through `a` and `b`; the parameter is the
    /// position along `b - a` (0 at `a`, 1 at `b`), optionally bounded.
    pub fn line(vertex: VertexId, position: Vec3, a: Vec3, b: Vec3, bounds: Option<(f64, f64)>) -> Self {
        let direction = b - a;
        let mut t = (position - a).dot(&direction) / direction.norm_squared();
        if let Some((lo, hi)) = bounds {
            t = t.clamp(lo, hi);
        }
        Self {
            vertex,
            kind: ClampKind::Line {
                anchor: a,
                direction,
            },
            params: vec![t],
            bounds: vec![bounds],
        }
    }

    /// Constrain to a parametric curve; the initial parameter minimizes the
    /// distance to the vertex.
    pub fn curve(vertex: VertexId, position: Vec3, f: CurveFn, bounds: Option<(f64, f64)>) -> Self {
        let distance = |t: f64| (f(t) - position).norm_squared();
        let mut t = minimize_scalar(&distance, bounds);
        if let Some((lo, hi)) = bounds {
            t = t.clamp(lo, hi);
        }
        Self {
            vertex,
            kind: ClampKind::Curve { f },
            params: vec![t],
            bounds: vec![bounds],
        }
    }

    /// Constrain to the circle traced by rotating the vertex around the axis
    /// through `axis_point_1` and `axis_point_2`.
    pub fn radial(vertex: VertexId, position: Vec3, axis_point_1: Vec3, axis_point_2: Vec3) -> Self {
        Self {
            vertex,
            kind: ClampKind::Radial {
                origin: axis_point_1,
                axis: axis_point_2 - axis_point_1,
                initial: position,
            },
            params: vec![0.0],
            bounds: vec![Some((-PI, PI))],
        }
    }

    /// Constrain to a parametric surface; initial parameters minimize the
    /// distance to the vertex, starting from the bounds midpoint when
    /// bounded and from the origin otherwise.
    pub fn surface(
        vertex: VertexId,
        position: Vec3,
        f: SurfaceFn,
        bounds: Option<[(f64, f64); 2]>,
    ) -> Self {
        let start = match bounds {
            Some([(u_lo, u_hi), (v_lo, v_hi)]) => {
                vec![0.5 * (u_lo + u_hi), 0.5 * (v_lo + v_hi)]
            }
            None => vec![0.0, 0.0],
        };
        let mut distance = |uv: &[f64]| (f(uv[0], uv[1]) - position).norm_squared();
        let result = nelder_mead(
            &mut distance,
            &start,
            &NmOptions {
                max_iter: 200,
                ftol_rel: 1e-10,
                window: 20,
                initial_step: 0.5,
            },
        );
        let clamp_bounds: Vec<Option<(f64, f64)>> = match bounds {
            Some([u, v]) => vec![Some(u), Some(v)],
            None => vec![None, None],
        };
        let params: Vec<f64> = result
            .x
            .iter()
            .zip(&clamp_bounds)
            .map(|(&p, b)| match b {
                Some((lo, hi)) => p.clamp(*lo, *hi),
                None => p,
            })
            .collect();
        Self {
            vertex,
            kind: ClampKind::Surface { f },
            params,
            bounds: clamp_bounds,
        }
    }

    /// Constrain to the plane through `origin` with the given normal; the
    /// vertex's normal component is locked to zero.
    pub fn plane(vertex: VertexId, position: Vec3, origin: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize();
        // in-plane basis: cross with the least-aligned coordinate axis
        let seed = if n.x.abs() <= n.y.abs() && n.x.abs() <= n.z.abs() {
            Vec3::new(1.0, 0.0, 0.0)
        } else if n.y.abs() <= n.z.abs() {
            Vec3::new(0.0, 1.0, 0.0)
        } else {
            Vec3::new(0.0, 0.0, 1.0)
        };
        let e_u = n.cross(&seed).normalize();
        let e_v = n.cross(&e_u);

        let offset = position - origin;
        Self {
            vertex,
            kind: ClampKind::Plane { origin, e_u, e_v },
            params: vec![offset.dot(&e_u), offset.dot(&e_v)],
            bounds: vec![None, None],
        }
    }

    #[inline]
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    #[inline]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    #[inline]
    pub fn bounds(&self) -> &[Option<(f64, f64)>] {
        &self.bounds
    }

    pub fn set_params(&mut self, params: &[f64]) {
        debug_assert_eq!(params.len(), self.params.len());
        self.params.copy_from_slice(params);
    }

    /// Position for the current parameters.
    pub fn point(&self) -> Vec3 {
        self.point_of(&self.params)
    }

    /// Position for arbitrary parameters.
    pub fn point_of(&self, params: &[f64]) -> Vec3 {
        match &self.kind {
            ClampKind::Free => Vec3::new(params[0], params[1], params[2]),
            ClampKind::Line { anchor, direction } => anchor + direction * params[0],
            ClampKind::Curve { f } => f(params[0]),
            ClampKind::Radial {
                origin,
                axis,
                initial,
            } => rotate_around(*initial, params[0], *axis, *origin),
            ClampKind::Surface { f } => f(params[0], params[1]),
            ClampKind::Plane { origin, e_u, e_v } => origin + e_u * params[0] + e_v * params[1],
        }
    }
}

impl std::fmt::Debug for Clamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            ClampKind::Free => "free",
            ClampKind::Line { .. } => "line",
            ClampKind::Curve { .. } => "curve",
            ClampKind::Radial { .. } => "radial",
            ClampKind::Surface { .. } => "surface",
            ClampKind::Plane { .. } => "plane",
        };
        f.debug_struct("Clamp")
            .field("vertex", &self.vertex)
            .field("kind", &kind)
            .field("params", &self.params)
            .finish()
    }
}
