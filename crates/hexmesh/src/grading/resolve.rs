//! Chop → segment resolution.
//!
//! Cell sizes form a geometric progression: first cell `s`, cell-to-cell
//! ratio `r`, count `n`, last cell `e = s·r^(n-1)`, total expansion
//! `R = e/s = r^(n-1)`, total length `L = s·(r^n - 1)/(r - 1)` (`L = n·s`
//! at `r = 1`). Whichever pair the user gave, the others are recovered by
//! inverting these relations; the count is rounded to the nearest positive
//! integer and the expansion re-derived so the total length stays exact.

use crate::errors::MeshError;

use super::chop::Chop;
use super::grading::Segment;

const EPS_RATIO: f64 = 1e-12;

/// Resolve one chop against the absolute length it covers.
pub(crate) fn resolve(length: f64, chop: &Chop) -> Result<Segment, MeshError> {
    if length <= 0.0 {
        return Err(MeshError::InvalidChop(format!(
            "chop covers a non-positive length {length}"
        )));
    }
    for (name, value) in [
        ("total_expansion", chop.total_expansion),
        ("start_size", chop.start_size),
        ("end_size", chop.end_size),
        ("c2c_expansion", chop.c2c_expansion),
    ] {
        if let Some(v) = value {
            if v <= 0.0 || !v.is_finite() {
                return Err(MeshError::InvalidChop(format!("{name} must be positive, got {v}")));
            }
        }
    }
    if chop.count == Some(0) {
        return Err(MeshError::InvalidChop("count must be at least 1".into()));
    }

    let specified = [
        chop.count.is_some(),
        chop.total_expansion.is_some(),
        chop.start_size.is_some(),
        chop.end_size.is_some(),
        chop.c2c_expansion.is_some(),
    ]
    .iter()
    .filter(|&&s| s)
    .count();

    if specified == 0 {
        return Err(MeshError::InvalidChop(
            "no parameters given; supply a count or a cell size".into(),
        ));
    }
    if specified > 2 {
        return Err(MeshError::InvalidChop(
            "over-constrained: give at most two of count/total_expansion/start_size/end_size/c2c_expansion"
                .into(),
        ));
    }

    let (count, expansion) = match chop.count {
        Some(n) => with_count(length, n, chop)?,
        None => without_count(length, chop)?,
    };

    Ok(Segment {
        fraction: chop.length_ratio,
        count,
        expansion,
    })
}

/// The count is known; at most one other parameter pins the expansion.
fn with_count(length: f64, n: usize, chop: &Chop) -> Result<(usize, f64), MeshError> {
    if let Some(r_total) = chop.total_expansion {
        return Ok((n, r_total));
    }
    if let Some(c2c) = chop.c2c_expansion {
        return Ok((n, c2c.powi(n as i32 - 1)));
    }
    if let Some(s) = chop.start_size {
        let r = ratio_for_start(length, n, s)?;
        return Ok((n, r.powi(n as i32 - 1)));
    }
    if let Some(e) = chop.end_size {
        // the reversed progression starts with the last cell
        let r = ratio_for_start(length, n, e)?;
        return Ok((n, 1.0 / r.powi(n as i32 - 1)));
    }
    // count alone: uniform cells
    Ok((n, 1.0))
}

/// No count given; derive it from sizes and/or expansions, then re-derive
/// the expansion against the rounded count.
fn without_count(length: f64, chop: &Chop) -> Result<(usize, f64), MeshError> {
    let (start, end) = match (chop.start_size, chop.end_size, chop.total_expansion) {
        (Some(s), Some(e), None) => (Some(s), Some(e)),
        (Some(s), None, Some(r_total)) => (Some(s), Some(s * r_total)),
        (None, Some(e), Some(r_total)) => (Some(e / r_total), Some(e)),
        (Some(s), None, None) => (Some(s), None),
        (None, Some(e), None) => (None, Some(e)),
        (None, None, Some(r_total)) => {
            // total and cell-to-cell expansion together pin the count
            let Some(c2c) = chop.c2c_expansion else {
                return Err(MeshError::InvalidChop(
                    "an expansion ratio alone does not determine a cell count".into(),
                ));
            };
            if (c2c - 1.0).abs() < 1e-9 {
                return Err(MeshError::InvalidChop(
                    "total and c2c expansion of 1 do not determine a cell count".into(),
                ));
            }
            let n = (1.0 + r_total.ln() / c2c.ln()).round();
            if !n.is_finite() || n < 1.0 {
                return Err(MeshError::InvalidChop(format!(
                    "expansions {r_total} and {c2c} give a non-positive count"
                )));
            }
            let n = n as usize;
            return Ok((n, c2c.powi(n as i32 - 1)));
        }
        (None, None, None) => (None, None),
        (Some(_), Some(_), Some(_)) => unreachable!("rejected as over-constrained above"),
    };

    match (start, end) {
        (Some(s), Some(e)) => {
            let n = count_for_sizes(length, s, e)?;
            // exact expansion for the rounded count
            let r = ratio_for_start(length, n, s)?;
            Ok((n, r.powi(n as i32 - 1)))
        }
        (Some(s), None) => {
            if let Some(c2c) = chop.c2c_expansion {
                let n = count_for_c2c(length, s, c2c)?;
                let r = ratio_for_start(length, n, s)?;
                Ok((n, r.powi(n as i32 - 1)))
            } else {
                // lone start size: uniform cells of roughly that size
                let n = (length / s).round().max(1.0) as usize;
                Ok((n, 1.0))
            }
        }
        (None, Some(e)) => {
            if let Some(c2c) = chop.c2c_expansion {
                let n = count_for_c2c(length, e, 1.0 / c2c)?;
                let r = ratio_for_start(length, n, e)?;
                Ok((n, 1.0 / r.powi(n as i32 - 1)))
            } else {
                let n = (length / e).round().max(1.0) as usize;
                Ok((n, 1.0))
            }
        }
        (None, None) => Err(MeshError::InvalidChop(
            "an expansion ratio alone does not determine a cell count".into(),
        )),
    }
}

/// Count implied by first and last cell size.
fn count_for_sizes(length: f64, s: f64, e: f64) -> Result<usize, MeshError> {
    if (e / s - 1.0).abs() < 1e-9 {
        return Ok((length / s).round().max(1.0) as usize);
    }
    // r^(n-1) = e/s combined with the length sum gives r = (L - s)/(L - e)
    let denom = length - e;
    if denom <= 0.0 || length - s <= 0.0 {
        return Err(MeshError::InvalidChop(format!(
            "cell sizes {s} and {e} cannot fill length {length}"
        )));
    }
    let r = (length - s) / denom;
    if r <= 0.0 || (r - 1.0).abs() < EPS_RATIO {
        return Err(MeshError::InvalidChop(format!(
            "cell sizes {s} and {e} are inconsistent with length {length}"
        )));
    }
    let n = 1.0 + (e / s).ln() / r.ln();
    if !n.is_finite() || n < 0.5 {
        return Err(MeshError::InvalidChop(format!(
            "cell sizes {s} and {e} give a non-positive count for length {length}"
        )));
    }
    Ok(n.round().max(1.0) as usize)
}

/// Count implied by a start size and a cell-to-cell ratio.
fn count_for_c2c(length: f64, s: f64, c2c: f64) -> Result<usize, MeshError> {
    if (c2c - 1.0).abs() < 1e-9 {
        return Ok((length / s).round().max(1.0) as usize);
    }
    let arg = 1.0 + length * (c2c - 1.0) / s;
    if arg <= 0.0 {
        return Err(MeshError::InvalidChop(format!(
            "c2c expansion {c2c} with size {s} cannot fill length {length}"
        )));
    }
    let n = arg.ln() / c2c.ln();
    if !n.is_finite() || n < 0.5 {
        return Err(MeshError::InvalidChop(format!(
            "c2c expansion {c2c} with size {s} gives a non-positive count"
        )));
    }
    Ok(n.round().max(1.0) as usize)
}

/// Cell-to-cell ratio so that `n` cells starting at size `s` sum to `length`.
///
/// The sum `s·(r^n - 1)/(r - 1)` is strictly increasing in `r`, so a plain
/// bisection is reliable.
pub(crate) fn ratio_for_start(length: f64, n: usize, s: f64) -> Result<f64, MeshError> {
    if n == 1 {
        return Ok(1.0);
    }
    let uniform = s * n as f64;
    if (uniform / length - 1.0).abs() < 1e-12 {
        return Ok(1.0);
    }

    let total = |r: f64| -> f64 {
        if (r - 1.0).abs() < EPS_RATIO {
            uniform
        } else {
            s * (r.powi(n as i32) - 1.0) / (r - 1.0)
        }
    };

    let (mut lo, mut hi) = if uniform > length {
        (1e-9, 1.0)
    } else {
        (1.0, 1e9)
    };
    if total(lo) > length || total(hi) < length {
        return Err(MeshError::InvalidChop(format!(
            "no expansion fits {n} cells of start size {s} into length {length}"
        )));
    }

    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if total(mid) < length {
            lo = mid;
        } else {
            hi = mid;
        }
        if (hi - lo) / hi < 1e-14 {
            break;
        }
    }

    Ok(0.5 * (lo + hi))
}
