//! Small derivative-free minimizers.
//!
//! Nothing here knows about meshes; the optimizer feeds in closures over
//! flat parameter vectors.

/// Nelder–Mead options.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NmOptions {
    pub max_iter: usize,
    /// Stop when the relative best-value improvement over `window`
    /// iterations falls below this.
    pub ftol_rel: f64,
    pub window: usize,
    /// Initial simplex spread per coordinate.
    pub initial_step: f64,
}

impl Default for NmOptions {
    fn default() -> Self {
        Self {
            max_iter: 500,
            ftol_rel: 1e-4,
            window: 10,
            initial_step: 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct NmResult {
    pub x: Vec<f64>,
    pub fx: f64,
    pub evaluations: usize,
    /// Best value after each iteration; non-increasing by construction.
    pub history: Vec<f64>,
}

/// Nelder–Mead downhill simplex with standard coefficients.
///
/// Terminates on the iteration budget or when the best value stops
/// improving (relative change below `ftol_rel` over `window` iterations).
pub(crate) fn nelder_mead(
    f: &mut dyn FnMut(&[f64]) -> f64,
    x0: &[f64],
    opts: &NmOptions,
) -> NmResult {
    let n = x0.len();
    let mut evaluations = 0;
    let mut eval = |x: &[f64], count: &mut usize| -> f64 {
        *count += 1;
        f(x)
    };

    if n == 0 {
        let fx = eval(x0, &mut evaluations);
        return NmResult {
            x: Vec::new(),
            fx,
            evaluations,
            history: vec![fx],
        };
    }

    // initial simplex: x0 plus one step along each coordinate
    let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
    let fx0 = eval(x0, &mut evaluations);
    simplex.push((x0.to_vec(), fx0));
    for i in 0..n {
        let mut x = x0.to_vec();
        x[i] += opts.initial_step;
        let fx = eval(&x, &mut evaluations);
        simplex.push((x, fx));
    }

    let mut history = Vec::with_capacity(opts.max_iter);

    for _ in 0..opts.max_iter {
        simplex.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        let best = simplex[0].1;
        history.push(best);

        if history.len() > opts.window {
            let then = history[history.len() - 1 - opts.window];
            let rel = (then - best) / then.abs().max(1e-12);
            if rel < opts.ftol_rel {
                break;
            }
        }

        // centroid of all but the worst
        let worst = simplex[n].clone();
        let mut centroid = vec![0.0; n];
        for (x, _) in simplex.iter().take(n) {
            for (c, xi) in centroid.iter_mut().zip(x) {
                *c += xi / n as f64;
            }
        }

        let lerp = |t: f64| -> Vec<f64> {
            centroid
                .iter()
                .zip(&worst.0)
                .map(|(c, w)| c + t * (c - w))
                .collect()
        };

        // reflection
        let xr = lerp(1.0);
        let fr = eval(&xr, &mut evaluations);

        if fr < simplex[0].1 {
            // expansion
            let xe = lerp(2.0);
            let fe = eval(&xe, &mut evaluations);
            simplex[n] = if fe < fr { (xe, fe) } else { (xr, fr) };
            continue;
        }
        if fr < simplex[n - 1].1 {
            simplex[n] = (xr, fr);
            continue;
        }

        // contraction (outside or inside, whichever side reflection landed)
        let xc = if fr < worst.1 { lerp(0.5) } else { lerp(-0.5) };
        let fc = eval(&xc, &mut evaluations);
        if fc < worst.1.min(fr) {
            simplex[n] = (xc, fc);
            continue;
        }

        // shrink toward the best point
        let best_x = simplex[0].0.clone();
        for entry in simplex.iter_mut().skip(1) {
            let x: Vec<f64> = entry
                .0
                .iter()
                .zip(&best_x)
                .map(|(xi, bi)| bi + 0.5 * (xi - bi))
                .collect();
            let fx = eval(&x, &mut evaluations);
            *entry = (x, fx);
        }
    }

    simplex.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let (x, fx) = simplex.swap_remove(0);
    NmResult {
        x,
        fx,
        evaluations,
        history,
    }
}

/// Golden-section search on a bounded interval.
pub(crate) fn minimize_scalar_bounded(f: &dyn Fn(f64) -> f64, lo: f64, hi: f64) -> f64 {
    const INV_PHI: f64 = 0.618_033_988_749_894_9;
    let (mut a, mut b) = (lo.min(hi), lo.max(hi));
    let mut c = b - (b - a) * INV_PHI;
    let mut d = a + (b - a) * INV_PHI;
    let (mut fc, mut fd) = (f(c), f(d));

    for _ in 0..200 {
        if (b - a).abs() < 1e-10 * (1.0 + a.abs() + b.abs()) {
            break;
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - (b - a) * INV_PHI;
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + (b - a) * INV_PHI;
            fd = f(d);
        }
    }

    0.5 * (a + b)
}

/// Unbounded scalar minimization: bracket the minimum by doubling steps
/// from 0, then refine with the golden section.
pub(crate) fn minimize_scalar(f: &dyn Fn(f64) -> f64, bounds: Option<(f64, f64)>) -> f64 {
    if let Some((lo, hi)) = bounds {
        return minimize_scalar_bounded(f, lo, hi);
    }

    let (mut a, mut b) = (0.0, 1.0);
    let (mut fa, mut fb) = (f(a), f(b));
    if fa < fb {
        // walk the other way
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }
    let mut step = b - a;
    let mut c = b + step;
    let mut fc = f(c);
    for _ in 0..100 {
        if fc >= fb {
            break;
        }
        a = b;
        b = c;
        fb = fc;
        step *= 2.0;
        c = b + step;
        fc = f(c);
    }

    minimize_scalar_bounded(f, a.min(c), a.max(c))
}
