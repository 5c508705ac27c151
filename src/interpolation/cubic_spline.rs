//! Natural cubic spline.
//!
//! On each interval `[t_i, t_{i+1}]` the spline is
//!
//! ```text
//! S_i(t) = y_i + b_i·dt + c_i·dt² + d_i·dt³,   dt = t - t_i
//! ```
//!
//! with the natural boundary condition `S''(t_0) = S''(t_{n-1}) = 0`. The interior
//! `c_i` solve a symmetric, diagonally dominant tridiagonal system, solved here with
//! the Thomas algorithm. With only two samples the system is empty and the spline
//! reduces to the straight line through them.

use super::{accel::IntervalAccel, DerivativeOrder};

#[derive(Debug, Clone)]
pub(crate) struct CubicSpline<'a> {
    times: &'a [f64],
    points: &'a [f64],
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl<'a> CubicSpline<'a> {
    /// Build the spline coefficients.
    ///
    /// `times` must be strictly increasing and hold the same number (at least two)
    /// of entries as `points`; both are checked by the caller.
    pub(crate) fn new(times: &'a [f64], points: &'a [f64]) -> Self {
        let n = points.len();
        let h: Vec<f64> = times.windows(2).map(|w| w[1] - w[0]).collect();
        let c = natural_second_coefficients(&h, points);

        let mut b = Vec::with_capacity(n - 1);
        let mut d = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            b.push((points[i + 1] - points[i]) / h[i] - h[i] * (2.0 * c[i] + c[i + 1]) / 3.0);
            d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
        }

        CubicSpline {
            times,
            points,
            b,
            c,
            d,
        }
    }

    pub(crate) fn evaluate(
        &self,
        time: f64,
        order: DerivativeOrder,
        accel: &mut IntervalAccel,
    ) -> f64 {
        let i = accel.find(self.times, time);
        let dt = time - self.times[i];
        let (b, c, d) = (self.b[i], self.c[i], self.d[i]);

        match order {
            DerivativeOrder::Value => self.points[i] + dt * (b + dt * (c + dt * d)),
            DerivativeOrder::First => b + dt * (2.0 * c + 3.0 * d * dt),
            DerivativeOrder::Second => 2.0 * c + 6.0 * d * dt,
        }
    }
}

/// Solve for the `c_i` (half the second derivative at each knot).
///
/// `c_0` and `c_{n-1}` are pinned to zero, the `n - 2` interior unknowns satisfy
///
/// ```text
/// h_{i-1}·c_{i-1} + 2(h_{i-1} + h_i)·c_i + h_i·c_{i+1} = 3(Δ_i - Δ_{i-1})
/// ```
///
/// where `Δ_i = (y_{i+1} - y_i) / h_i`.
fn natural_second_coefficients(h: &[f64], points: &[f64]) -> Vec<f64> {
    let n = points.len();
    let mut c = vec![0.0; n];
    if n < 3 {
        return c;
    }

    let m = n - 2;
    let mut c_prime = vec![0.0; m];
    let mut d_prime = vec![0.0; m];

    // forward sweep
    for k in 0..m {
        let i = k + 1;
        let lower = if k > 0 { h[i - 1] } else { 0.0 };
        let upper = if k + 1 < m { h[i] } else { 0.0 };
        let diag = 2.0 * (h[i - 1] + h[i]);
        let rhs = 3.0
            * ((points[i + 1] - points[i]) / h[i] - (points[i] - points[i - 1]) / h[i - 1]);

        let (prev_c, prev_d) = if k > 0 {
            (c_prime[k - 1], d_prime[k - 1])
        } else {
            (0.0, 0.0)
        };
        let denom = diag - lower * prev_c;
        c_prime[k] = upper / denom;
        d_prime[k] = (rhs - lower * prev_d) / denom;
    }

    // back substitution, c[n - 1] stays at zero
    for k in (0..m).rev() {
        c[k + 1] = d_prime[k] - c_prime[k] * c[k + 2];
    }

    c
}
