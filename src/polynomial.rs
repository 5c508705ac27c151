//! # Polynomial evaluation with derivatives
//!
//! Evaluates `p(t) = c₀ + c₁·t + … + cₙ·tⁿ` (coefficients in **ascending** power order)
//! together with its derivatives in a single generalized Horner pass. Each step of the
//! pass performs one synthetic division of the running remainders by `(t - x)`, so no
//! derivative polynomial is ever expanded symbolically.
//!
//! Derivative orders above the degree of the polynomial are exactly zero.

use crate::kinematics_errors::KinematicsError;

/// Evaluate `p(x), p'(x), …, p⁽ᵐ⁾(x)` with `m = min(d, n)`.
///
/// Arguments
/// -----------------
/// * `coeffs`: coefficients `c₀…cₙ`, ascending power order.
/// * `x`: evaluation point.
/// * `order`: highest derivative order `d` requested, unbounded.
///
/// Return
/// ----------
/// * A vector of `min(d, n) + 1` entries, entry `k` holding `p⁽ᵏ⁾(x)`; every derivative
///   past the last entry is zero. [`KinematicsError::EmptyCoefficients`] if `coeffs`
///   is empty.
pub fn evaluate_derivatives(
    coeffs: &[f64],
    x: f64,
    order: usize,
) -> Result<Vec<f64>, KinematicsError> {
    let Some((&leading, lower)) = coeffs.split_last() else {
        return Err(KinematicsError::EmptyCoefficients);
    };

    // orders above the degree are identically zero and never stored
    let active = order.min(lower.len());
    let mut res = vec![leading; active + 1];

    for (i, &c) in lower.iter().enumerate().rev() {
        res[0] = res[0] * x + c;
        // the k-th remainder is complete once fewer than k coefficients are left
        for k in 1..=active.min(i) {
            res[k] = res[k] * x + res[k - 1];
        }
    }

    // the Horner remainders are p⁽ᵏ⁾(x) / k!
    let mut factorial = 1.0;
    for (k, r) in res.iter_mut().enumerate().skip(2) {
        factorial *= k as f64;
        *r *= factorial;
    }

    Ok(res)
}

/// Evaluate the `order`-th derivative of the polynomial at `x`.
///
/// This is [`evaluate_derivatives`] keeping only the last entry. Any `order` above the
/// degree gives `0.0`.
pub fn evaluate_polynomial(coeffs: &[f64], x: f64, order: usize) -> Result<f64, KinematicsError> {
    let derivatives = evaluate_derivatives(coeffs, x, order)?;
    Ok(derivatives.get(order).copied().unwrap_or(0.0))
}
