//! # Scalar interpolation over time-tagged samples
//!
//! This module interpolates **one scalar channel** (e.g. the `x` coordinate of a
//! spacecraft position, or the `w` component of its attitude quaternion) at an
//! arbitrary query time, optionally returning the first or second time derivative.
//!
//! ## Public API
//!
//! - [`InterpolationMethod`](crate::interpolation::InterpolationMethod) – piecewise scheme
//!   selector (`linear`, `cubic-spline`), parseable from configuration strings.
//! - [`DerivativeOrder`](crate::interpolation::DerivativeOrder) – value, first or second
//!   derivative.
//! - [`interpolate`](crate::interpolation::interpolate) – the scalar primitive itself.
//!
//! ## Preconditions
//!
//! Every check is done before any interpolant is built:
//!
//! 1. at least two samples,
//! 2. as many samples as timestamps,
//! 3. strictly increasing timestamps (a NaN timestamp fails this check),
//! 4. query time within `[first, last]` timestamp (inclusive).
//!
//! ## Lifetime of the interpolation state
//!
//! The interpolant and its bracketing-interval accelerator are built for one call and
//! dropped when it returns. Nothing is cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use kinematic_interp::interpolation::{interpolate, DerivativeOrder, InterpolationMethod};
//!
//! let times = [0.0, 10.0];
//! let points = [0.0, 1.0];
//! let x = interpolate(&points, &times, 5.0, InterpolationMethod::Linear, DerivativeOrder::Value)?;
//! assert_eq!(x, 0.5);
//! # Ok::<(), kinematic_interp::kinematics_errors::KinematicsError>(())
//! ```

mod accel;
mod cubic_spline;
mod linear;

use std::{cmp::Ordering, fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{constants::MIN_SAMPLES, kinematics_errors::KinematicsError};
use accel::IntervalAccel;
use cubic_spline::CubicSpline;
use linear::LinearInterpolant;

/// Piecewise interpolation scheme, applied uniformly to every channel of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationMethod {
    /// Straight segments between consecutive samples.
    #[default]
    Linear,
    /// Natural cubic spline through all samples.
    #[serde(alias = "cspline")]
    CubicSpline,
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationMethod::Linear => write!(f, "linear"),
            InterpolationMethod::CubicSpline => write!(f, "cubic-spline"),
        }
    }
}

impl FromStr for InterpolationMethod {
    type Err = KinematicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(InterpolationMethod::Linear),
            "cubic-spline" | "cubic_spline" | "cspline" | "cubic" => {
                Ok(InterpolationMethod::CubicSpline)
            }
            _ => Err(KinematicsError::InvalidInterpolationMethod(s.to_string())),
        }
    }
}

impl TryFrom<&str> for InterpolationMethod {
    type Error = KinematicsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which quantity to return from an interpolant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivativeOrder {
    Value = 0,
    First = 1,
    Second = 2,
}

impl TryFrom<u8> for DerivativeOrder {
    type Error = KinematicsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DerivativeOrder::Value),
            1 => Ok(DerivativeOrder::First),
            2 => Ok(DerivativeOrder::Second),
            d => Err(KinematicsError::InvalidDerivativeOrder(d)),
        }
    }
}

/// Interpolant built over one channel, borrowing its samples.
#[derive(Debug)]
enum Interpolant<'a> {
    Linear(LinearInterpolant<'a>),
    CubicSpline(CubicSpline<'a>),
}

impl<'a> Interpolant<'a> {
    fn build(method: InterpolationMethod, times: &'a [f64], points: &'a [f64]) -> Self {
        match method {
            InterpolationMethod::Linear => {
                Interpolant::Linear(LinearInterpolant::new(times, points))
            }
            InterpolationMethod::CubicSpline => {
                Interpolant::CubicSpline(CubicSpline::new(times, points))
            }
        }
    }

    fn evaluate(&self, time: f64, order: DerivativeOrder, accel: &mut IntervalAccel) -> f64 {
        match self {
            Interpolant::Linear(interp) => interp.evaluate(time, order, accel),
            Interpolant::CubicSpline(interp) => interp.evaluate(time, order, accel),
        }
    }
}

/// Check that a channel holds enough samples, one per timestamp.
pub(crate) fn check_samples(points: &[f64], times: &[f64]) -> Result<(), KinematicsError> {
    if points.len() < MIN_SAMPLES {
        return Err(KinematicsError::InsufficientData(points.len()));
    }
    if points.len() != times.len() {
        return Err(KinematicsError::LengthMismatch {
            points: points.len(),
            times: times.len(),
        });
    }
    Ok(())
}

/// Check that `times` is strictly increasing and that `time` lies within it.
///
/// `times` must hold at least [`MIN_SAMPLES`] entries, see [`check_samples`].
pub(crate) fn check_times(times: &[f64], time: f64) -> Result<(), KinematicsError> {
    // unordered pairs (NaN timestamps) are violations too
    if let Some(index) = times
        .iter()
        .tuple_windows()
        .position(|(a, b)| a.partial_cmp(b) != Some(Ordering::Less))
    {
        return Err(KinematicsError::NonIncreasingTimes(index + 1));
    }

    let (start, end) = (times[0], times[times.len() - 1]);
    // the range check also rejects a NaN query time
    if !(start..=end).contains(&time) {
        return Err(KinematicsError::OutOfDomain { time, start, end });
    }

    Ok(())
}

/// Build the interpolant of one channel and evaluate several derivative orders at once.
///
/// The samples must already pass [`check_samples`] and [`check_times`]. The interpolant
/// and its interval accelerator are shared by all requested orders, then released on
/// return.
pub(crate) fn evaluate_orders<const K: usize>(
    points: &[f64],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
    orders: [DerivativeOrder; K],
) -> [f64; K] {
    let interpolant = Interpolant::build(method, times, points);
    let mut accel = IntervalAccel::new();
    tracing::debug!(samples = points.len(), %method, "built piecewise interpolant");

    orders.map(|order| interpolant.evaluate(time, order, &mut accel))
}

/// Interpolate a single scalar channel at `time`.
///
/// Arguments
/// -----------------
/// * `points`: channel samples.
/// * `times`: timestamps of the samples, strictly increasing, same length as `points`.
/// * `time`: query time, within `[times[0], times[n - 1]]`.
/// * `method`: piecewise scheme to build.
/// * `order`: value, first or second derivative.
///
/// Return
/// ----------
/// * The interpolated value (or derivative), or a [`KinematicsError`] describing the
///   first violated precondition.
pub fn interpolate(
    points: &[f64],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
    order: DerivativeOrder,
) -> Result<f64, KinematicsError> {
    check_samples(points, times)?;
    check_times(times, time)?;

    let [value] = evaluate_orders(points, times, time, method, [order]);
    Ok(value)
}

#[cfg(test)]
mod interpolation_test {
    use super::*;
    use approx::assert_relative_eq;

    const METHODS: [InterpolationMethod; 2] =
        [InterpolationMethod::Linear, InterpolationMethod::CubicSpline];

    #[test]
    fn test_parse_method() {
        assert_eq!(
            "linear".parse::<InterpolationMethod>(),
            Ok(InterpolationMethod::Linear)
        );
        assert_eq!(
            InterpolationMethod::try_from("cspline"),
            Ok(InterpolationMethod::CubicSpline)
        );
        assert_eq!(
            "spherical".parse::<InterpolationMethod>(),
            Err(KinematicsError::InvalidInterpolationMethod(
                "spherical".into()
            ))
        );
        for method in METHODS {
            assert_eq!(method.to_string().parse::<InterpolationMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_method_serde() {
        let method: InterpolationMethod = serde_json::from_str("\"cubic-spline\"").unwrap();
        assert_eq!(method, InterpolationMethod::CubicSpline);
        let method: InterpolationMethod = serde_json::from_str("\"cspline\"").unwrap();
        assert_eq!(method, InterpolationMethod::CubicSpline);
        assert_eq!(
            serde_json::to_string(&InterpolationMethod::Linear).unwrap(),
            "\"linear\""
        );
    }

    #[test]
    fn test_derivative_order_from_u8() {
        assert_eq!(DerivativeOrder::try_from(0), Ok(DerivativeOrder::Value));
        assert_eq!(DerivativeOrder::try_from(2), Ok(DerivativeOrder::Second));
        assert_eq!(
            DerivativeOrder::try_from(3),
            Err(KinematicsError::InvalidDerivativeOrder(3))
        );
    }

    #[test]
    fn test_linear_is_affine() {
        let (t0, t1, v0, v1) = (2.0, 7.5, -3.0, 8.0);
        for t in [2.0, 3.3, 5.0, 7.5] {
            let value = interpolate(
                &[v0, v1],
                &[t0, t1],
                t,
                InterpolationMethod::Linear,
                DerivativeOrder::Value,
            )
            .unwrap();
            assert_relative_eq!(value, v0 + (v1 - v0) * (t - t0) / (t1 - t0), epsilon = 1e-14);
        }
    }

    #[test]
    fn test_domain_is_inclusive() {
        let times = [1.0, 2.0, 3.0];
        let points = [4.0, 5.0, 7.0];
        for method in METHODS {
            let first = interpolate(&points, &times, 1.0, method, DerivativeOrder::Value);
            let last = interpolate(&points, &times, 3.0, method, DerivativeOrder::Value);
            assert_relative_eq!(first.unwrap(), 4.0, epsilon = 1e-12);
            assert_relative_eq!(last.unwrap(), 7.0, epsilon = 1e-12);

            let before = 1.0 - f64::EPSILON;
            assert_eq!(
                interpolate(&points, &times, before, method, DerivativeOrder::Value),
                Err(KinematicsError::OutOfDomain {
                    time: before,
                    start: 1.0,
                    end: 3.0
                })
            );
            let after = 3.0 + 4.0 * f64::EPSILON;
            assert!(matches!(
                interpolate(&points, &times, after, method, DerivativeOrder::Value),
                Err(KinematicsError::OutOfDomain { .. })
            ));
        }
    }

    #[test]
    fn test_nan_time_is_out_of_domain() {
        let result = interpolate(
            &[0.0, 1.0],
            &[0.0, 1.0],
            f64::NAN,
            InterpolationMethod::Linear,
            DerivativeOrder::Value,
        );
        assert!(matches!(result, Err(KinematicsError::OutOfDomain { .. })));
    }

    #[test]
    fn test_preconditions_order() {
        let linear = InterpolationMethod::Linear;
        let value = DerivativeOrder::Value;

        assert_eq!(
            interpolate(&[1.0], &[0.0], 0.0, linear, value),
            Err(KinematicsError::InsufficientData(1))
        );
        assert_eq!(
            interpolate(&[], &[], 0.0, linear, value),
            Err(KinematicsError::InsufficientData(0))
        );
        assert_eq!(
            interpolate(&[1.0, 2.0], &[0.0, 1.0, 2.0], 0.5, linear, value),
            Err(KinematicsError::LengthMismatch {
                points: 2,
                times: 3
            })
        );
        assert_eq!(
            interpolate(&[1.0, 2.0, 3.0], &[0.0, 2.0, 2.0], 1.0, linear, value),
            Err(KinematicsError::NonIncreasingTimes(2))
        );
    }

    #[test]
    fn test_unordered_times_reported_before_domain() {
        let linear = InterpolationMethod::Linear;
        let value = DerivativeOrder::Value;

        // 4.0 lies between the samples but past the last timestamp
        assert_eq!(
            interpolate(&[1.0, 2.0, 3.0], &[0.0, 5.0, 3.0], 4.0, linear, value),
            Err(KinematicsError::NonIncreasingTimes(2))
        );
        assert_eq!(
            interpolate(&[1.0, 2.0, 3.0], &[0.0, 5.0, 3.0], 9.0, linear, value),
            Err(KinematicsError::NonIncreasingTimes(2))
        );
    }

    #[test]
    fn test_nan_timestamp_is_rejected() {
        for method in METHODS {
            assert_eq!(
                interpolate(
                    &[1.0, 2.0, 3.0],
                    &[0.0, f64::NAN, 2.0],
                    1.0,
                    method,
                    DerivativeOrder::Value
                ),
                Err(KinematicsError::NonIncreasingTimes(1))
            );
        }
    }

    #[test]
    fn test_orders_share_one_interpolant() {
        let times = [0.0, 1.0, 2.0, 3.0];
        let points = [0.0, 1.0, 8.0, 27.0];
        let [value, first, second] = evaluate_orders(
            &points,
            &times,
            1.5,
            InterpolationMethod::CubicSpline,
            [
                DerivativeOrder::Value,
                DerivativeOrder::First,
                DerivativeOrder::Second,
            ],
        );

        let method = InterpolationMethod::CubicSpline;
        assert_eq!(
            value,
            interpolate(&points, &times, 1.5, method, DerivativeOrder::Value).unwrap()
        );
        assert_eq!(
            first,
            interpolate(&points, &times, 1.5, method, DerivativeOrder::First).unwrap()
        );
        assert_eq!(
            second,
            interpolate(&points, &times, 1.5, method, DerivativeOrder::Second).unwrap()
        );
    }

    #[test]
    fn test_spline_tracks_smooth_signal() {
        let times: Vec<f64> = (0..=40).map(|i| i as f64 * 0.05).collect();
        let points: Vec<f64> = times.iter().map(|t| t.sin()).collect();
        let method = InterpolationMethod::CubicSpline;

        for t in [0.52, 0.98, 1.31] {
            let value = interpolate(&points, &times, t, method, DerivativeOrder::Value).unwrap();
            let slope = interpolate(&points, &times, t, method, DerivativeOrder::First).unwrap();
            assert_relative_eq!(value, t.sin(), epsilon = 1e-5);
            assert_relative_eq!(slope, t.cos(), epsilon = 1e-3);
        }
    }
}
