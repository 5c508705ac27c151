//! # Kinematics interpolator
//!
//! Public entry points computing the **position**, **velocity**, **rotation** and
//! **angular velocity** of a moving body at an arbitrary query time, either from
//! tabulated samples or from a polynomial model.
//!
//! ## Tabulated data
//!
//! Samples are handed over channel-separated, all channels sharing one timestamp
//! sequence:
//!
//! ```text
//! coords    = [[x_0, x_1, …, x_n],
//!              [y_0, y_1, …, y_n],
//!              [z_0, z_1, …, z_n]]
//! rotations = [[w_0, …, w_n], [x_0, …, x_n], [y_0, …, y_n], [z_0, …, z_n]]
//! times     =  [t_0, t_1, …, t_n]
//! ```
//!
//! Each channel is interpolated independently with the requested
//! [`InterpolationMethod`]. Rotation channels are coupled only by quaternion
//! renormalization, applied to every sample before interpolation and to the
//! interpolated 4-tuple afterwards (see [`crate::quaternion`]).
//!
//! ## Polynomial models
//!
//! ```text
//! coeffs = [[cx_0, cx_1, …, cx_n],
//!           [cy_0, cy_1, …, cy_n],
//!           [cz_0, cz_1, …, cz_n]]
//! x(t) = cx_0 + cx_1·t + … + cx_n·tⁿ
//! ```
//!
//! ## Validation
//!
//! The channel (or axis) count is checked first, then every per-channel
//! precondition, all before any interpolant is built. Errors are returned, never
//! logged.
//!
//! ## Example
//!
//! ```rust
//! use kinematic_interp::interpolation::InterpolationMethod;
//! use kinematic_interp::kinematics::{get_position, get_velocity};
//!
//! let coords = [vec![0.0, 1.0], vec![0.0, 0.0], vec![0.0, 0.0]];
//! let times = [0.0, 10.0];
//!
//! let position = get_position(&coords, &times, 5.0, InterpolationMethod::Linear)?;
//! assert_eq!(position.x, 0.5);
//!
//! let velocity = get_velocity(&coords, &times, 2.0, InterpolationMethod::Linear)?;
//! assert_eq!(velocity.x, 0.1);
//! # Ok::<(), kinematic_interp::kinematics_errors::KinematicsError>(())
//! ```

use nalgebra::{Quaternion, Vector3};

use crate::{
    constants::{POLYNOMIAL_AXES, POSITION_CHANNELS, ROTATION_CHANNELS},
    interpolation::{
        check_samples, check_times, evaluate_orders, DerivativeOrder, InterpolationMethod,
    },
    kinematics_errors::KinematicsError,
    polynomial::evaluate_polynomial,
    quaternion::{normalize_quaternion, normalize_samples},
};

/// Check the number of channels and borrow them as a fixed-size array.
pub(crate) fn fixed_channels<'a, C, const N: usize>(
    input: &'static str,
    data: &'a [C],
) -> Result<[&'a [f64]; N], KinematicsError>
where
    C: AsRef<[f64]>,
{
    if data.len() != N {
        return Err(KinematicsError::ShapeMismatch {
            input,
            expected: N,
            found: data.len(),
        });
    }
    Ok(std::array::from_fn(move |i| data[i].as_ref()))
}

/// Check the channel count, every channel against the shared timestamps, then the
/// timestamps themselves once.
pub(crate) fn validated_channels<'a, C, const N: usize>(
    input: &'static str,
    data: &'a [C],
    times: &[f64],
    time: f64,
) -> Result<[&'a [f64]; N], KinematicsError>
where
    C: AsRef<[f64]>,
{
    let channels = fixed_channels::<C, N>(input, data)?;
    for channel in channels {
        check_samples(channel, times)?;
    }
    check_times(times, time)?;
    Ok(channels)
}

/// Check the axis count and that no axis has an empty coefficient sequence.
pub(crate) fn validated_axes<C>(
    coeffs: &[C],
) -> Result<[&[f64]; POLYNOMIAL_AXES], KinematicsError>
where
    C: AsRef<[f64]>,
{
    let axes = fixed_channels::<C, POLYNOMIAL_AXES>("coeffs", coeffs)?;
    if axes.iter().any(|axis| axis.is_empty()) {
        return Err(KinematicsError::EmptyCoefficients);
    }
    Ok(axes)
}

fn interpolate_axes<C>(
    coords: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
    order: DerivativeOrder,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    let [x, y, z] =
        validated_channels::<C, POSITION_CHANNELS>("positions", coords, times, time)?;

    let [x, y, z] = [x, y, z].map(|c| evaluate_orders(c, times, time, method, [order])[0]);
    Ok(Vector3::new(x, y, z))
}

fn interpolate_rotation<C>(
    rotations: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
    order: DerivativeOrder,
) -> Result<Quaternion<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    let channels =
        validated_channels::<C, ROTATION_CHANNELS>("rotations", rotations, times, time)?;

    // normalization acts on the sampled rotations, never on a derivative
    let [w, x, y, z] = normalize_samples(channels);

    let [w, x, y, z] =
        [&w, &x, &y, &z].map(|c| evaluate_orders(c, times, time, method, [order])[0]);
    let interpolated = Quaternion::new(w, x, y, z);

    Ok(normalize_quaternion(interpolated))
}

fn evaluate_axes<C>(
    coeffs: &[C],
    time: f64,
    order: usize,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    let [x, y, z] = validated_axes(coeffs)?;

    Ok(Vector3::new(
        evaluate_polynomial(x, time, order)?,
        evaluate_polynomial(y, time, order)?,
        evaluate_polynomial(z, time, order)?,
    ))
}

// -------------------------------------------------------------------------------------------------
// Tabulated data
// -------------------------------------------------------------------------------------------------

/// Interpolate the position at `time` from three sampled coordinate channels.
///
/// Arguments
/// -----------------
/// * `coords`: exactly three channels `[x, y, z]`, one sample per timestamp.
/// * `times`: strictly increasing timestamps shared by all channels.
/// * `time`: query time, within `[times[0], times[n - 1]]`.
/// * `method`: piecewise scheme used for every channel.
///
/// Return
/// ----------
/// * The interpolated position, or a [`KinematicsError`]
///   ([`ShapeMismatch`](KinematicsError::ShapeMismatch) when `coords` does not hold three
///   channels).
pub fn get_position<C>(
    coords: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    interpolate_axes(coords, times, time, method, DerivativeOrder::Value)
}

/// Interpolate the velocity at `time`, the time derivative of the position interpolant.
///
/// Takes the same inputs as [`get_position`].
pub fn get_velocity<C>(
    coords: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    interpolate_axes(coords, times, time, method, DerivativeOrder::First)
}

/// Interpolate the acceleration at `time`, the second time derivative of the position
/// interpolant.
///
/// A linear interpolant has zero acceleration everywhere.
pub fn get_acceleration<C>(
    coords: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    interpolate_axes(coords, times, time, method, DerivativeOrder::Second)
}

/// Interpolate the rotation at `time` from four sampled quaternion channels.
///
/// Every sample `(w, x, y, z)` is renormalized into a fresh copy, each channel is
/// interpolated independently, and the interpolated 4-tuple is renormalized.
///
/// Arguments
/// -----------------
/// * `rotations`: exactly four channels `[w, x, y, z]`.
/// * `times`: strictly increasing timestamps shared by all channels.
/// * `time`: query time, within `[times[0], times[n - 1]]`.
/// * `method`: piecewise scheme used for every channel.
///
/// Return
/// ----------
/// * A unit quaternion, or a [`KinematicsError`].
pub fn get_rotation<C>(
    rotations: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
) -> Result<Quaternion<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    interpolate_rotation(rotations, times, time, method, DerivativeOrder::Value)
}

/// Interpolate the quaternion rate at `time`.
///
/// The sampled rotations are renormalized exactly as in [`get_rotation`], then each
/// channel's first derivative is taken and the resulting 4-tuple is renormalized.
/// A constant rotation yields the zero quaternion.
pub fn get_angular_velocity<C>(
    rotations: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
) -> Result<Quaternion<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    interpolate_rotation(rotations, times, time, method, DerivativeOrder::First)
}

// -------------------------------------------------------------------------------------------------
// Polynomial models
// -------------------------------------------------------------------------------------------------

/// Evaluate the position polynomial of each axis at `time`.
///
/// Arguments
/// -----------------
/// * `coeffs`: exactly three non-empty coefficient sequences `[cx, cy, cz]`,
///   ascending power order.
/// * `time`: evaluation time, in the time unit the coefficients were fitted with.
pub fn get_position_from_coeffs<C>(
    coeffs: &[C],
    time: f64,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    evaluate_axes(coeffs, time, 0)
}

/// Evaluate the analytic derivative of the position polynomials at `time`.
pub fn get_velocity_from_coeffs<C>(
    coeffs: &[C],
    time: f64,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    evaluate_axes(coeffs, time, 1)
}

/// Evaluate the second derivative of the position polynomials at `time`.
pub fn get_acceleration_from_coeffs<C>(
    coeffs: &[C],
    time: f64,
) -> Result<Vector3<f64>, KinematicsError>
where
    C: AsRef<[f64]>,
{
    evaluate_axes(coeffs, time, 2)
}

// -------------------------------------------------------------------------------------------------
// Named frames
// -------------------------------------------------------------------------------------------------

/// Rotation between two named reference frames.
///
/// Resolving named frames needs a frame graph, which this crate does not provide;
/// the call always fails with [`KinematicsError::FrameLookupUnsupported`].
pub fn get_rotation_between_frames(
    from: &str,
    to: &str,
    _coefficients: &[f64],
    _time: f64,
) -> Result<Vector3<f64>, KinematicsError> {
    Err(KinematicsError::FrameLookupUnsupported {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Angular velocity between two named reference frames.
///
/// Same limitation as [`get_rotation_between_frames`].
pub fn get_angular_velocity_between_frames(
    from: &str,
    to: &str,
    _coefficients: &[f64],
    _time: f64,
) -> Result<Vector3<f64>, KinematicsError> {
    Err(KinematicsError::FrameLookupUnsupported {
        from: from.to_string(),
        to: to.to_string(),
    })
}
