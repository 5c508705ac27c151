//! Combined position / velocity / acceleration query.
//!
//! [`KinematicState`] always carries a position and, on request, velocity and
//! acceleration. Computing them together builds each channel's interpolant once
//! (tabulated data) or runs one Horner pass per axis (polynomial models), instead of
//! one build per quantity as the single-quantity operations of
//! [`crate::kinematics`] do.
//!
//! Subtracting two states gives a relative state; optional fields survive only
//! when present on both operands.

use std::ops::{Add, Sub};

use nalgebra::Vector3;

use crate::{
    constants::POSITION_CHANNELS,
    interpolation::{evaluate_orders, DerivativeOrder, InterpolationMethod},
    kinematics::{validated_axes, validated_channels},
    kinematics_errors::KinematicsError,
    polynomial::evaluate_derivatives,
};

/// Kinematic state of a body at one query time.
#[derive(Debug, PartialEq, Clone)]
pub struct KinematicState {
    pub position: Vector3<f64>,
    pub velocity: Option<Vector3<f64>>,
    pub acceleration: Option<Vector3<f64>>,
}

impl KinematicState {
    fn from_axes(
        axes: [[f64; 3]; 3],
        compute_velocity: bool,
        compute_acceleration: bool,
    ) -> Self {
        let [x, y, z] = axes;
        KinematicState {
            position: Vector3::new(x[0], y[0], z[0]),
            velocity: compute_velocity.then(|| Vector3::new(x[1], y[1], z[1])),
            acceleration: compute_acceleration.then(|| Vector3::new(x[2], y[2], z[2])),
        }
    }
}

/// Interpolate position and, on request, velocity and acceleration from tabulated data.
///
/// Arguments
/// -----------------
/// * `coords`, `times`, `time`, `method`: as for
///   [`get_position`](crate::kinematics::get_position).
/// * `compute_velocity`: fill [`KinematicState::velocity`].
/// * `compute_acceleration`: fill [`KinematicState::acceleration`].
pub fn tabulated_state<C>(
    coords: &[C],
    times: &[f64],
    time: f64,
    method: InterpolationMethod,
    compute_velocity: bool,
    compute_acceleration: bool,
) -> Result<KinematicState, KinematicsError>
where
    C: AsRef<[f64]>,
{
    let channels =
        validated_channels::<C, POSITION_CHANNELS>("positions", coords, times, time)?;

    let orders = [
        DerivativeOrder::Value,
        DerivativeOrder::First,
        DerivativeOrder::Second,
    ];
    let mut axes = [[0.0; 3]; 3];
    for (axis, channel) in axes.iter_mut().zip(channels) {
        *axis = evaluate_orders(channel, times, time, method, orders);
    }

    Ok(KinematicState::from_axes(
        axes,
        compute_velocity,
        compute_acceleration,
    ))
}

/// Evaluate position and, on request, velocity and acceleration from a polynomial model.
///
/// Arguments
/// -----------------
/// * `coeffs`, `time`: as for
///   [`get_position_from_coeffs`](crate::kinematics::get_position_from_coeffs).
/// * `compute_velocity`: fill [`KinematicState::velocity`].
/// * `compute_acceleration`: fill [`KinematicState::acceleration`].
pub fn polynomial_state<C>(
    coeffs: &[C],
    time: f64,
    compute_velocity: bool,
    compute_acceleration: bool,
) -> Result<KinematicState, KinematicsError>
where
    C: AsRef<[f64]>,
{
    let mut axes = [[0.0; 3]; 3];
    for (axis, c) in axes.iter_mut().zip(validated_axes(coeffs)?) {
        // low-degree axes return fewer entries, the rest stay zero
        let derivatives = evaluate_derivatives(c, time, 2)?;
        axis[..derivatives.len()].copy_from_slice(&derivatives);
    }

    Ok(KinematicState::from_axes(
        axes,
        compute_velocity,
        compute_acceleration,
    ))
}

impl Add for KinematicState {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        KinematicState {
            position: self.position + other.position,
            velocity: match (self.velocity, other.velocity) {
                (Some(v1), Some(v2)) => Some(v1 + v2),
                _ => None,
            },
            acceleration: match (self.acceleration, other.acceleration) {
                (Some(a1), Some(a2)) => Some(a1 + a2),
                _ => None,
            },
        }
    }
}

impl Sub for KinematicState {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        KinematicState {
            position: self.position - other.position,
            velocity: match (self.velocity, other.velocity) {
                (Some(v1), Some(v2)) => Some(v1 - v2),
                _ => None,
            },
            acceleration: match (self.acceleration, other.acceleration) {
                (Some(a1), Some(a2)) => Some(a1 - a2),
                _ => None,
            },
        }
    }
}
