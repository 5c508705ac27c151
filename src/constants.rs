//! # Constants for kinematic interpolation
//!
//! This module centralizes the **channel layouts** and **numerical tolerances** used
//! throughout the crate.
//!
//! ## Overview
//!
//! - Channel counts for linear motion (x, y, z) and rotation (w, x, y, z)
//! - Tolerances used by the quaternion normalizer and by tests

// -------------------------------------------------------------------------------------------------
// Channel layouts
// -------------------------------------------------------------------------------------------------

/// Number of channels describing linear motion (x, y, z)
pub const POSITION_CHANNELS: usize = 3;

/// Number of channels describing a rotation quaternion (w, x, y, z)
pub const ROTATION_CHANNELS: usize = 4;

/// Number of coefficient sequences in a polynomial model (one per spatial axis)
pub const POLYNOMIAL_AXES: usize = 3;

/// Minimum number of samples needed to build a piecewise interpolant
pub const MIN_SAMPLES: usize = 2;

// -------------------------------------------------------------------------------------------------
// Numerical tolerances
// -------------------------------------------------------------------------------------------------

/// Expected deviation from unit norm of a renormalized quaternion
pub const UNIT_NORM_TOLERANCE: f64 = 1e-10;

/// Quaternion samples with a norm at or below this value cannot be renormalized
pub const DEGENERATE_NORM: f64 = 0.0;
