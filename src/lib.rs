//! # kinematic_interp
//!
//! Position, velocity, rotation and angular velocity of a moving, rotating body at an
//! arbitrary query time, computed from either
//!
//! - a **tabulated** history of time-tagged samples (piecewise linear or natural cubic
//!   spline interpolation, see [`interpolation`]), or
//! - a **polynomial** model valid over a time span (see [`polynomial`]).
//!
//! The public operations live in [`kinematics`]; [`state`] bundles position and its
//! derivatives in one query, and [`metadata`] is the boundary towards external
//! metadata loaders.
//!
//! Every operation is a pure function of its inputs: no state is shared between
//! calls, so queries may run concurrently from any number of threads.

pub mod constants;
pub mod interpolation;
pub mod kinematics;
pub mod kinematics_errors;
pub mod metadata;
pub mod polynomial;
pub mod quaternion;
pub mod state;
