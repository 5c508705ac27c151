//! # Metadata boundary
//!
//! Mission metadata (instrument positions, pointing history, polynomial fits) is
//! produced by external loaders. This module defines the narrow interface through
//! which such a loader hands its result over, a self-describing JSON document, and
//! typed views of the blocks the interpolation core consumes.
//!
//! The interpolation modules never depend on this one: a [`MetadataService`] is
//! owned and initialized by the caller, which decodes the blocks it needs and then
//! issues ordinary kinematic queries.
//!
//! ## Document layout
//!
//! ```text
//! {
//!   "instrument_position": {
//!     "times":     [t_0, …, t_n],
//!     "positions": [[x, y, z], …],
//!     "method":    "cubic-spline"          // optional, defaults to "linear"
//!   },
//!   "instrument_pointing": {
//!     "times":       [t_0, …, t_n],
//!     "quaternions": [[w, x, y, z], …]
//!   },
//!   "sun_position": {
//!     "coefficients": [[cx_0, …], [cy_0, …], [cz_0, …]]
//!   }
//! }
//! ```
//!
//! Samples are stored **row-major** (one row per timestamp) and transposed into the
//! channel-separated layout of [`crate::kinematics`].

use std::fs;

use camino::Utf8Path;
use nalgebra::{Quaternion, Vector3};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    constants::{POSITION_CHANNELS, ROTATION_CHANNELS},
    interpolation::InterpolationMethod,
    kinematics::{
        get_angular_velocity, get_position, get_position_from_coeffs, get_rotation, get_velocity,
        get_velocity_from_coeffs,
    },
    kinematics_errors::KinematicsError,
};

/// Source of metadata documents.
///
/// Implementations own whatever runtime they need (parsers, interpreters, caches)
/// and its lifecycle; callers only see the decoded document.
pub trait MetadataService {
    fn load(&self, path: &Utf8Path) -> Result<Value, KinematicsError>;
}

/// [`MetadataService`] reading documents already serialized as JSON on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileService;

impl MetadataService for JsonFileService {
    fn load(&self, path: &Utf8Path) -> Result<Value, KinematicsError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Decode the block stored under `key` in a metadata document.
///
/// Return
/// ----------
/// * The typed block, [`KinematicsError::MissingMetadataKey`] if `key` is absent,
///   or [`KinematicsError::JsonError`] if the block does not have the expected shape.
pub fn block<T: DeserializeOwned>(document: &Value, key: &str) -> Result<T, KinematicsError> {
    let value = document
        .get(key)
        .ok_or_else(|| KinematicsError::MissingMetadataKey(key.to_string()))?;
    Ok(T::deserialize(value)?)
}

fn transpose<const N: usize>(rows: &[[f64; N]]) -> [Vec<f64>; N] {
    std::array::from_fn(|axis| rows.iter().map(|row| row[axis]).collect())
}

/// Time-tagged position samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledPositions {
    pub times: Vec<f64>,
    pub positions: Vec<[f64; POSITION_CHANNELS]>,
    #[serde(default)]
    pub method: InterpolationMethod,
}

impl SampledPositions {
    /// The `[x, y, z]` channels of the samples.
    pub fn channels(&self) -> [Vec<f64>; POSITION_CHANNELS] {
        transpose(&self.positions)
    }

    pub fn position_at(&self, time: f64) -> Result<Vector3<f64>, KinematicsError> {
        get_position(&self.channels(), &self.times, time, self.method)
    }

    pub fn velocity_at(&self, time: f64) -> Result<Vector3<f64>, KinematicsError> {
        get_velocity(&self.channels(), &self.times, time, self.method)
    }
}

/// Time-tagged attitude quaternions, stored `[w, x, y, z]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledRotations {
    pub times: Vec<f64>,
    pub quaternions: Vec<[f64; ROTATION_CHANNELS]>,
    #[serde(default)]
    pub method: InterpolationMethod,
}

impl SampledRotations {
    /// The `[w, x, y, z]` channels of the samples.
    pub fn channels(&self) -> [Vec<f64>; ROTATION_CHANNELS] {
        transpose(&self.quaternions)
    }

    pub fn rotation_at(&self, time: f64) -> Result<Quaternion<f64>, KinematicsError> {
        get_rotation(&self.channels(), &self.times, time, self.method)
    }

    pub fn angular_velocity_at(&self, time: f64) -> Result<Quaternion<f64>, KinematicsError> {
        get_angular_velocity(&self.channels(), &self.times, time, self.method)
    }
}

/// Position polynomial fit, one ascending-power coefficient sequence per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPolynomial {
    pub coefficients: Vec<Vec<f64>>,
}

impl PositionPolynomial {
    pub fn position_at(&self, time: f64) -> Result<Vector3<f64>, KinematicsError> {
        get_position_from_coeffs(&self.coefficients, time)
    }

    pub fn velocity_at(&self, time: f64) -> Result<Vector3<f64>, KinematicsError> {
        get_velocity_from_coeffs(&self.coefficients, time)
    }
}
