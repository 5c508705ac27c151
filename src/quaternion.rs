//! # Quaternion renormalization
//!
//! Rotation samples are stored as four channels `(w, x, y, z)`. Before interpolation
//! each sample is renormalized to unit length, and the interpolated 4-tuple is
//! renormalized again, since componentwise interpolation of unit quaternions does
//! not preserve the norm.
//!
//! This normalize → interpolate → normalize scheme is an approximation of a geodesic
//! interpolation between rotations; it is kept as is because downstream consumers
//! rely on its exact numerical output.
//!
//! A 4-tuple whose norm is zero cannot be renormalized: it is returned unchanged
//! (a zero quaternion derivative stays zero) and, for input samples, a warning is
//! emitted through `tracing`.

use nalgebra::Quaternion;

use crate::constants::{DEGENERATE_NORM, ROTATION_CHANNELS};

/// Scale `q` to unit Euclidean norm.
///
/// Return
/// ----------
/// * `q / |q|`, or `q` itself when `|q|` is zero.
pub fn normalize_quaternion(q: Quaternion<f64>) -> Quaternion<f64> {
    match q.coords.try_normalize(DEGENERATE_NORM) {
        Some(unit) => Quaternion::from_vector(unit),
        None => q,
    }
}

/// Renormalize every rotation sample, returning fresh channels.
///
/// Arguments
/// -----------------
/// * `channels`: `[w, x, y, z]` sample channels, already checked to have equal length.
///
/// Return
/// ----------
/// * Four new channels where each sample index holds a unit quaternion. The caller's
///   buffers are left untouched.
pub(crate) fn normalize_samples(
    channels: [&[f64]; ROTATION_CHANNELS],
) -> [Vec<f64>; ROTATION_CHANNELS] {
    let [w, x, y, z] = channels;
    let n = w.len();
    let mut normalized: [Vec<f64>; ROTATION_CHANNELS] =
        std::array::from_fn(|_| Vec::with_capacity(n));

    for i in 0..n {
        let sample = Quaternion::new(w[i], x[i], y[i], z[i]);
        if sample.norm_squared() <= DEGENERATE_NORM {
            tracing::warn!(index = i, "rotation sample has zero norm and cannot be renormalized");
        }
        let unit = normalize_quaternion(sample);

        normalized[0].push(unit.w);
        normalized[1].push(unit.i);
        normalized[2].push(unit.j);
        normalized[3].push(unit.k);
    }

    normalized
}
