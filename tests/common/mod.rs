use approx::assert_relative_eq;
use kinematic_interp::constants::UNIT_NORM_TOLERANCE;
use nalgebra::Quaternion;
use rand::rngs::StdRng;
use rand::Rng;

pub fn assert_unit_norm(q: &Quaternion<f64>) {
    assert_relative_eq!(q.norm(), 1.0, epsilon = UNIT_NORM_TOLERANCE);
}

/// Strictly increasing timestamps with random spacing in `[0.1, 1.0)`.
pub fn random_times(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let mut t = rng.random_range(-100.0..100.0);
    (0..n)
        .map(|_| {
            t += rng.random_range(0.1..1.0);
            t
        })
        .collect()
}

/// `[w, x, y, z]` channels of random, non-normalized, non-degenerate quaternions.
///
/// Each sample stays close to the previous one so that consecutive rotations do not
/// flip sign, as real attitude histories do.
pub fn random_rotation_channels(rng: &mut StdRng, n: usize) -> [Vec<f64>; 4] {
    let mut channels: [Vec<f64>; 4] = Default::default();
    let mut q = [1.0, 0.0, 0.0, 0.0];
    for _ in 0..n {
        for c in q.iter_mut() {
            *c += rng.random_range(-0.2..0.2);
        }
        let scale = rng.random_range(0.5..2.0);
        for (channel, c) in channels.iter_mut().zip(q.iter()) {
            channel.push(c * scale);
        }
    }
    channels
}
