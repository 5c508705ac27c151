use thiserror::Error;

/// Every way a kinematic query can be rejected.
///
/// All variants describe invalid input detected before any numerical work is
/// done; none of them is recoverable within the call that produced it.
#[derive(Error, Debug)]
pub enum KinematicsError {
    #[error("Invalid input {input}, expected {expected} vectors but got {found}")]
    ShapeMismatch {
        input: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("At least two points must be input to interpolate over, got {0}")]
    InsufficientData(usize),

    #[error("Invalid sample data, got {points} points for {times} times")]
    LengthMismatch { points: usize, times: usize },

    #[error("Invalid query time {time}, outside of input times [{start}, {end}]")]
    OutOfDomain { time: f64, start: f64, end: f64 },

    #[error("Invalid input coeffs, must be non-empty")]
    EmptyCoefficients,

    #[error("Invalid derivative order {0}, must be 0, 1 or 2")]
    InvalidDerivativeOrder(u8),

    #[error("Input times must be strictly increasing (violated at index {0})")]
    NonIncreasingTimes(usize),

    #[error("Invalid interpolation method: {0}")]
    InvalidInterpolationMethod(String),

    #[error("Frame lookup from {from} to {to} is not yet supported")]
    FrameLookupUnsupported { from: String, to: String },

    #[error("Unable to read metadata document: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to decode metadata document: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Metadata document has no '{0}' entry")]
    MissingMetadataKey(String),
}

impl PartialEq for KinematicsError {
    fn eq(&self, other: &Self) -> bool {
        use KinematicsError::*;
        match (self, other) {
            (
                ShapeMismatch {
                    input: a,
                    expected: ea,
                    found: fa,
                },
                ShapeMismatch {
                    input: b,
                    expected: eb,
                    found: fb,
                },
            ) => a == b && ea == eb && fa == fb,
            (InsufficientData(a), InsufficientData(b)) => a == b,
            (
                LengthMismatch {
                    points: pa,
                    times: ta,
                },
                LengthMismatch {
                    points: pb,
                    times: tb,
                },
            ) => pa == pb && ta == tb,
            (
                OutOfDomain {
                    time: ta,
                    start: sa,
                    end: ea,
                },
                OutOfDomain {
                    time: tb,
                    start: sb,
                    end: eb,
                },
            ) => ta == tb && sa == sb && ea == eb,
            (InvalidDerivativeOrder(a), InvalidDerivativeOrder(b)) => a == b,
            (NonIncreasingTimes(a), NonIncreasingTimes(b)) => a == b,
            (InvalidInterpolationMethod(a), InvalidInterpolationMethod(b)) => a == b,
            (
                FrameLookupUnsupported { from: fa, to: ta },
                FrameLookupUnsupported { from: fb, to: tb },
            ) => fa == fb && ta == tb,
            (MissingMetadataKey(a), MissingMetadataKey(b)) => a == b,

            // wrapped errors are not comparable, same variant is enough
            (IoError(_), IoError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            (EmptyCoefficients, EmptyCoefficients) => true,

            _ => false,
        }
    }
}
