use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to construct NotNan from f32: {1}")]
    ConstructNotNan(#[source] ordered_float::FloatIsNan, f32),

    #[error("got a non-finite coordinate: {0}")]
    NonFiniteCoordinate(f32),

    #[error("got a hand without a handedness label")]
    MissingHandedness,

    #[error("failed to parse handedness label: {0:?}")]
    UnknownHandedness(String),

    #[error("failed to read thresholds file: {1:?}")]
    ReadThresholds(#[source] std::io::Error, PathBuf),

    #[error("failed to parse thresholds file: {1:?}")]
    ParseThresholds(#[source] serde_json::Error, PathBuf),

    #[error("failed to parse hand landmarker result")]
    ParseDetection(#[source] serde_json::Error),
}
