use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraError {
    /// The row reports an identity transform, so no seat pose can be derived.
    #[error("row {row} has no transform")]
    MissingTransform { row: usize },
    #[error("row {0} does not exist")]
    UnknownRow(usize),
    #[error("degenerate room geometry: {0}")]
    DegenerateGeometry(&'static str),
    #[error("malformed transform matrix: {0:?}")]
    MalformedMatrix(String),
}
