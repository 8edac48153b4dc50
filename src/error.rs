use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("no series at index {index} (series count is {len})")]
    SeriesIndexOutOfBounds { index: usize, len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid plot rect: width={width}, height={height}")]
    InvalidPlotRect { width: f64, height: f64 },
}
