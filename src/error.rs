use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport: width={width}, height={height}, padding={padding}")]
    InvalidViewport {
        width: f64,
        height: f64,
        padding: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown series key: {0}")]
    UnknownSeries(String),
}
