use thiserror::Error;

/// Errors raised while constructing an index configuration.
///
/// All variants are detected synchronously during construction and are fatal
/// to that attempt: the configuration object is never created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("unknown similarity metric: {0}")]
    UnknownMetric(String),

    #[error("index type {index} does not support metric {metric}")]
    IncompatibleMetric {
        index: &'static str,
        metric: &'static str,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    ParameterRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, IndexError>;
