//! Error types for source and package generation.

use thiserror::Error;

use deck_model::Stat;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Name cannot become a C# class name.
    #[error("'{name}' does not form a valid class name")]
    InvalidClassName { name: String },

    /// NaN or infinite values have no C# literal.
    #[error("{stat} has non-finite value {value}")]
    NonFiniteValue { stat: Stat, value: f64 },

    /// Truncated value does not fit a C# `int`.
    #[error("{stat} value {value} does not fit a 32-bit integer")]
    IntegerOutOfRange { stat: Stat, value: f64 },

    #[error("no export folder selected")]
    MissingExportFolder,

    #[error("failed to write project XML: {message}")]
    Xml { message: String },

    #[error("generated XML is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
