use thiserror::Error;

use crate::notify::{Notice, Severity};

/// Application-level error type.
/// Every variant maps to a user-facing `Notice` so screens can surface
/// rejections as toast-style messages instead of bubbling panics.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid file type: please upload {allowed} files only")]
    InvalidFileType { allowed: String },

    #[error("File too large: file size must be less than {max_mb}MB")]
    FileTooLarge { max_mb: u64 },

    #[error("Could not access microphone. Please check permissions.")]
    MediaAccessDenied,

    #[error("Step not complete: {0}")]
    GateNotSatisfied(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Converts the error into the notification shown to the user.
    /// Internal errors are logged and replaced with a generic message.
    pub fn to_notice(&self) -> Notice {
        let (title, description) = match self {
            AppError::InvalidFileType { allowed } => (
                "Invalid file type".to_string(),
                format!("Please upload {allowed} files only"),
            ),
            AppError::FileTooLarge { max_mb } => (
                "File too large".to_string(),
                format!("File size must be less than {max_mb}MB"),
            ),
            AppError::MediaAccessDenied => (
                "Recording failed".to_string(),
                "Could not access microphone. Please check permissions.".to_string(),
            ),
            AppError::GateNotSatisfied(msg) => ("Step not complete".to_string(), msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "Something went wrong".to_string(),
                    "An internal error occurred".to_string(),
                )
            }
        };

        Notice {
            severity: Severity::Destructive,
            title,
            description,
        }
    }
}
