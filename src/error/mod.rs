use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Failures surfaced by the command-line front end. The engine itself recovers
/// from storage and parse failures on its own.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to serialize output")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}
