use crate::upload::ClientError;
use thiserror::Error;

/// Failures that stop the application before or while the window runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to set up backend client: {0}")]
    Client(#[from] ClientError),

    #[error("window failed: {0}")]
    Ui(String),
}
