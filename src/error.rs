//! Error types for the pagegrid front-ends

use thiserror::Error;

/// Errors that can occur while starting a pagegrid front-end
#[derive(Error, Debug)]
pub enum PagegridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, PagegridError>;
