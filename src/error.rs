//! Crate-wide error type.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),

    #[error("secret length {0} is outside 4..=50")]
    LengthOutOfRange(usize),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
