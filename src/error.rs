//! Error types for the guessing game

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("BOT_TOKEN not set in environment (.env)")]
    TokenMissing,

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Schedule error: {0}")]
    Schedule(String),

    #[error("Player id not found in roster: {0}")]
    UnknownPlayerId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
