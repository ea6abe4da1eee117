use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate entry")]
    Duplicate,
    #[error("Unknown info hash")]
    InvalidInfoHash,
    #[error("Unknown user")]
    InvalidUser,
    #[error("Unknown peer")]
    InvalidPeerId,
    #[error("Unknown client")]
    InvalidClient,
    #[error("Invalid stored data: {0}")]
    Decode(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
