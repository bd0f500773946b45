use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Ungültiges Argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} außerhalb des Bereichs (Anzahl Reime: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
