use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("invalid card configuration: {0}")]
    Configuration(String),

    #[error(
        "{actual} entries were provided, but there must be at least as many entries \
         as there are non-free-space cells on the card ({required})"
    )]
    InsufficientEntries { required: usize, actual: usize },

    #[error("the entry pool is empty")]
    EmptyPool,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
