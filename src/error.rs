#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Progress bar prefix must not be empty.")]
    EmptyPrefix,

    #[error("Shared writer is already borrowed.")]
    WriterBusy,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
