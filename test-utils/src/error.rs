use thiserror::Error;

/// Errors that can occur while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing a seeded file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
