#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Programmer error at configuration-build time. A parser must not be
    /// constructed from a configuration that failed this way.
    #[error("invalid parser configuration: {0}")]
    InvalidConfiguration(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
