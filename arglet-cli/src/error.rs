#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("core error: {0}")]
    Core(#[from] arglet_core::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
