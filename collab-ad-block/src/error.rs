#[derive(Debug, thiserror::Error)]
pub enum AdBlockError {
  #[error(transparent)]
  Internal(#[from] anyhow::Error),

  #[error(transparent)]
  SerdeJson(#[from] serde_json::Error),

  #[error("The block is missing the `{0}` region")]
  InvalidBlockStructure(String),

  #[error("No tool is registered under `{0}`")]
  ToolNotFound(String),

  #[error("The tool registered under `{0}` is of another type")]
  ToolMismatch(String),
}
