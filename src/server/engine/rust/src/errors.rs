/* src/server/engine/rust/src/errors.rs */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
  /// The connector endpoint is mandatory; nothing is rendered without it.
  #[error("connector route must be specified")]
  MissingConnectorRoute,

  #[error("container id must not be empty")]
  MissingContainerId,

  #[error("failed to serialize client options: {0}")]
  Serialize(#[from] serde_json::Error),
}

impl WidgetError {
  /// Machine-readable code, used by hosts in error responses.
  pub fn code(&self) -> &'static str {
    match self {
      Self::MissingConnectorRoute | Self::MissingContainerId => "CONFIGURATION_ERROR",
      Self::Serialize(_) => "INTERNAL_ERROR",
    }
  }

  /// Caller misconfiguration, as opposed to an internal failure.
  pub fn is_configuration(&self) -> bool {
    matches!(self, Self::MissingConnectorRoute | Self::MissingContainerId)
  }
}
