// menuboard/src/error.rs

use thiserror::Error;

/// Errors raised by the step engine itself, independent of what the steps do.
#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Step not found in flow '{flow}': {step_name}")]
  StepNotFound { flow: String, step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Flow '{flow}' was halted by a step handler before producing a result")]
  Halted { flow: String },

  #[error("Internal flow error: {0}")]
  Internal(String),
}

/// Crate-level error for fetching and mapping the menu.
///
/// Cart operations and image normalization never produce one of these; they
/// are total over their inputs.
#[derive(Debug, Error)]
pub enum MenuError {
  #[error("Request to the menu endpoint failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Menu endpoint responded with status {status}")]
  Status { status: u16 },

  #[error("Invalid response structure from API: {0}")]
  MalformedEnvelope(String),

  #[error("Failed to decode menu payload: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Checkout is not available yet: functionality coming soon!")]
  CheckoutUnavailable,

  #[error("Menu flow error: {source}")]
  Flow {
    #[from]
    source: FlowError,
  },
}

pub type FlowResult<T, E = FlowError> = std::result::Result<T, E>;

pub type MenuResult<T, E = MenuError> = std::result::Result<T, E>;
