// crates/remix-core/src/errors.rs
use thiserror::Error;

/// Error de carga/volcado de documentos del núcleo.
///
/// Las capas superiores (CLI, etc.) deberían mapear este error a
/// diagnósticos de usuario; un documento que no parsea es fatal.
#[derive(Debug, Error)]
pub enum DocumentError {
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

/// Un id que no es un entero positivo codificado en string.
#[derive(Debug, Clone, Error)]
#[error("id error: {value:?} is not a positive integer")]
pub struct ParseIdError {
  pub value: String,
}

impl ParseIdError {
  pub fn new(value: impl Into<String>) -> Self {
    ParseIdError { value: value.into() }
  }
}
