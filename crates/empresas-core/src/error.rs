//! Error types for `empresas-core`.

use thiserror::Error;

/// Outcome of a failed [`RegistryStore`](crate::store::RegistryStore)
/// operation, as seen by callers that do not know the backend.
#[derive(Debug, Error)]
pub enum Error {
  #[error("empresa not found: {0}")]
  EmpresaNotFound(i64),

  #[error("obrigacao not found: {0}")]
  ObrigacaoNotFound(i64),

  #[error("cnpj already registered: {0}")]
  DuplicateCnpj(String),

  /// A uniqueness constraint other than the CNPJ pre-check was violated.
  /// The attempted write has been rolled back.
  #[error("constraint violation: {0}")]
  Conflict(String),

  #[error("backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
