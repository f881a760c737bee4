//! Error type for `empresas-store-sqlite`.

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] empresas_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl Error {
  /// Classify a failure raised while writing.
  ///
  /// Constraint violations surface as [`empresas_core::Error::Conflict`];
  /// the transaction that raised them has already been rolled back.
  pub(crate) fn from_write(e: tokio_rusqlite::Error) -> Self {
    match e {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
        failure,
        message,
      )) if failure.code == ErrorCode::ConstraintViolation => {
        let message = message.unwrap_or_else(|| failure.to_string());
        Error::Core(empresas_core::Error::Conflict(message))
      }
      other => Error::Database(other),
    }
  }
}

impl From<Error> for empresas_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(inner) => inner,
      other => empresas_core::Error::Backend(Box::new(other)),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
