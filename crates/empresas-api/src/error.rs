//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const EMPRESA_NOT_FOUND: &str = "Empresa não encontrada";
pub const OBRIGACAO_NOT_FOUND: &str = "Obrigação não encontrada";
pub const CNPJ_DUPLICADO: &str = "CNPJ já cadastrado";
pub const CONFLITO_EMPRESA: &str =
  "Erro ao cadastrar empresa. Verifique os dados e tente novamente.";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request body or path did not match the expected shape.
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Convert any backend error into the matching API outcome.
  pub fn from_store<E: Into<empresas_core::Error>>(e: E) -> Self {
    Self::from(e.into())
  }
}

impl From<empresas_core::Error> for ApiError {
  fn from(e: empresas_core::Error) -> Self {
    use empresas_core::Error as Core;
    match e {
      Core::EmpresaNotFound(_) => ApiError::NotFound(EMPRESA_NOT_FOUND.into()),
      Core::ObrigacaoNotFound(_) => {
        ApiError::NotFound(OBRIGACAO_NOT_FOUND.into())
      }
      Core::DuplicateCnpj(_) => ApiError::BadRequest(CNPJ_DUPLICADO.into()),
      Core::Conflict(_) => ApiError::BadRequest(CONFLITO_EMPRESA.into()),
      Core::Backend(inner) => ApiError::Store(inner),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Validation(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::Validation(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "detail": message }))).into_response()
  }
}
