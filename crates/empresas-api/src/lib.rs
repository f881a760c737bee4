//! JSON REST API for the Empresas registry.
//!
//! Exposes an axum [`Router`] backed by any
//! [`empresas_core::store::RegistryStore`]. Transport concerns (binding,
//! tracing layers, shutdown) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = empresas_api::api_router(Arc::new(store));
//! ```

pub mod empresas;
pub mod error;
pub mod extract;
pub mod obrigacoes;

use std::sync::Arc;

use axum::{Router, routing::get};
use empresas_core::store::RegistryStore;
use serde::Serialize;

pub use error::ApiError;

/// Confirmation body returned by the delete endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
  pub message: &'static str,
}

impl Message {
  pub fn new(message: &'static str) -> Self { Self { message } }
}

/// Build a fully-materialised API router for `store`.
///
/// Collection paths are served with and without the trailing slash.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RegistryStore + 'static,
{
  Router::new()
    // Empresas
    .route(
      "/empresas/",
      get(empresas::list::<S>).post(empresas::create::<S>),
    )
    .route(
      "/empresas",
      get(empresas::list::<S>).post(empresas::create::<S>),
    )
    .route(
      "/empresas/{id}",
      get(empresas::get_one::<S>)
        .put(empresas::update::<S>)
        .delete(empresas::delete_one::<S>),
    )
    .route(
      "/empresas_com_obrigacoes/",
      get(empresas::list_com_obrigacoes::<S>),
    )
    .route(
      "/empresas_com_obrigacoes",
      get(empresas::list_com_obrigacoes::<S>),
    )
    // Obrigações
    .route(
      "/obrigacoes/",
      get(obrigacoes::list::<S>).post(obrigacoes::create::<S>),
    )
    .route(
      "/obrigacoes",
      get(obrigacoes::list::<S>).post(obrigacoes::create::<S>),
    )
    .route(
      "/obrigacoes/{id}",
      get(obrigacoes::get_one::<S>)
        .put(obrigacoes::update::<S>)
        .delete(obrigacoes::delete_one::<S>),
    )
    .with_state(store)
}
