//! HTTP server wiring for the Empresas registry.
//!
//! Opens the configured SQLite store and wraps [`empresas_api::api_router`]
//! with request tracing.

pub mod config;

pub use config::{ServerConfig, StoreLocation};

use std::sync::Arc;

use axum::Router;
use empresas_core::store::RegistryStore;
use empresas_store_sqlite::SqliteStore;
use tower_http::trace::TraceLayer;

/// Build the application router over `store`, with per-request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: RegistryStore + 'static,
{
  empresas_api::api_router(store).layer(TraceLayer::new_for_http())
}

/// Open the store at `location`, creating tables if they are missing.
pub async fn open_store(
  location: &StoreLocation,
) -> empresas_store_sqlite::Result<SqliteStore> {
  match location {
    StoreLocation::Memory => {
      tracing::warn!("using an in-memory store; data is lost on exit");
      SqliteStore::open_in_memory().await
    }
    StoreLocation::File(path) => SqliteStore::open(path).await,
  }
}

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;

  use super::*;

  #[tokio::test]
  async fn serves_api_over_in_memory_store() {
    let store = open_store(&StoreLocation::Memory).await.unwrap();
    let res = app(Arc::new(store))
      .oneshot(
        Request::builder()
          .uri("/empresas/")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn unknown_route_is_404() {
    let store = open_store(&StoreLocation::Memory).await.unwrap();
    let res = app(Arc::new(store))
      .oneshot(
        Request::builder()
          .uri("/nao-existe")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
  }
}
