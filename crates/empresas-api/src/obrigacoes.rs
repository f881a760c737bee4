//! Handlers for `/obrigacoes` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/obrigacoes/` | Body: [`NewObrigacao`]; 404 if the company is missing |
//! | `GET`    | `/obrigacoes/` | Every obligation, by id |
//! | `GET`    | `/obrigacoes/{id}` | 404 if not found |
//! | `PUT`    | `/obrigacoes/{id}` | Full replacement; may move to another company |
//! | `DELETE` | `/obrigacoes/{id}` | |

use std::sync::Arc;

use axum::{Json, extract::State};
use empresas_core::{
  obrigacao::{NewObrigacao, Obrigacao},
  store::RegistryStore,
};

use crate::{
  Message,
  error::{ApiError, OBRIGACAO_NOT_FOUND},
  extract::{Path, Payload},
};

/// `POST /obrigacoes/`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(body): Payload<NewObrigacao>,
) -> Result<Json<Obrigacao>, ApiError>
where
  S: RegistryStore,
{
  let obrigacao = store
    .create_obrigacao(body)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(
    id = obrigacao.id,
    empresa_id = obrigacao.empresa_id,
    "obrigacao created"
  );
  Ok(Json(obrigacao))
}

/// `GET /obrigacoes/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Obrigacao>>, ApiError>
where
  S: RegistryStore,
{
  let obrigacoes = store.list_obrigacoes().await.map_err(ApiError::from_store)?;
  Ok(Json(obrigacoes))
}

/// `GET /obrigacoes/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Obrigacao>, ApiError>
where
  S: RegistryStore,
{
  let obrigacao = store
    .get_obrigacao(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(OBRIGACAO_NOT_FOUND.into()))?;
  Ok(Json(obrigacao))
}

/// `PUT /obrigacoes/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Payload(body): Payload<NewObrigacao>,
) -> Result<Json<Obrigacao>, ApiError>
where
  S: RegistryStore,
{
  let obrigacao = store
    .update_obrigacao(id, body)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id, empresa_id = obrigacao.empresa_id, "obrigacao updated");
  Ok(Json(obrigacao))
}

/// `DELETE /obrigacoes/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Message>, ApiError>
where
  S: RegistryStore,
{
  store
    .delete_obrigacao(id)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id, "obrigacao deleted");
  Ok(Json(Message::new("Obrigação deletada com sucesso")))
}
