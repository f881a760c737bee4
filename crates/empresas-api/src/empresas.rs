//! Handlers for `/empresas` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/empresas/` | Body: [`NewEmpresa`]; 400 if the CNPJ is taken |
//! | `GET`    | `/empresas/` | Every company, by id |
//! | `GET`    | `/empresas_com_obrigacoes/` | Every company with its obligations |
//! | `GET`    | `/empresas/{id}` | 404 if not found |
//! | `PUT`    | `/empresas/{id}` | Full replacement; body: [`NewEmpresa`] |
//! | `DELETE` | `/empresas/{id}` | Obligations of the company are kept |

use std::sync::Arc;

use axum::{Json, extract::State};
use empresas_core::{
  empresa::{Empresa, EmpresaComObrigacoes, NewEmpresa},
  store::RegistryStore,
};

use crate::{
  Message,
  error::{ApiError, EMPRESA_NOT_FOUND},
  extract::{Path, Payload},
};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /empresas/`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(body): Payload<NewEmpresa>,
) -> Result<Json<Empresa>, ApiError>
where
  S: RegistryStore,
{
  let cnpj = body.cnpj.clone();
  let empresa = store.create_empresa(body).await.map_err(|e| {
    let e = ApiError::from_store(e);
    if matches!(e, ApiError::BadRequest(_)) {
      tracing::warn!(%cnpj, "rejected empresa: {e}");
    }
    e
  })?;
  tracing::info!(id = empresa.id, "empresa created");
  Ok(Json(empresa))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /empresas/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Empresa>>, ApiError>
where
  S: RegistryStore,
{
  let empresas = store.list_empresas().await.map_err(ApiError::from_store)?;
  Ok(Json(empresas))
}

/// `GET /empresas_com_obrigacoes/`
pub async fn list_com_obrigacoes<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<EmpresaComObrigacoes>>, ApiError>
where
  S: RegistryStore,
{
  let empresas = store
    .list_empresas_com_obrigacoes()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(empresas))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /empresas/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Empresa>, ApiError>
where
  S: RegistryStore,
{
  let empresa = store
    .get_empresa(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(EMPRESA_NOT_FOUND.into()))?;
  Ok(Json(empresa))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /empresas/{id}` — every field is overwritten.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Payload(body): Payload<NewEmpresa>,
) -> Result<Json<Empresa>, ApiError>
where
  S: RegistryStore,
{
  let empresa = store
    .update_empresa(id, body)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id, "empresa updated");
  Ok(Json(empresa))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /empresas/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Message>, ApiError>
where
  S: RegistryStore,
{
  store.delete_empresa(id).await.map_err(ApiError::from_store)?;
  tracing::info!(id, "empresa deleted");
  Ok(Json(Message::new("Empresa deletada com sucesso")))
}
