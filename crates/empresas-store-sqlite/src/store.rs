//! [`SqliteStore`] — the SQLite implementation of [`RegistryStore`].
//!
//! Each operation is a single closure executed on the connection thread.
//! Writes open a transaction inside that closure and commit it explicitly;
//! any early return drops the transaction, which rolls it back.

use std::{collections::HashMap, path::Path};

use empresas_core::{
  empresa::{Empresa, EmpresaComObrigacoes, NewEmpresa},
  obrigacao::{NewObrigacao, Obrigacao, ObrigacaoResumo},
  store::RegistryStore,
};

use crate::{
  Error, Result,
  encode::{
    all_empresas, all_obrigacoes, cnpj_taken, empresa_exists, find_empresa,
    find_obrigacao,
  },
  schema::SCHEMA,
};

type Outcome<T> = std::result::Result<T, empresas_core::Error>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Empresas registry backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RegistryStore impl ──────────────────────────────────────────────────────

impl RegistryStore for SqliteStore {
  type Error = Error;

  // ── Empresas ──────────────────────────────────────────────────────────────

  async fn create_empresa(&self, input: NewEmpresa) -> Result<Empresa> {
    let row = input.clone();

    let outcome: Outcome<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if cnpj_taken(&tx, &row.cnpj, None)? {
          return Ok(Err(empresas_core::Error::DuplicateCnpj(row.cnpj)));
        }
        tx.execute(
          "INSERT INTO empresas (nome, cnpj, endereco, email, telefone)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![row.nome, row.cnpj, row.endereco, row.email, row.telefone],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Ok(id))
      })
      .await
      .map_err(Error::from_write)?;

    let id = outcome?;
    tracing::debug!(id, cnpj = %input.cnpj, "inserted empresa");
    Ok(Empresa::from_new(id, input))
  }

  async fn list_empresas(&self) -> Result<Vec<Empresa>> {
    let empresas = self.conn.call(|conn| Ok(all_empresas(conn)?)).await?;
    Ok(empresas)
  }

  async fn list_empresas_com_obrigacoes(&self) -> Result<Vec<EmpresaComObrigacoes>> {
    let (empresas, obrigacoes) = self
      .conn
      .call(|conn| Ok((all_empresas(conn)?, all_obrigacoes(conn)?)))
      .await?;

    let mut by_empresa: HashMap<i64, Vec<ObrigacaoResumo>> = HashMap::new();
    for obrigacao in obrigacoes {
      by_empresa
        .entry(obrigacao.empresa_id)
        .or_default()
        .push(obrigacao.into());
    }

    Ok(
      empresas
        .into_iter()
        .map(|empresa| {
          let obrigacoes = by_empresa.remove(&empresa.id).unwrap_or_default();
          EmpresaComObrigacoes { empresa, obrigacoes }
        })
        .collect(),
    )
  }

  async fn get_empresa(&self, id: i64) -> Result<Option<Empresa>> {
    let empresa = self.conn.call(move |conn| Ok(find_empresa(conn, id)?)).await?;
    Ok(empresa)
  }

  async fn update_empresa(&self, id: i64, input: NewEmpresa) -> Result<Empresa> {
    let row = input.clone();

    let outcome: Outcome<()> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !empresa_exists(&tx, id)? {
          return Ok(Err(empresas_core::Error::EmpresaNotFound(id)));
        }
        if cnpj_taken(&tx, &row.cnpj, Some(id))? {
          return Ok(Err(empresas_core::Error::DuplicateCnpj(row.cnpj)));
        }
        tx.execute(
          "UPDATE empresas
           SET nome = ?1, cnpj = ?2, endereco = ?3, email = ?4, telefone = ?5
           WHERE id = ?6",
          rusqlite::params![
            row.nome,
            row.cnpj,
            row.endereco,
            row.email,
            row.telefone,
            id,
          ],
        )?;
        tx.commit()?;
        Ok(Ok(()))
      })
      .await
      .map_err(Error::from_write)?;

    outcome?;
    tracing::debug!(id, "updated empresa");
    Ok(Empresa::from_new(id, input))
  }

  async fn delete_empresa(&self, id: i64) -> Result<()> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM empresas WHERE id = ?1", rusqlite::params![id])?)
      })
      .await
      .map_err(Error::from_write)?;

    if deleted == 0 {
      return Err(empresas_core::Error::EmpresaNotFound(id).into());
    }
    tracing::debug!(id, "deleted empresa");
    Ok(())
  }

  // ── Obrigações ────────────────────────────────────────────────────────────

  async fn create_obrigacao(&self, input: NewObrigacao) -> Result<Obrigacao> {
    let row = input.clone();

    let outcome: Outcome<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !empresa_exists(&tx, row.empresa_id)? {
          return Ok(Err(empresas_core::Error::EmpresaNotFound(row.empresa_id)));
        }
        tx.execute(
          "INSERT INTO obrigacoes_acessorias (nome, periodicidade, empresa_id)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![row.nome, row.periodicidade, row.empresa_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Ok(id))
      })
      .await
      .map_err(Error::from_write)?;

    let id = outcome?;
    tracing::debug!(id, empresa_id = input.empresa_id, "inserted obrigacao");
    Ok(Obrigacao::from_new(id, input))
  }

  async fn list_obrigacoes(&self) -> Result<Vec<Obrigacao>> {
    let obrigacoes = self.conn.call(|conn| Ok(all_obrigacoes(conn)?)).await?;
    Ok(obrigacoes)
  }

  async fn get_obrigacao(&self, id: i64) -> Result<Option<Obrigacao>> {
    let obrigacao = self
      .conn
      .call(move |conn| Ok(find_obrigacao(conn, id)?))
      .await?;
    Ok(obrigacao)
  }

  async fn update_obrigacao(&self, id: i64, input: NewObrigacao) -> Result<Obrigacao> {
    let row = input.clone();

    let outcome: Outcome<()> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if find_obrigacao(&tx, id)?.is_none() {
          return Ok(Err(empresas_core::Error::ObrigacaoNotFound(id)));
        }
        if !empresa_exists(&tx, row.empresa_id)? {
          return Ok(Err(empresas_core::Error::EmpresaNotFound(row.empresa_id)));
        }
        tx.execute(
          "UPDATE obrigacoes_acessorias
           SET nome = ?1, periodicidade = ?2, empresa_id = ?3
           WHERE id = ?4",
          rusqlite::params![row.nome, row.periodicidade, row.empresa_id, id],
        )?;
        tx.commit()?;
        Ok(Ok(()))
      })
      .await
      .map_err(Error::from_write)?;

    outcome?;
    tracing::debug!(id, empresa_id = input.empresa_id, "updated obrigacao");
    Ok(Obrigacao::from_new(id, input))
  }

  async fn delete_obrigacao(&self, id: i64) -> Result<()> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM obrigacoes_acessorias WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await
      .map_err(Error::from_write)?;

    if deleted == 0 {
      return Err(empresas_core::Error::ObrigacaoNotFound(id).into());
    }
    tracing::debug!(id, "deleted obrigacao");
    Ok(())
  }
}
