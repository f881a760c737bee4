//! Row mapping between SQLite rows and the domain types, plus the small
//! lookups shared by several store operations.
//!
//! Every helper takes a plain `&Connection`; a `&Transaction` derefs to one,
//! so the same helpers run inside and outside a write transaction.

use empresas_core::{empresa::Empresa, obrigacao::Obrigacao};
use rusqlite::{Connection, OptionalExtension as _, Row};

// ─── Empresa ──────────────────────────────────────────────────────────────────

pub const SELECT_EMPRESAS: &str =
  "SELECT id, nome, cnpj, endereco, email, telefone FROM empresas";

pub fn decode_empresa(row: &Row<'_>) -> rusqlite::Result<Empresa> {
  Ok(Empresa {
    id:       row.get(0)?,
    nome:     row.get(1)?,
    cnpj:     row.get(2)?,
    endereco: row.get(3)?,
    email:    row.get(4)?,
    telefone: row.get(5)?,
  })
}

pub fn find_empresa(conn: &Connection, id: i64) -> rusqlite::Result<Option<Empresa>> {
  conn
    .query_row(
      &format!("{SELECT_EMPRESAS} WHERE id = ?1"),
      rusqlite::params![id],
      decode_empresa,
    )
    .optional()
}

pub fn empresa_exists(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM empresas WHERE id = ?1",
        rusqlite::params![id],
        |_| Ok(()),
      )
      .optional()?
      .is_some(),
  )
}

/// Whether `cnpj` belongs to a company other than `except`.
pub fn cnpj_taken(
  conn:   &Connection,
  cnpj:   &str,
  except: Option<i64>,
) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM empresas WHERE cnpj = ?1 AND (?2 IS NULL OR id != ?2)",
        rusqlite::params![cnpj, except],
        |_| Ok(()),
      )
      .optional()?
      .is_some(),
  )
}

pub fn all_empresas(conn: &Connection) -> rusqlite::Result<Vec<Empresa>> {
  let mut stmt = conn.prepare(&format!("{SELECT_EMPRESAS} ORDER BY id"))?;
  stmt
    .query_map([], decode_empresa)?
    .collect::<rusqlite::Result<Vec<_>>>()
}

// ─── Obrigação ────────────────────────────────────────────────────────────────

pub const SELECT_OBRIGACOES: &str =
  "SELECT id, nome, periodicidade, empresa_id FROM obrigacoes_acessorias";

pub fn decode_obrigacao(row: &Row<'_>) -> rusqlite::Result<Obrigacao> {
  Ok(Obrigacao {
    id:            row.get(0)?,
    nome:          row.get(1)?,
    periodicidade: row.get(2)?,
    empresa_id:    row.get(3)?,
  })
}

pub fn find_obrigacao(
  conn: &Connection,
  id:   i64,
) -> rusqlite::Result<Option<Obrigacao>> {
  conn
    .query_row(
      &format!("{SELECT_OBRIGACOES} WHERE id = ?1"),
      rusqlite::params![id],
      decode_obrigacao,
    )
    .optional()
}

pub fn all_obrigacoes(conn: &Connection) -> rusqlite::Result<Vec<Obrigacao>> {
  let mut stmt = conn.prepare(&format!("{SELECT_OBRIGACOES} ORDER BY id"))?;
  stmt
    .query_map([], decode_obrigacao)?
    .collect::<rusqlite::Result<Vec<_>>>()
}
