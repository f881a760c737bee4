//! SQL schema for the Empresas SQLite store.
//!
//! Executed once at connection startup. There is no migration step: tables
//! that already exist are left exactly as they are.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
-- Deleting a company leaves its obligations (and their empresa_id) in place.
PRAGMA foreign_keys = OFF;

CREATE TABLE IF NOT EXISTS empresas (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    nome      TEXT NOT NULL,
    cnpj      TEXT NOT NULL UNIQUE,
    endereco  TEXT NOT NULL,
    email     TEXT NOT NULL UNIQUE,
    telefone  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS obrigacoes_acessorias (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    nome           TEXT NOT NULL,
    periodicidade  TEXT NOT NULL,   -- free text: Mensal, Trimestral, Anual, ...
    empresa_id     INTEGER NOT NULL REFERENCES empresas(id)
);

CREATE INDEX IF NOT EXISTS empresas_nome_idx          ON empresas(nome);
CREATE INDEX IF NOT EXISTS obrigacoes_nome_idx        ON obrigacoes_acessorias(nome);
CREATE INDEX IF NOT EXISTS obrigacoes_empresa_id_idx  ON obrigacoes_acessorias(empresa_id);
";
