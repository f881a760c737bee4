//! Runtime configuration.
//!
//! Layers, lowest precedence first: built-in defaults, the optional TOML
//! file, `EMPRESAS_*` environment variables, and finally `DATABASE_URL`.

use std::{
  path::{Path, PathBuf},
  str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///empresas.db";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub database_url: String,
}

impl ServerConfig {
  /// Load from `file` (if it exists) and the process environment.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    Self::build(file, std::env::var("DATABASE_URL").ok())
  }

  /// Load from `file` with an explicit `DATABASE_URL` override.
  pub fn build(
    file:         &Path,
    database_url: Option<String>,
  ) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("database_url", DEFAULT_DATABASE_URL)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("EMPRESAS").try_parsing(true))
      .set_override_option("database_url", database_url)?
      .build()?
      .try_deserialize()
  }
}

// ─── Store location ───────────────────────────────────────────────────────────

/// Where the SQLite store lives, as parsed from `database_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
  Memory,
  File(PathBuf),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
  #[error("database url is empty")]
  Empty,

  #[error("unsupported database scheme {0:?}; only sqlite is available")]
  UnsupportedScheme(String),
}

impl FromStr for StoreLocation {
  type Err = LocationError;

  /// Accepts SQLAlchemy-style URLs: `sqlite:///<relative>`,
  /// `sqlite:////<absolute>`, and `sqlite://` (in-memory). Also accepts the
  /// shorthands `sqlite://<relative>`, `sqlite:<path>`, a bare path, and
  /// `:memory:` in any of those forms.
  fn from_str(url: &str) -> Result<Self, Self::Err> {
    let url = url.trim();
    let rest = if let Some(rest) = url.strip_prefix("sqlite:///") {
      // The third slash separates the (empty) host from the path.
      rest
    } else if let Some(rest) = url.strip_prefix("sqlite://") {
      if rest.is_empty() {
        return Ok(StoreLocation::Memory);
      }
      rest
    } else if let Some(rest) = url.strip_prefix("sqlite:") {
      rest
    } else if let Some((scheme, _)) = url.split_once("://") {
      return Err(LocationError::UnsupportedScheme(scheme.to_owned()));
    } else {
      url
    };

    match rest {
      "" => Err(LocationError::Empty),
      ":memory:" => Ok(StoreLocation::Memory),
      path => Ok(StoreLocation::File(expand_tilde(Path::new(path)))),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_sqlalchemy_style_urls() {
    assert_eq!(
      "sqlite:///empresas.db".parse::<StoreLocation>(),
      Ok(StoreLocation::File(PathBuf::from("empresas.db")))
    );
    assert_eq!(
      "sqlite:///data/registry.db".parse::<StoreLocation>(),
      Ok(StoreLocation::File(PathBuf::from("data/registry.db")))
    );
    assert_eq!(
      "sqlite:////var/lib/empresas/data.db".parse::<StoreLocation>(),
      Ok(StoreLocation::File(PathBuf::from("/var/lib/empresas/data.db")))
    );
  }

  #[test]
  fn default_url_is_relative() {
    assert_eq!(
      DEFAULT_DATABASE_URL.parse::<StoreLocation>(),
      Ok(StoreLocation::File(PathBuf::from("empresas.db")))
    );
  }

  #[test]
  fn parses_shorthand_urls() {
    assert_eq!(
      "sqlite://empresas.db".parse::<StoreLocation>(),
      Ok(StoreLocation::File(PathBuf::from("empresas.db")))
    );
    assert_eq!(
      "sqlite:/var/lib/empresas/data.db".parse::<StoreLocation>(),
      Ok(StoreLocation::File(PathBuf::from("/var/lib/empresas/data.db")))
    );
    assert_eq!(
      "data/registry.db".parse::<StoreLocation>(),
      Ok(StoreLocation::File(PathBuf::from("data/registry.db")))
    );
  }

  #[test]
  fn parses_memory_urls() {
    for url in [
      "sqlite://",
      "sqlite:///:memory:",
      ":memory:",
      "sqlite::memory:",
      "sqlite://:memory:",
    ] {
      assert_eq!(url.parse::<StoreLocation>(), Ok(StoreLocation::Memory), "{url}");
    }
  }

  #[test]
  fn rejects_other_schemes_and_empty_urls() {
    assert_eq!(
      "postgresql://user:pw@localhost/empresas".parse::<StoreLocation>(),
      Err(LocationError::UnsupportedScheme("postgresql".into()))
    );
    assert_eq!("sqlite:".parse::<StoreLocation>(), Err(LocationError::Empty));
    assert_eq!("sqlite:///".parse::<StoreLocation>(), Err(LocationError::Empty));
    assert_eq!("  ".parse::<StoreLocation>(), Err(LocationError::Empty));
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::build(&dir.path().join("empresas.toml"), None).unwrap();
    // EMPRESAS_* variables may be set by the environment.
    if std::env::var("EMPRESAS_DATABASE_URL").is_err() {
      assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    }
    if std::env::var("EMPRESAS_PORT").is_err() {
      assert_eq!(cfg.port, DEFAULT_PORT);
    }
  }

  #[test]
  fn file_values_and_database_url_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empresas.toml");
    std::fs::write(
      &path,
      "host = \"0.0.0.0\"\ndatabase_url = \"sqlite:///from-file.db\"\n",
    )
    .unwrap();

    let from_file = ServerConfig::build(&path, None).unwrap();
    if std::env::var("EMPRESAS_HOST").is_err() {
      assert_eq!(from_file.host, "0.0.0.0");
    }
    if std::env::var("EMPRESAS_DATABASE_URL").is_err() {
      assert_eq!(from_file.database_url, "sqlite:///from-file.db");
    }

    let overridden =
      ServerConfig::build(&path, Some("sqlite::memory:".into())).unwrap();
    assert_eq!(overridden.database_url, "sqlite::memory:");
  }
}
