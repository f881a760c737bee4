//! The `RegistryStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `empresas-store-sqlite`).
//! The HTTP layer (`empresas-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  empresa::{Empresa, EmpresaComObrigacoes, NewEmpresa},
  obrigacao::{NewObrigacao, Obrigacao},
};

/// Abstraction over an Empresas registry backend.
///
/// Every method performs one logical persistence action. Writes are atomic:
/// either the row change commits or nothing is visible.
///
/// Backend errors must convert into [`crate::Error`] so callers can tell
/// "not found" and "duplicate" apart from genuine storage failures.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RegistryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + Into<crate::Error> + 'static;

  // ── Empresas ──────────────────────────────────────────────────────────

  /// Persist a new company and return it with its assigned id.
  ///
  /// Fails with [`crate::Error::DuplicateCnpj`] if the CNPJ is taken, and
  /// with [`crate::Error::Conflict`] on any other uniqueness violation.
  fn create_empresa(
    &self,
    input: NewEmpresa,
  ) -> impl Future<Output = Result<Empresa, Self::Error>> + Send + '_;

  /// List every company in ascending id order.
  fn list_empresas(
    &self,
  ) -> impl Future<Output = Result<Vec<Empresa>, Self::Error>> + Send + '_;

  /// List every company together with the obligations that reference it.
  fn list_empresas_com_obrigacoes(
    &self,
  ) -> impl Future<Output = Result<Vec<EmpresaComObrigacoes>, Self::Error>>
  + Send
  + '_;

  /// Retrieve a company by id. Returns `None` if not found.
  fn get_empresa(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Empresa>, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of an existing company.
  ///
  /// Fails with [`crate::Error::EmpresaNotFound`] if `id` does not exist.
  fn update_empresa(
    &self,
    id: i64,
    input: NewEmpresa,
  ) -> impl Future<Output = Result<Empresa, Self::Error>> + Send + '_;

  /// Remove a company. Obligations referencing it are left in place.
  ///
  /// Fails with [`crate::Error::EmpresaNotFound`] if `id` does not exist.
  fn delete_empresa(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Obrigações ────────────────────────────────────────────────────────

  /// Persist a new obligation. The referenced company must exist.
  fn create_obrigacao(
    &self,
    input: NewObrigacao,
  ) -> impl Future<Output = Result<Obrigacao, Self::Error>> + Send + '_;

  /// List every obligation in ascending id order.
  fn list_obrigacoes(
    &self,
  ) -> impl Future<Output = Result<Vec<Obrigacao>, Self::Error>> + Send + '_;

  /// Retrieve an obligation by id. Returns `None` if not found.
  fn get_obrigacao(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Obrigacao>, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of an existing obligation, possibly
  /// moving it to a different (existing) company.
  fn update_obrigacao(
    &self,
    id: i64,
    input: NewObrigacao,
  ) -> impl Future<Output = Result<Obrigacao, Self::Error>> + Send + '_;

  /// Remove an obligation.
  fn delete_obrigacao(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
