//! Empresa — a registered business entity.
//!
//! The CNPJ is the natural key: no two companies may share one. Every other
//! field is free text and is overwritten wholesale on update.

use serde::{Deserialize, Serialize};

use crate::obrigacao::ObrigacaoResumo;

/// The mutable fields of a company. Accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmpresa {
  pub nome:     String,
  pub cnpj:     String,
  pub endereco: String,
  pub email:    String,
  pub telefone: String,
}

/// A persisted company, including its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empresa {
  pub id:       i64,
  pub nome:     String,
  pub cnpj:     String,
  pub endereco: String,
  pub email:    String,
  pub telefone: String,
}

impl Empresa {
  /// Attach a freshly assigned `id` to the fields it was created from.
  pub fn from_new(id: i64, input: NewEmpresa) -> Self {
    Self {
      id,
      nome: input.nome,
      cnpj: input.cnpj,
      endereco: input.endereco,
      email: input.email,
      telefone: input.telefone,
    }
  }
}

/// A company together with the obligations that reference it.
///
/// Serialises flat: the company's own fields plus an `obrigacoes` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmpresaComObrigacoes {
  #[serde(flatten)]
  pub empresa:    Empresa,
  pub obrigacoes: Vec<ObrigacaoResumo>,
}
