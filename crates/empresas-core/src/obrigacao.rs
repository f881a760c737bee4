//! Obrigação acessória — a recurring regulatory filing owned by a company.

use serde::{Deserialize, Serialize};

/// The mutable fields of an obligation. Accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewObrigacao {
  /// Filing code, e.g. `"DCTF"`.
  pub nome:          String,
  /// Free-text cadence label (`"Mensal"`, `"Trimestral"`, `"Anual"`, ...).
  /// Not validated against a fixed set.
  pub periodicidade: String,
  /// The owning company. Must exist when the obligation is written.
  pub empresa_id:    i64,
}

/// A persisted obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obrigacao {
  pub id:            i64,
  pub nome:          String,
  pub periodicidade: String,
  pub empresa_id:    i64,
}

impl Obrigacao {
  pub fn from_new(id: i64, input: NewObrigacao) -> Self {
    Self {
      id,
      nome: input.nome,
      periodicidade: input.periodicidade,
      empresa_id: input.empresa_id,
    }
  }
}

/// The nested view of an obligation inside
/// [`EmpresaComObrigacoes`](crate::empresa::EmpresaComObrigacoes).
/// The owning company is implied by the parent, so `empresa_id` is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObrigacaoResumo {
  pub id:            i64,
  pub nome:          String,
  pub periodicidade: String,
}

impl From<Obrigacao> for ObrigacaoResumo {
  fn from(o: Obrigacao) -> Self {
    Self {
      id:            o.id,
      nome:          o.nome,
      periodicidade: o.periodicidade,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resumo_serialises_without_empresa_id() {
    let resumo = ObrigacaoResumo::from(Obrigacao {
      id:            7,
      nome:          "DCTF".into(),
      periodicidade: "Mensal".into(),
      empresa_id:    3,
    });
    let json = serde_json::to_value(&resumo).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "id": 7, "nome": "DCTF", "periodicidade": "Mensal" })
    );
  }
}
