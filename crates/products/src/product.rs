use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalogo_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog record.
///
/// Descriptive fields are optional: a field omitted at creation (or on a full
/// replace) is stored as absent and rendered as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    nome: Option<String>,
    marca: Option<String>,
    preco: Option<f64>,
    quantidade_estoque: Option<i64>,
    categoria: Option<String>,
    avaliacoes: Vec<f64>,
    data_cadastro: DateTime<Utc>,
}

/// Client-supplied product fields (create and full replace).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFields {
    pub nome: Option<String>,
    pub marca: Option<String>,
    pub preco: Option<f64>,
    pub quantidade_estoque: Option<i64>,
    pub categoria: Option<String>,
    pub avaliacoes: Option<Vec<f64>>,
}

impl Product {
    /// Build a fresh record. `avaliacoes` defaults to an empty list.
    pub fn create(id: ProductId, fields: ProductFields, data_cadastro: DateTime<Utc>) -> Self {
        Self {
            id,
            nome: fields.nome,
            marca: fields.marca,
            preco: fields.preco,
            quantidade_estoque: fields.quantidade_estoque,
            categoria: fields.categoria,
            avaliacoes: fields.avaliacoes.unwrap_or_default(),
            data_cadastro,
        }
    }

    /// Full replace: every field comes from `fields` except `id` and `dataCadastro`.
    pub fn replaced_with(&self, fields: ProductFields) -> Self {
        Self::create(self.id, fields, self.data_cadastro)
    }

    pub fn nome(&self) -> Option<&str> {
        self.nome.as_deref()
    }

    pub fn marca(&self) -> Option<&str> {
        self.marca.as_deref()
    }

    pub fn preco(&self) -> Option<f64> {
        self.preco
    }

    pub fn quantidade_estoque(&self) -> Option<i64> {
        self.quantidade_estoque
    }

    pub fn categoria(&self) -> Option<&str> {
        self.categoria.as_deref()
    }

    pub fn avaliacoes(&self) -> &[f64] {
        &self.avaliacoes
    }

    pub fn data_cadastro(&self) -> DateTime<Utc> {
        self.data_cadastro
    }

    /// Arithmetic mean of the ratings. An empty list yields NaN (0/0).
    pub fn media_avaliacao(&self) -> f64 {
        let total: f64 = self.avaliacoes.iter().sum();
        total / self.avaliacoes.len() as f64
    }

    /// `preco = preco × (1 − percentual/100)`, unbounded in both directions.
    ///
    /// A missing percentage or a missing price leaves the price undefined (absent).
    pub fn reduce_price(&mut self, percentual_reducao: Option<f64>) {
        self.preco = match (self.preco, percentual_reducao) {
            (Some(preco), Some(percentual)) => Some(preco - preco * (percentual / 100.0)),
            _ => None,
        };
    }

    /// Add a (possibly negative) delta to the stock. No floor at zero.
    ///
    /// A missing delta or a missing stock leaves the stock undefined (absent).
    pub fn adjust_stock(&mut self, quantidade: Option<i64>) -> DomainResult<()> {
        self.quantidade_estoque = match (self.quantidade_estoque, quantidade) {
            (Some(estoque), Some(quantidade)) => {
                Some(estoque.checked_add(quantidade).ok_or_else(|| {
                    DomainError::processing(format!(
                        "stock overflow adjusting {estoque} by {quantidade}"
                    ))
                })?)
            }
            _ => None,
        };
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
