//! Listing pipeline: filters, then an optional sort.

use core::cmp::Ordering;
use core::str::FromStr;

use catalogo_core::Entity;

use crate::product::Product;

/// Fields a listing can be ordered by (`ordenarPor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Nome,
    Marca,
    Preco,
    QuantidadeEstoque,
    Categoria,
    DataCadastro,
    MediaAvaliacao,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Nome => "nome",
            SortField::Marca => "marca",
            SortField::Preco => "preco",
            SortField::QuantidadeEstoque => "quantidadeEstoque",
            SortField::Categoria => "categoria",
            SortField::DataCadastro => "dataCadastro",
            SortField::MediaAvaliacao => "mediaAvaliacao",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Id => a.id().cmp(&b.id()),
            SortField::Nome => a.nome().cmp(&b.nome()),
            SortField::Marca => a.marca().cmp(&b.marca()),
            SortField::Preco => cmp_optional_f64(a.preco(), b.preco()),
            SortField::QuantidadeEstoque => a.quantidade_estoque().cmp(&b.quantidade_estoque()),
            SortField::Categoria => a.categoria().cmp(&b.categoria()),
            SortField::DataCadastro => a.data_cadastro().cmp(&b.data_cadastro()),
            SortField::MediaAvaliacao => cmp_f64(a.media_avaliacao(), b.media_avaliacao()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortField(pub String);

impl core::fmt::Display for UnknownSortField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown sort field: {}", self.0)
    }
}

impl std::error::Error for UnknownSortField {}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "nome" => Ok(SortField::Nome),
            "marca" => Ok(SortField::Marca),
            "preco" => Ok(SortField::Preco),
            "quantidadeEstoque" => Ok(SortField::QuantidadeEstoque),
            "categoria" => Ok(SortField::Categoria),
            "dataCadastro" => Ok(SortField::DataCadastro),
            "mediaAvaliacao" => Ok(SortField::MediaAvaliacao),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction (`ordem`). Only the literal `desc` selects descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

/// Parsed listing criteria. `None` means the step is skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub nome: Option<String>,
    pub preco_max: Option<f64>,
    pub media_avaliacao: Option<f64>,
    pub sort: Option<Sort>,
}

impl ListQuery {
    /// Run the pipeline over a snapshot of the catalog (name, max price, min
    /// average rating, then sort).
    pub fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        if let Some(nome) = &self.nome {
            let needle = nome.to_lowercase();
            products.retain(|p| {
                p.nome()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
            });
        }

        if let Some(preco_max) = self.preco_max {
            products.retain(|p| p.preco().is_some_and(|preco| preco <= preco_max));
        }

        // NaN averages (no ratings) never satisfy `>=`.
        if let Some(minimo) = self.media_avaliacao {
            products.retain(|p| p.media_avaliacao() >= minimo);
        }

        if let Some(sort) = self.sort {
            products.sort_by(|a, b| match sort.order {
                SortOrder::Asc => sort.field.compare(a, b),
                SortOrder::Desc => sort.field.compare(b, a),
            });
        }

        products
    }
}

/// Lenient float parse for query thresholds: the longest numeric prefix wins
/// (`"50abc"` → 50), `Infinity` is the only spelled-out number, anything else
/// is NaN.
pub fn parse_threshold(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };

    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }

    // Only numeric characters from here on, so `inf`/`nan` spellings never parse.
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')))
        .unwrap_or(rest.len());
    let candidate = &rest[..end];
    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .map_or(f64::NAN, |v| sign * v)
}

// NaN sorts before every number.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn cmp_optional_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp_f64(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductFields;
    use catalogo_core::ProductId;
    use chrono::{Duration, Utc};

    fn product(id: u64, nome: &str, preco: f64, avaliacoes: Vec<f64>) -> Product {
        Product::create(
            ProductId::new(id),
            ProductFields {
                nome: Some(nome.to_string()),
                marca: Some("Marca".to_string()),
                preco: Some(preco),
                quantidade_estoque: Some(id as i64),
                categoria: Some("Geral".to_string()),
                avaliacoes: Some(avaliacoes),
            },
            Utc::now() + Duration::seconds(id as i64),
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Teclado ABC", 80.0, vec![4.0, 4.0]),
            product(2, "Mouse", 30.0, vec![5.0]),
            product(3, "abcdário", 50.0, vec![]),
            product(4, "Monitor", 900.0, vec![2.0, 3.0]),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id().get()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let out = ListQuery::default().apply(catalog());
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let query = ListQuery {
            nome: Some("ABC".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(ids(&query.apply(catalog())), vec![1, 3]);
    }

    #[test]
    fn name_filter_skips_products_without_name() {
        let mut products = catalog();
        products.push(Product::create(
            ProductId::new(5),
            ProductFields::default(),
            Utc::now(),
        ));
        let query = ListQuery {
            nome: Some("o".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(ids(&query.apply(products)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn max_price_is_inclusive() {
        let query = ListQuery {
            preco_max: Some(50.0),
            ..ListQuery::default()
        };
        let out = query.apply(catalog());
        assert_eq!(ids(&out), vec![2, 3]);
        assert!(out.iter().all(|p| p.preco().unwrap() <= 50.0));
    }

    #[test]
    fn nan_max_price_filters_everything() {
        let query = ListQuery {
            preco_max: Some(parse_threshold("barato")),
            ..ListQuery::default()
        };
        assert!(query.apply(catalog()).is_empty());
    }

    #[test]
    fn min_average_excludes_unrated_products() {
        let query = ListQuery {
            media_avaliacao: Some(0.0),
            ..ListQuery::default()
        };
        assert_eq!(ids(&query.apply(catalog())), vec![1, 2, 4]);

        let query = ListQuery {
            media_avaliacao: Some(4.0),
            ..ListQuery::default()
        };
        assert_eq!(ids(&query.apply(catalog())), vec![1, 2]);
    }

    #[test]
    fn sorts_by_price_descending() {
        let query = ListQuery {
            sort: Some(Sort {
                field: SortField::Preco,
                order: SortOrder::Desc,
            }),
            ..ListQuery::default()
        };
        let out = query.apply(catalog());
        assert_eq!(ids(&out), vec![4, 1, 3, 2]);
        assert!(out.windows(2).all(|w| w[0].preco() >= w[1].preco()));
    }

    #[test]
    fn sorts_by_name_ascending() {
        let query = ListQuery {
            sort: Some(Sort {
                field: SortField::Nome,
                order: SortOrder::Asc,
            }),
            ..ListQuery::default()
        };
        // Byte-wise ordering: uppercase letters before lowercase.
        assert_eq!(ids(&query.apply(catalog())), vec![4, 2, 1, 3]);
    }

    #[test]
    fn unrated_products_sort_first_by_average() {
        let query = ListQuery {
            sort: Some(Sort {
                field: SortField::MediaAvaliacao,
                order: SortOrder::Asc,
            }),
            ..ListQuery::default()
        };
        assert_eq!(ids(&query.apply(catalog())), vec![3, 4, 1, 2]);
    }

    #[test]
    fn filters_compose_before_sort() {
        let query = ListQuery {
            nome: Some("o".to_string()),
            preco_max: Some(100.0),
            media_avaliacao: None,
            sort: Some(Sort {
                field: SortField::Preco,
                order: SortOrder::Asc,
            }),
        };
        assert_eq!(ids(&query.apply(catalog())), vec![2, 3, 1]);
    }

    #[test]
    fn sort_field_names_round_trip() {
        for field in [
            SortField::Id,
            SortField::Nome,
            SortField::Marca,
            SortField::Preco,
            SortField::QuantidadeEstoque,
            SortField::Categoria,
            SortField::DataCadastro,
            SortField::MediaAvaliacao,
        ] {
            assert_eq!(field.as_str().parse::<SortField>(), Ok(field));
        }
        assert!("avaliacoes".parse::<SortField>().is_err());
    }

    #[test]
    fn only_literal_desc_is_descending() {
        assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(None), SortOrder::Asc);
    }

    #[test]
    fn threshold_parsing_takes_numeric_prefix() {
        assert_eq!(parse_threshold("50"), 50.0);
        assert_eq!(parse_threshold(" 12.5"), 12.5);
        assert_eq!(parse_threshold("50abc"), 50.0);
        assert_eq!(parse_threshold("-12.5x"), -12.5);
        assert!(parse_threshold("abc").is_nan());
        assert!(parse_threshold("").is_nan());
    }

    #[test]
    fn threshold_parsing_only_spells_out_infinity() {
        assert_eq!(parse_threshold("Infinity"), f64::INFINITY);
        assert_eq!(parse_threshold("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_threshold("inf").is_nan());
        assert!(parse_threshold("infinity").is_nan());
        assert!(parse_threshold("nan").is_nan());
        assert!(parse_threshold("-+5").is_nan());
    }

    #[test]
    fn spelled_inf_threshold_filters_everything() {
        let query = ListQuery {
            preco_max: Some(parse_threshold("inf")),
            ..ListQuery::default()
        };
        assert!(query.apply(catalog()).is_empty());
    }
}
