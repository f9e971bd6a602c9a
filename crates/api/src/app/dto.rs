use serde::Deserialize;

use catalogo_products::{ListQuery, Sort, SortField, SortOrder, parse_threshold};

// -------------------------
// Request DTOs
// -------------------------

/// An absent `percentualReducao` leaves the price undefined.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReducePriceRequest {
    pub percentual_reducao: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub quantidade: Option<i64>,
}

/// Raw `GET /produtos` query string. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsParams {
    pub nome: Option<String>,
    pub preco_max: Option<String>,
    pub media_avaliacao: Option<String>,
    pub ordenar_por: Option<String>,
    pub ordem: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub status: Option<String>,
}

// -------------------------
// Mapping
// -------------------------

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ListProductsParams {
    /// Translate query parameters into the domain listing query.
    ///
    /// Unknown `ordenarPor` values disable sorting rather than failing the request.
    pub fn to_query(&self) -> ListQuery {
        let sort = present(&self.ordenar_por).and_then(|field| match field.parse::<SortField>() {
            Ok(field) => Some(Sort {
                field,
                order: SortOrder::from_param(self.ordem.as_deref()),
            }),
            Err(e) => {
                tracing::warn!(%e, "ignoring ordenarPor");
                None
            }
        });

        ListQuery {
            nome: present(&self.nome).map(str::to_owned),
            preco_max: present(&self.preco_max).map(parse_threshold),
            media_avaliacao: present(&self.media_avaliacao).map(parse_threshold),
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_skip_every_step() {
        let params = ListProductsParams {
            nome: Some(String::new()),
            preco_max: Some(String::new()),
            ..ListProductsParams::default()
        };
        assert_eq!(params.to_query(), ListQuery::default());
    }

    #[test]
    fn maps_all_params() {
        let params = ListProductsParams {
            nome: Some("abc".into()),
            preco_max: Some("50".into()),
            media_avaliacao: Some("3.5".into()),
            ordenar_por: Some("preco".into()),
            ordem: Some("desc".into()),
        };
        let query = params.to_query();
        assert_eq!(query.nome.as_deref(), Some("abc"));
        assert_eq!(query.preco_max, Some(50.0));
        assert_eq!(query.media_avaliacao, Some(3.5));
        assert_eq!(
            query.sort,
            Some(Sort {
                field: SortField::Preco,
                order: SortOrder::Desc
            })
        );
    }

    #[test]
    fn unknown_sort_field_is_ignored() {
        let params = ListProductsParams {
            ordenar_por: Some("cor".into()),
            ..ListProductsParams::default()
        };
        assert_eq!(params.to_query().sort, None);
    }

    #[test]
    fn unparseable_threshold_becomes_nan() {
        let params = ListProductsParams {
            preco_max: Some("barato".into()),
            ..ListProductsParams::default()
        };
        assert!(params.to_query().preco_max.is_some_and(f64::is_nan));
    }
}
