use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::Utc;

use catalogo_core::{DomainError, Entity, ProductId};
use catalogo_products::ProductFields;

use crate::app::dto;
use crate::app::errors::{ProdutoError, json_mensagem};
use crate::app::services::AppServices;

const ERRO_CADASTRAR: &str = "Erro ao cadastrar produto";
const ERRO_DELETAR: &str = "Erro ao deletar produto";
const ERRO_LISTAR: &str = "Erro ao listar produtos";
const ERRO_BUSCAR: &str = "Erro ao buscar produto";
const ERRO_ATUALIZAR: &str = "Erro ao atualizar produto";
const ERRO_PRECO: &str = "Erro ao atualizar preço do produto";
const ERRO_ESTOQUE: &str = "Erro ao atualizar estoque do produto";

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(replace_product).delete(delete_product),
        )
        .route("/:id/preco", patch(reduce_price))
        .route("/:id/estoque", patch(adjust_stock))
}

/// Only lookups distinguish a malformed id; every other operation treats it as
/// an id that matches nothing.
fn lookup_id(raw: &str) -> Result<ProductId, DomainError> {
    raw.parse::<ProductId>().map_err(|_| DomainError::not_found())
}

/// Resolve the record before the body is looked at: an absent product is a 404
/// whatever the payload holds.
fn require_existing(
    services: &AppServices,
    raw: &str,
    contexto: &'static str,
) -> Result<ProductId, ProdutoError> {
    let id = lookup_id(raw).map_err(|e| ProdutoError::new(contexto, e))?;
    services
        .products
        .get(id)
        .map_err(|e| ProdutoError::new(contexto, e))?;
    Ok(id)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>, contexto: &'static str) -> Result<T, ProdutoError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| {
            ProdutoError::new(contexto, DomainError::processing(rejection.body_text()))
        })
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> Result<impl IntoResponse, ProdutoError> {
    let fields = body(payload, ERRO_CADASTRAR)?;

    let product = services
        .products
        .create(fields, Utc::now())
        .map_err(|e| ProdutoError::new(ERRO_CADASTRAR, e))?;

    tracing::info!(product_id = %product.id(), "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ProdutoError> {
    // A malformed or unknown id still answers with success.
    if let Ok(id) = lookup_id(&id) {
        let removed = services
            .products
            .delete(id)
            .map_err(|e| ProdutoError::new(ERRO_DELETAR, e))?;
        tracing::info!(product_id = %id, removed, "product delete");
    }

    Ok(json_mensagem(StatusCode::OK, "Produto deletado com sucesso"))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::ListProductsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ProdutoError> {
    let Query(params) = params.map_err(|rejection| {
        ProdutoError::new(ERRO_LISTAR, DomainError::processing(rejection.body_text()))
    })?;

    let items = services
        .products
        .list(&params.to_query())
        .map_err(|e| ProdutoError::new(ERRO_LISTAR, e))?;

    tracing::debug!(count = items.len(), "products listed");
    Ok((StatusCode::OK, Json(items)))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ProdutoError> {
    let id: ProductId = id.parse().map_err(|e| ProdutoError::new(ERRO_BUSCAR, e))?;

    let product = services
        .products
        .get(id)
        .map_err(|e| ProdutoError::new(ERRO_BUSCAR, e))?;

    Ok((StatusCode::OK, Json(product)))
}

pub async fn replace_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> Result<impl IntoResponse, ProdutoError> {
    let id = require_existing(&services, &id, ERRO_ATUALIZAR)?;
    let fields = body(payload, ERRO_ATUALIZAR)?;

    let product = services
        .products
        .replace(id, fields)
        .map_err(|e| ProdutoError::new(ERRO_ATUALIZAR, e))?;

    tracing::info!(product_id = %id, "product replaced");
    Ok((StatusCode::OK, Json(product)))
}

pub async fn reduce_price(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<dto::ReducePriceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ProdutoError> {
    let id = require_existing(&services, &id, ERRO_PRECO)?;
    let req = body(payload, ERRO_PRECO)?;

    let product = services
        .products
        .reduce_price(id, req.percentual_reducao)
        .map_err(|e| ProdutoError::new(ERRO_PRECO, e))?;

    tracing::info!(
        product_id = %id,
        percentual_reducao = ?req.percentual_reducao,
        preco = ?product.preco(),
        "product price reduced"
    );
    Ok((StatusCode::OK, Json(product)))
}

pub async fn adjust_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<dto::AdjustStockRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ProdutoError> {
    let id = require_existing(&services, &id, ERRO_ESTOQUE)?;
    let req = body(payload, ERRO_ESTOQUE)?;

    let product = services
        .products
        .adjust_stock(id, req.quantidade)
        .map_err(|e| ProdutoError::new(ERRO_ESTOQUE, e))?;

    tracing::info!(
        product_id = %id,
        quantidade = ?req.quantidade,
        estoque = ?product.quantidade_estoque(),
        "product stock adjusted"
    );
    Ok((StatusCode::OK, Json(product)))
}
