use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalogo_core::UserId;

use crate::app::dto;
use crate::app::errors::UsuarioError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListUsersParams>,
) -> impl IntoResponse {
    tracing::debug!(status = ?params.status, "listing users");
    let status = params.status.as_deref().filter(|s| !s.is_empty());
    Json(services.users.list(status))
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, UsuarioError> {
    let id: UserId = id.parse().map_err(UsuarioError)?;
    let user = services.users.get(id).map_err(UsuarioError)?;
    Ok(Json(user))
}
