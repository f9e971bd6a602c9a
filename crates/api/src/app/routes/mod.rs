use axum::Router;

pub mod products;
pub mod system;
pub mod users;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/produtos", products::router())
        .nest("/api/users", users::router())
}
