use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use catalogo_core::DomainError;

pub const PRODUTO_NAO_ENCONTRADO: &str = "Produto não encontrado";
pub const PRODUTO_ID_INVALIDO: &str = "O \"id\" do produto deve ser um número.";
pub const USUARIO_NAO_ENCONTRADO: &str = "Usuário não encontrado";
pub const USUARIO_ID_INVALIDO: &str = "O \"id\" do usuário deve ser um número.";

/// Failure of a product endpoint, tagged with the operation's error message.
#[derive(Debug)]
pub struct ProdutoError {
    pub contexto: &'static str,
    pub error: DomainError,
}

impl ProdutoError {
    pub fn new(contexto: &'static str, error: DomainError) -> Self {
        Self { contexto, error }
    }
}

impl IntoResponse for ProdutoError {
    fn into_response(self) -> Response {
        match self.error {
            DomainError::InvalidId(_) => {
                json_mensagem(StatusCode::BAD_REQUEST, PRODUTO_ID_INVALIDO)
            }
            DomainError::NotFound => json_mensagem(StatusCode::NOT_FOUND, PRODUTO_NAO_ENCONTRADO),
            DomainError::Processing(erro) => {
                tracing::error!(contexto = self.contexto, %erro, "product request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "mensagem": self.contexto,
                        "erro": erro,
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// Failure of a user endpoint (`{"error": ...}` body).
#[derive(Debug)]
pub struct UsuarioError(pub DomainError);

impl IntoResponse for UsuarioError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, USUARIO_ID_INVALIDO),
            DomainError::NotFound => json_error(StatusCode::NOT_FOUND, USUARIO_NAO_ENCONTRADO),
            DomainError::Processing(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }
}

pub fn json_mensagem(status: StatusCode, mensagem: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "mensagem": mensagem.into() }))).into_response()
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
