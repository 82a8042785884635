//! API Root Handler

use axum::Json;

use crate::application::dto::MessageResponse;

pub const BANNER: &str = "Sistema de Orçamentação - Estruturas de Média Tensão";

/// `GET /api/` service banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(BANNER))
}
