use crate::api_error::ApiError;
use crate::http::AppState;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

/// GET /api/players/:id/card
/// Collectible card stats, re-derived from history on every call.
pub async fn card<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let card = state.players.card(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(card))
}
