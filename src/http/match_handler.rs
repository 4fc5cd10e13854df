use crate::api_error::ApiError;
use crate::http::AppState;
use crate::models::{FinalizeMatchRequest, ReportGoalRequest};
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

/// POST /api/matches/:id/goals
pub async fn report_goal<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
    req: web::Json<ReportGoalRequest>,
) -> Result<impl Responder, ApiError> {
    let score = state
        .matches
        .report_goal(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(score))
}

/// DELETE /api/matches/:id/goals
/// Undo the most recent matching goal.
pub async fn undo_goal<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
    req: web::Json<ReportGoalRequest>,
) -> Result<impl Responder, ApiError> {
    let score = state
        .matches
        .undo_goal(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(score))
}

/// POST /api/matches/:id/finalize
/// Administrator score correction; locked matches must be unlocked first.
pub async fn finalize<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
    req: web::Json<FinalizeMatchRequest>,
) -> Result<impl Responder, ApiError> {
    let score = state
        .matches
        .finalize(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(score))
}

/// POST /api/matches/:id/unlock
pub async fn unlock<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let score = state.matches.unlock(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(score))
}
