//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use magic_movers_domain::{MissionId, MoverId};
use magic_movers_shared::{
    CreateMagicItemRequest, CreateMagicMoverRequest, LoadMoverRequest, MagicItemResponse,
    MagicMoverResponse, MissionResponse, MissionsQuery, RankedMoverResponse,
};

use super::dto::{item_to_response, mission_to_response, mover_to_response, rank_to_response};
use super::error::{ApiError, MISSION_NOT_FOUND, MOVER_NOT_FOUND};
use crate::app::App;
use crate::use_cases::items::CreateItemInput;
use crate::use_cases::movers::{parse_item_ids, CreateMoverInput};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(greeting))
        .route("/api/health", get(health))
        .route("/api/magic-items", get(list_items).post(create_item))
        .route("/api/magic-movers", get(list_movers).post(create_mover))
        .route("/api/magic-movers/rank", get(rank_movers))
        .route("/api/magic-movers/{mover_id}/load", post(load_mover))
        .route("/api/missions", get(list_missions))
        .route("/api/missions/{mission_id}/start", patch(start_mission))
        .route("/api/missions/{mission_id}/end", patch(end_mission))
}

async fn greeting(State(app): State<Arc<App>>) -> Json<String> {
    Json(format!("Hello from the home page of \"{}\"", app.app_name))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Magic items
// =============================================================================

async fn list_items(State(app): State<Arc<App>>) -> Result<Json<Vec<MagicItemResponse>>, ApiError> {
    let items = app.use_cases.items.list.execute().await?;
    Ok(Json(items.iter().map(item_to_response).collect()))
}

async fn create_item(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateMagicItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MagicItemResponse>), ApiError> {
    let Json(req) = body.map_err(bad_body)?;
    let item = app
        .use_cases
        .items
        .create
        .execute(CreateItemInput {
            name: req.name,
            weight: req.weight,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(item_to_response(&item))))
}

// =============================================================================
// Magic movers
// =============================================================================

async fn list_movers(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<MagicMoverResponse>>, ApiError> {
    let movers = app.use_cases.movers.list.execute().await?;
    Ok(Json(movers.iter().map(mover_to_response).collect()))
}

async fn create_mover(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateMagicMoverRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MagicMoverResponse>), ApiError> {
    let Json(req) = body.map_err(bad_body)?;
    let mover = app
        .use_cases
        .movers
        .create
        .execute(CreateMoverInput {
            name: req.name,
            weight_limit: req.weight_limit,
            energy: req.energy,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(mover_to_response(&mover))))
}

async fn load_mover(
    State(app): State<Arc<App>>,
    Path(mover_id): Path<String>,
    body: Result<Json<LoadMoverRequest>, JsonRejection>,
) -> Result<Json<MissionResponse>, ApiError> {
    let mover_id = MoverId::from_uuid(parse_path_id(&mover_id, MOVER_NOT_FOUND)?);
    let Json(req) = body.map_err(bad_body)?;
    let item_ids = parse_item_ids(req.magic_items_ids)
        .map_err(|errors| ApiError::Validation(errors.to_field_map()))?;

    let mission = app
        .use_cases
        .movers
        .load
        .execute(mover_id, &item_ids)
        .await?;
    Ok(Json(mission_to_response(&mission)))
}

async fn rank_movers(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<RankedMoverResponse>>, ApiError> {
    let ranks = app.use_cases.movers.rank.execute().await?;
    Ok(Json(ranks.into_iter().map(rank_to_response).collect()))
}

// =============================================================================
// Missions
// =============================================================================

async fn list_missions(
    State(app): State<Arc<App>>,
    query: Result<Query<MissionsQuery>, QueryRejection>,
) -> Result<Json<Vec<MissionResponse>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let missions = app
        .use_cases
        .missions
        .list
        .execute(query.state.as_deref())
        .await?;
    Ok(Json(missions.iter().map(mission_to_response).collect()))
}

async fn start_mission(
    State(app): State<Arc<App>>,
    Path(mission_id): Path<String>,
) -> Result<Json<MissionResponse>, ApiError> {
    let mission_id = MissionId::from_uuid(parse_path_id(&mission_id, MISSION_NOT_FOUND)?);
    let mission = app.use_cases.missions.start.execute(mission_id).await?;
    Ok(Json(mission_to_response(&mission)))
}

async fn end_mission(
    State(app): State<Arc<App>>,
    Path(mission_id): Path<String>,
) -> Result<Json<MissionResponse>, ApiError> {
    let mission_id = MissionId::from_uuid(parse_path_id(&mission_id, MISSION_NOT_FOUND)?);
    let mission = app.use_cases.missions.end.execute(mission_id).await?;
    Ok(Json(mission_to_response(&mission)))
}

// =============================================================================
// Helpers
// =============================================================================

/// A path segment that is not a UUID cannot name any entity.
fn parse_path_id(raw: &str, not_found: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::NotFound(not_found.to_string()))
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}
