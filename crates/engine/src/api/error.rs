//! HTTP error mapping.
//!
//! Every use case error is turned into a status code plus the JSON error
//! envelope `{ "message": ... }` or `{ "validation": { field: message } }`.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use magic_movers_domain::QuestState;
use magic_movers_shared::ErrorResponse;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::items::ItemError;
use crate::use_cases::missions::MissionError;
use crate::use_cases::movers::MoverError;

pub const MOVER_NOT_FOUND: &str = "Mover doesn't exist";
pub const MISSION_NOT_FOUND: &str = "Mission doesn't exist";
const NAME_TAKEN: &str = "The name is already used.";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Validation(BTreeMap<String, String>),
    Conflict(BTreeMap<String, String>),
    Internal(String),
}

impl ApiError {
    fn name_taken() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), NAME_TAKEN.to_string());
        ApiError::Conflict(fields)
    }

    fn field(field: &str, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), message.into());
        ApiError::Validation(fields)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::message(msg))).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::message(msg))).into_response()
            }
            ApiError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(fields))).into_response()
            }
            ApiError::Conflict(fields) => {
                (StatusCode::CONFLICT, Json(ErrorResponse::validation(fields))).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::message("Internal error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<MoverError> for ApiError {
    fn from(e: MoverError) -> Self {
        match e {
            MoverError::Validation(errors) => ApiError::Validation(errors.to_field_map()),
            MoverError::NameTaken(_) => ApiError::name_taken(),
            MoverError::MoverNotFound(_) => ApiError::NotFound(MOVER_NOT_FOUND.to_string()),
            MoverError::MoverOnMission(_) => {
                ApiError::BadRequest("The mover is on another mission.".to_string())
            }
            MoverError::ItemInUse { name, .. } => {
                ApiError::field("magicItemsIds", format!("Items {name} is being used."))
            }
            MoverError::CapacityExceeded { incremental: false, .. } => {
                ApiError::BadRequest("Items weight has exceeded the mover capacity.".to_string())
            }
            MoverError::CapacityExceeded { incremental: true, .. } => ApiError::BadRequest(
                "Total items weight has exceeded the mover capacity".to_string(),
            ),
            MoverError::Domain(e) => ApiError::BadRequest(e.to_string()),
            MoverError::Repo(e) => e.into(),
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::Validation(errors) => ApiError::Validation(errors.to_field_map()),
            ItemError::NameTaken(_) => ApiError::name_taken(),
            ItemError::Repo(e) => e.into(),
        }
    }
}

impl From<MissionError> for ApiError {
    fn from(e: MissionError) -> Self {
        match e {
            err @ MissionError::UnknownStateFilter { .. } => ApiError::BadRequest(err.to_string()),
            MissionError::MissionNotFound(_) => ApiError::NotFound(MISSION_NOT_FOUND.to_string()),
            MissionError::InvalidTransition { target, .. } => {
                let message = if target == QuestState::OnMission {
                    "Mission is not in the loading state".to_string()
                } else {
                    format!("Mission is not \"{}\" state", QuestState::OnMission)
                };
                ApiError::BadRequest(message)
            }
            MissionError::MoverNotFound(_) => ApiError::NotFound(MOVER_NOT_FOUND.to_string()),
            MissionError::Domain(e) => ApiError::BadRequest(e.to_string()),
            MissionError::Repo(e) => e.into(),
        }
    }
}
