use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::handlers::api_error::ApiError;
use crate::handlers::submission_dtos::{ContactRequest, RegistrationRequest};
use crate::repositories::submission_repository::StoreError;
use crate::AppState;

fn stored() -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({"status": "stored"})))
}

fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::Invalid(rejection.body_text()))
}

pub async fn create_registration(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_registration = read_body(payload)?.into_new_registration(Utc::now())?;
    let source = new_registration.source.clone();

    let repository = state.submissions.clone();
    let result = tokio::task::spawn_blocking(move || repository.create_registration(&new_registration)).await?;

    match result {
        Ok(()) => {
            tracing::info!(%source, "Stored registration");
            Ok(stored())
        }
        Err(StoreError::Duplicate) => {
            tracing::info!(%source, "Registration for an existing email");
            Err(ApiError::Duplicate)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn create_contact_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let new_message = read_body(payload)?.into_new_message(Utc::now())?;

    let repository = state.submissions.clone();
    tokio::task::spawn_blocking(move || repository.create_contact_message(&new_message)).await??;

    tracing::info!("Stored contact message");
    Ok(stored())
}
