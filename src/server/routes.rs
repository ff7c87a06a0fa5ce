//! Entity route adapters
//!
//! One uniform CRUD surface per entity collection. The adapter validates
//! nothing beyond what the store contract demands; it translates requests
//! into store calls and store errors into status codes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::core::data::{RecordDraft, RecordPatch};
use crate::server::RecordStore;
use crate::utils::error::AppError;

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize, Default)]
struct CreateBody {
    #[serde(default)]
    nama: Option<String>,
}

/// CRUD routes for one entity collection, mounted under `/api/<entity>`.
pub fn entity_routes(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route(
            "/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
        .with_state(store)
}

async fn list_records(State(store): State<Arc<RecordStore>>) -> Response {
    match store.list() {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_record(State(store): State<Arc<RecordStore>>, Path(id): Path<i64>) -> Response {
    match store.get(id) {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => error_response(AppError::not_found(store.label())),
        Err(err) => error_response(err),
    }
}

async fn create_record(
    State(store): State<Arc<RecordStore>>,
    Json(body): Json<CreateBody>,
) -> Response {
    let draft = RecordDraft {
        nama: body.nama.unwrap_or_default(),
    };
    match store.create(draft) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_record(
    State(store): State<Arc<RecordStore>>,
    Path(id): Path<i64>,
    Json(patch): Json<RecordPatch>,
) -> Response {
    match store.update(id, patch) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_record(State(store): State<Arc<RecordStore>>, Path(id): Path<i64>) -> Response {
    match store.delete(id) {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageBody {
                message: format!("{} deleted", store.label()),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AppError) -> Response {
    let status = match &err {
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Storage(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(MessageBody {
            message: err.to_string(),
        }),
    )
        .into_response()
}
