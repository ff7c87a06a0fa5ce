//! JSON-over-HTTP surface for the entity collections

pub mod routes;

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::core::data::Record;
use crate::core::store::EntityStore;
use crate::storage::file::JsonFileBackend;

/// The file-backed store every route adapter works against.
pub type RecordStore = EntityStore<JsonFileBackend<Record>>;

/// Full application router: liveness banner, the two entity collections,
/// permissive CORS for the admin dashboard.
pub fn build_router(direksi: Arc<RecordStore>, divisi: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/direksi", routes::entity_routes(direksi))
        .nest("/api/divisi", routes::entity_routes(divisi))
        .layer(CorsLayer::permissive())
}

async fn root() -> impl IntoResponse {
    "Struktur Perusahaan API is running!"
}

pub async fn serve(router: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
