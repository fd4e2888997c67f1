//! HTTP API for the castway gateway.
//!
//! Four routes: the demo item list, audio fetch, script generation, and
//! script listing. CORS-permissive so the web frontend can call from
//! another origin.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::info;

use castway_core::script_files::audio_filename;
use castway_core::types::{Item, ScriptEntry};

use crate::downstream::DownstreamClient;
use crate::error::GatewayError;
use crate::items::ItemStore;
use crate::names::NameStore;
use crate::scripts;

/// Shared handler state, injected at router construction.
#[derive(Clone)]
pub struct AppState {
    pub names: Arc<NameStore>,
    pub items: Arc<ItemStore>,
    pub downstream: Arc<DownstreamClient>,
    pub data_dir: PathBuf,
}

/// Build the axum router with a shared [`AppState`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/audio", post(get_audio))
        .route("/api/generate_script", post(generate_script))
        .route("/api/scripts", post(list_scripts))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ─── Items ─────────────────────────────────────────────────────────────────

async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.list())
}

async fn create_item(State(state): State<AppState>, Json(item): Json<Item>) -> Json<Item> {
    state.items.append(item.clone());
    Json(item)
}

// ─── Audio ─────────────────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct AudioRequest {
    user_id: String,
    podcast_id: String,
    #[serde(default)]
    podcast_name: Option<String>,
}

async fn get_audio(
    State(state): State<AppState>,
    Json(req): Json<AudioRequest>,
) -> Result<Response, GatewayError> {
    info!("audio requested for podcast '{}'", req.podcast_id);

    // An inline name wins; otherwise the identifier must be in the name
    // store. The TTS service is never called with an empty name.
    let podcast_name = match req.podcast_name.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => state
            .names
            .lookup(&req.podcast_id)
            .await?
            .ok_or_else(|| GatewayError::NameNotFound(req.podcast_id.clone()))?,
    };

    let dest = state
        .data_dir
        .join(&req.user_id)
        .join("audio")
        .join(audio_filename(&req.podcast_id));

    let artifact = state
        .downstream
        .fetch_audio(&req.user_id, &req.podcast_id, &podcast_name, &dest)
        .await?;

    info!(
        "audio for '{podcast_name}' saved to {} ({} bytes)",
        artifact.path.display(),
        artifact.bytes
    );

    let bytes = tokio::fs::read(&artifact.path).await.map_err(|e| {
        GatewayError::AudioWrite(format!("read back {}: {e}", artifact.path.display()))
    })?;
    let content_type = artifact
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

// ─── Script generation ─────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct GenerateScriptRequest {
    user_id: String,
    subject: String,
    #[serde(default)]
    podcast_name: Option<String>,
}

#[derive(serde::Serialize)]
struct GenerateScriptResponse {
    script_id: String,
    podcast_name: String,
}

async fn generate_script(
    State(state): State<AppState>,
    Json(req): Json<GenerateScriptRequest>,
) -> Result<Json<GenerateScriptResponse>, GatewayError> {
    info!("script requested for subject '{}'", req.subject);

    // Display name defaults to the subject.
    let podcast_name = match req.podcast_name.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => req.subject.clone(),
    };

    let script_id = state
        .downstream
        .request_script(&req.user_id, &req.subject)
        .await?;
    state.names.upsert(&script_id, &podcast_name).await?;

    info!("script '{script_id}' recorded as '{podcast_name}'");
    Ok(Json(GenerateScriptResponse {
        script_id,
        podcast_name,
    }))
}

// ─── Script listing ────────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ScriptsRequest {
    user_id: String,
}

async fn list_scripts(
    State(state): State<AppState>,
    Json(req): Json<ScriptsRequest>,
) -> Result<Json<Vec<ScriptEntry>>, GatewayError> {
    let entries = scripts::list_for_user(&state.data_dir, &req.user_id, &state.names).await?;
    Ok(Json(entries))
}
