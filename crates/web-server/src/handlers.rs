use crate::{
    AppState,
    error::AppError,
    extract::{ApiJson, ApiQuery, NotePath},
};
use axum::{Json, extract::State};
use core_types::{NewNote, Note, NotePage, note::validate_note_id, text::reverse_doubled};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct EchoQuery {
    pub parameter: String,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "Output")]
    pub output: String,
}

/// # GET /api/healthchecker
/// Confirms the storage backend answers a trivial query.
pub async fn health_checker(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    state
        .notes
        .ping()
        .await
        .map_err(AppError::StorageUnavailable)?;
    Ok(Json(json!({ "message": "Welcome to FastAPI!" })))
}

/// # POST /api/healthcheck?parameter=...
pub async fn health_check_echo(
    ApiQuery(query): ApiQuery<EchoQuery>,
) -> Json<EchoResponse> {
    let output = reverse_doubled(&query.parameter);
    Json(EchoResponse {
        input: query.parameter,
        output,
    })
}

/// # GET /api/note/new
pub async fn read_new_notes() -> Json<Value> {
    Json(json!({ "message": "Return new notes" }))
}

/// # GET /api/notes
/// The page window is validated before storage is touched.
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    ApiQuery(page): ApiQuery<NotePage>,
) -> Result<Json<Vec<Note>>, AppError> {
    page.validate()?;
    let notes = state.notes.list_notes(page).await?;
    Ok(Json(notes))
}

/// # GET /api/notes/:note_id
pub async fn get_note(
    NotePath { note_id }: NotePath,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Note>, AppError> {
    let note_id = validate_note_id(note_id)?;
    let note = state
        .notes
        .find_note(note_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;
    Ok(Json(note))
}

/// # POST /notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    ApiJson(new_note): ApiJson<NewNote>,
) -> Result<Json<Note>, AppError> {
    new_note.validate()?;
    let note = state.notes.create_note(&new_note).await?;
    tracing::info!(note_id = note.id, "Created note.");
    Ok(Json(note))
}

/// Catch-all for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
