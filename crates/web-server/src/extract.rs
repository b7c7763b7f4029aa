//! Extractors whose rejections flow through [`AppError`], so malformed input
//! gets the same JSON envelope as every other failure.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

/// `axum::Json`, rejected as a validation error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query`, rejected as a validation error.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, Deserialize, TypedPath)]
#[typed_path("/api/notes/:note_id", rejection(AppError))]
pub struct NotePath {
    pub note_id: i32,
}

#[derive(Debug, Deserialize, TypedPath)]
#[typed_path("/items/:item_id", rejection(AppError))]
pub struct ItemPath {
    pub item_id: i64,
}

/// The older single-item echo route.
#[derive(Debug, Deserialize, TypedPath)]
#[typed_path("/item/:item_id", rejection(AppError))]
pub struct ItemEchoPath {
    pub item_id: i64,
}
