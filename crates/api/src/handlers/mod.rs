//! REST-Handler fuer die Kassenwart-API

pub mod auth;
pub mod konten;
pub mod waehrungen;

use axum::response::{IntoResponse, Response};

use crate::error::ApiFehler;

/// Fallback fuer Routen die es nicht gibt
pub async fn nicht_gefunden() -> Response {
    ApiFehler::NichtGefunden.into_response()
}
