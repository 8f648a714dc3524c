//! REST-Handler fuer Registrierung und Login

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kassenwart_db::models::BenutzerRecord;

use crate::{error::ApiFehler, ApiState};

#[derive(Debug, Deserialize)]
pub struct RegistrierenBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AnmeldenBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Erfolgsantwort fuer Registrierung und Login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthAntwort {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub access_token: String,
}

impl AuthAntwort {
    fn neu(benutzer: BenutzerRecord, token: String) -> Self {
        Self {
            id: benutzer.id,
            username: benutzer.username,
            email: benutzer.email,
            access_token: token,
        }
    }
}

/// POST /api/auth/register
pub async fn registrieren(
    State(state): State<ApiState>,
    Json(body): Json<RegistrierenBody>,
) -> Response {
    match state
        .auth
        .registrieren(&body.username, &body.email, &body.password)
        .await
    {
        Ok((benutzer, token)) => {
            (StatusCode::OK, Json(AuthAntwort::neu(benutzer, token))).into_response()
        }
        Err(e) => ApiFehler::from(e).into_response(),
    }
}

/// POST /api/auth/login
pub async fn anmelden(State(state): State<ApiState>, Json(body): Json<AnmeldenBody>) -> Response {
    match state.auth.anmelden(&body.username, &body.password).await {
        Ok((benutzer, token)) => {
            (StatusCode::OK, Json(AuthAntwort::neu(benutzer, token))).into_response()
        }
        Err(e) => ApiFehler::from(e).into_response(),
    }
}
