//! REST-Handler fuer die Waehrungsliste (oeffentlich)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use kassenwart_db::WaehrungRepository;

use crate::{error::ApiFehler, ApiState};

#[derive(Debug, Serialize)]
pub struct WaehrungAntwort {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

/// GET /api/accounts/currencies
pub async fn waehrungen_auflisten(State(state): State<ApiState>) -> Response {
    match WaehrungRepository::alle_aktiven(state.db.as_ref()).await {
        Ok(waehrungen) => {
            let antwort: Vec<WaehrungAntwort> = waehrungen
                .into_iter()
                .map(|w| WaehrungAntwort {
                    code: w.code,
                    name: w.name,
                    symbol: w.symbol,
                })
                .collect();
            (StatusCode::OK, Json(antwort)).into_response()
        }
        Err(e) => ApiFehler::from(e).into_response(),
    }
}
