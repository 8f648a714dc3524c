//! REST-Handler fuer Konto-Endpunkte

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kassenwart_db::{
    models::{KontoRecord, NeuesKonto},
    KontoRepository,
};

use crate::{error::ApiFehler, middleware::angemeldeter_benutzer, ApiState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KontoErstellenBody {
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub currency_code: String,
    /// Roher JSON-Wert: fehlend vs. falsch getypt wird unterschiedlich gemeldet
    #[serde(default)]
    pub initial_balance: Option<serde_json::Value>,
}

/// Erfolgsantwort fuer die Konto-Erstellung
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KontoAntwort {
    pub id: Uuid,
    pub account_name: String,
    pub currency_code: String,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
}

/// POST /api/accounts/create
pub async fn konto_erstellen(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<KontoErstellenBody>,
) -> Response {
    let kontext = match angemeldeter_benutzer(&headers, &state).await {
        Ok(kontext) => kontext,
        Err(antwort) => return antwort,
    };

    let initial_balance = match body.initial_balance {
        None | Some(serde_json::Value::Null) => return pflichtfelder_fehlen(),
        // Nur JSON-Zahlen sind ein gueltiger Saldo
        Some(serde_json::Value::Number(zahl)) => match Decimal::from_str(&zahl.to_string()) {
            Ok(saldo) => saldo,
            Err(_) => return ApiFehler::UngueltigerSaldo.into_response(),
        },
        Some(_) => return ApiFehler::UngueltigerSaldo.into_response(),
    };
    if body.account_name.trim().is_empty() || body.currency_code.trim().is_empty() {
        return pflichtfelder_fehlen();
    }
    if initial_balance < Decimal::ZERO {
        return ApiFehler::UngueltigerSaldo.into_response();
    }

    match KontoRepository::create(
        state.db.as_ref(),
        NeuesKonto {
            user_id: kontext.id,
            name: &body.account_name,
            currency_code: &body.currency_code,
            initial_balance,
        },
    )
    .await
    {
        Ok(konto) => (
            StatusCode::CREATED,
            Json(KontoAntwort {
                id: konto.id,
                account_name: konto.name,
                currency_code: konto.currency_code,
                initial_balance: konto.initial_balance,
                current_balance: konto.current_balance,
            }),
        )
            .into_response(),
        Err(e) => ApiFehler::from(e).into_response(),
    }
}

fn pflichtfelder_fehlen() -> Response {
    ApiFehler::PflichtfelderKonto(
        "Kontoname, Waehrungscode und Anfangssaldo sind erforderlich".into(),
    )
    .into_response()
}

#[derive(Debug, Deserialize)]
pub struct SeitenQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Ein Konto in der paginierten Liste
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KontoEintrag {
    pub id: Uuid,
    pub account_name: String,
    pub currency_code: String,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<KontoRecord> for KontoEintrag {
    fn from(konto: KontoRecord) -> Self {
        Self {
            id: konto.id,
            account_name: konto.name,
            currency_code: konto.currency_code,
            initial_balance: konto.initial_balance,
            current_balance: konto.current_balance,
            created_at: konto.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeitenAntwort {
    pub items: Vec<KontoEintrag>,
    pub current_page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

/// GET /api/accounts?page=&limit=
pub async fn konten_auflisten(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(query): Query<SeitenQuery>,
) -> Response {
    let kontext = match angemeldeter_benutzer(&headers, &state).await {
        Ok(kontext) => kontext,
        Err(antwort) => return antwort,
    };

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);
    if page < 1 || limit < 1 {
        return ApiFehler::UngueltigeSeitenwerte.into_response();
    }
    let offset = (page - 1) * limit;

    match KontoRepository::get_by_user_paginiert(state.db.as_ref(), kontext.id, limit, offset).await
    {
        Ok(seite) => {
            let antwort = SeitenAntwort {
                items: seite.konten.into_iter().map(KontoEintrag::from).collect(),
                current_page: page,
                page_size: limit,
                total_pages: seiten_anzahl(seite.gesamt, limit),
                total_items: seite.gesamt,
            };
            (StatusCode::OK, Json(antwort)).into_response()
        }
        Err(e) => ApiFehler::from(e).into_response(),
    }
}

/// Gesamtzahl der Seiten: aufgerundete Division
fn seiten_anzahl(gesamt: i64, limit: i64) -> i64 {
    (gesamt + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seiten_anzahl_rundet_auf() {
        assert_eq!(seiten_anzahl(0, 10), 0);
        assert_eq!(seiten_anzahl(1, 10), 1);
        assert_eq!(seiten_anzahl(10, 10), 1);
        assert_eq!(seiten_anzahl(11, 10), 2);
        assert_eq!(seiten_anzahl(15, 10), 2);
        assert_eq!(seiten_anzahl(20, 10), 2);
        assert_eq!(seiten_anzahl(21, 10), 3);
    }
}
