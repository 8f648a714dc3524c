//! Auth-Gate fuer geschuetzte Routen
//!
//! Geschuetzte Handler rufen `angemeldeter_benutzer` als erstes auf und
//! bekommen entweder den aufgeloesten `AuthKontext` oder eine fertige
//! Fehlerantwort zurueck (Request wird kurzgeschlossen, der Handler-Rumpf
//! laeuft nicht).

use axum::{
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{error::ApiFehler, ApiState};

/// Identitaet des angemeldeten Benutzers, den Handlern durchgereicht
#[derive(Debug, Clone)]
pub struct AuthKontext {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Extrahiert Bearer-Token aus Authorization-Header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// Auth-Gate: Token extrahieren, verifizieren, Identitaet aufloesen
///
/// Fehlerfaelle (jeweils 401 mit unterscheidbarem Code):
/// - Header fehlt oder ist kein Bearer-Token
/// - Token abgelaufen bzw. Signatur/Struktur ungueltig
/// - Benutzer zum verifizierten id-Claim existiert nicht
pub async fn angemeldeter_benutzer(
    headers: &HeaderMap,
    state: &ApiState,
) -> Result<AuthKontext, Response> {
    let token = match bearer_token(headers) {
        Some(token) => token,
        None => return Err(ApiFehler::TokenFehlt.into_response()),
    };

    match state.auth.token_validieren(token).await {
        Ok(benutzer) => Ok(AuthKontext {
            id: benutzer.id,
            username: benutzer.username,
            email: benutzer.email,
        }),
        Err(e) => Err(ApiFehler::from(e).into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_extrahieren() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_static("Bearer mein_token_123"),
        );
        assert_eq!(bearer_token(&headers), Some("mein_token_123"));
    }

    #[test]
    fn bearer_token_fehlt() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn anderes_schema_wird_ignoriert() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
