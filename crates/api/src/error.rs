//! Fehlertypen der REST-API und ihre HTTP-Abbildung
//!
//! Jede Fehlervariante hat genau einen HTTP-Status und einen stabilen
//! maschinenlesbaren Code. Die Uebersetzung in den JSON-Umschlag
//! `{status, code, message}` passiert einmal zentral in `IntoResponse`;
//! interne Details von 500ern landen nur im Log, nie beim Client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use kassenwart_auth::AuthError;
use kassenwart_db::DbError;

/// Alle Fehler die die API nach aussen meldet
#[derive(Debug, Error)]
pub enum ApiFehler {
    // --- Validierung (400) ---
    #[error("{0}")]
    PflichtfelderAuth(String),

    #[error("{0}")]
    PflichtfelderKonto(String),

    #[error("Anfangssaldo muss eine nicht-negative Zahl sein")]
    UngueltigerSaldo,

    #[error("page und limit muessen positive Ganzzahlen sein")]
    UngueltigeSeitenwerte,

    // --- Konflikte (409) ---
    #[error("Benutzername bereits vergeben")]
    BenutzernameVergeben,

    #[error("E-Mail bereits registriert")]
    EmailVergeben,

    // --- Auth (401) ---
    #[error("Benutzername oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    #[error("Authorization-Header fehlt")]
    TokenFehlt,

    #[error("Token abgelaufen, bitte erneut anmelden")]
    TokenAbgelaufen,

    #[error("Ungueltiger Token, bitte erneut anmelden")]
    TokenUngueltig,

    #[error("Benutzer nicht gefunden oder Token ungueltig")]
    BenutzerNichtGefunden,

    // --- Routing (404) ---
    #[error("Endpunkt nicht gefunden")]
    NichtGefunden,

    // --- Intern (500) ---
    /// Traegt das interne Detail nur fuers Log; Display bleibt generisch
    #[error("Interner Serverfehler")]
    Intern(String),
}

impl ApiFehler {
    /// HTTP-Statuscode der Variante
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::PflichtfelderAuth(_)
            | Self::PflichtfelderKonto(_)
            | Self::UngueltigerSaldo
            | Self::UngueltigeSeitenwerte => StatusCode::BAD_REQUEST,

            Self::BenutzernameVergeben | Self::EmailVergeben => StatusCode::CONFLICT,

            Self::UngueltigeAnmeldedaten
            | Self::TokenFehlt
            | Self::TokenAbgelaufen
            | Self::TokenUngueltig
            | Self::BenutzerNichtGefunden => StatusCode::UNAUTHORIZED,

            Self::NichtGefunden => StatusCode::NOT_FOUND,

            Self::Intern(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stabiler maschinenlesbarer Fehlercode fuer Clients
    pub fn fehler_code(&self) -> &'static str {
        match self {
            Self::PflichtfelderAuth(_) => "AUTH_REQUIRED_FIELDS_MISSING",
            Self::PflichtfelderKonto(_) => "ACCOUNT_REQUIRED_FIELDS_MISSING",
            Self::UngueltigerSaldo => "ACCOUNT_INVALID_BALANCE",
            Self::UngueltigeSeitenwerte => "PAGINATION_INVALID",
            Self::BenutzernameVergeben => "AUTH_USERNAME_TAKEN",
            Self::EmailVergeben => "AUTH_EMAIL_REGISTERED",
            Self::UngueltigeAnmeldedaten => "AUTH_INVALID_CREDENTIALS",
            Self::TokenFehlt => "AUTH_TOKEN_MISSING",
            Self::TokenAbgelaufen => "AUTH_TOKEN_EXPIRED",
            Self::TokenUngueltig => "AUTH_TOKEN_INVALID",
            Self::BenutzerNichtGefunden => "AUTH_USER_NOT_FOUND",
            Self::NichtGefunden => "NOT_FOUND",
            Self::Intern(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiFehler {
    fn into_response(self) -> Response {
        if let Self::Intern(detail) = &self {
            tracing::error!(detail = %detail, "Interner Fehler in der API");
        }

        let status = self.http_status();
        (
            status,
            Json(json!({
                "status": status.as_u16(),
                "code": self.fehler_code(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiFehler {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UngueltigeEingabe(msg) => Self::PflichtfelderAuth(msg),
            AuthError::UngueltigeAnmeldedaten => Self::UngueltigeAnmeldedaten,
            AuthError::BenutzernameVergeben(_) => Self::BenutzernameVergeben,
            AuthError::EmailVergeben(_) => Self::EmailVergeben,
            AuthError::TokenUngueltig => Self::TokenUngueltig,
            AuthError::TokenAbgelaufen => Self::TokenAbgelaufen,
            AuthError::BenutzerNichtGefunden(_) => Self::BenutzerNichtGefunden,
            andere => Self::Intern(andere.to_string()),
        }
    }
}

impl From<DbError> for ApiFehler {
    fn from(e: DbError) -> Self {
        match e {
            DbError::UngueltigerSaldo(_) => Self::UngueltigerSaldo,
            andere => Self::Intern(andere.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_und_code_abbildung() {
        let faelle: Vec<(ApiFehler, StatusCode, &str)> = vec![
            (
                ApiFehler::PflichtfelderAuth("x".into()),
                StatusCode::BAD_REQUEST,
                "AUTH_REQUIRED_FIELDS_MISSING",
            ),
            (
                ApiFehler::UngueltigerSaldo,
                StatusCode::BAD_REQUEST,
                "ACCOUNT_INVALID_BALANCE",
            ),
            (
                ApiFehler::BenutzernameVergeben,
                StatusCode::CONFLICT,
                "AUTH_USERNAME_TAKEN",
            ),
            (
                ApiFehler::EmailVergeben,
                StatusCode::CONFLICT,
                "AUTH_EMAIL_REGISTERED",
            ),
            (
                ApiFehler::UngueltigeAnmeldedaten,
                StatusCode::UNAUTHORIZED,
                "AUTH_INVALID_CREDENTIALS",
            ),
            (
                ApiFehler::TokenFehlt,
                StatusCode::UNAUTHORIZED,
                "AUTH_TOKEN_MISSING",
            ),
            (
                ApiFehler::TokenAbgelaufen,
                StatusCode::UNAUTHORIZED,
                "AUTH_TOKEN_EXPIRED",
            ),
            (
                ApiFehler::NichtGefunden,
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
            ),
            (
                ApiFehler::Intern("detail".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
            ),
        ];

        for (fehler, status, code) in faelle {
            assert_eq!(fehler.http_status(), status, "{fehler:?}");
            assert_eq!(fehler.fehler_code(), code, "{fehler:?}");
        }
    }

    #[test]
    fn auth_fehler_werden_uebersetzt() {
        let konflikt: ApiFehler = AuthError::BenutzernameVergeben("x".into()).into();
        assert_eq!(konflikt.http_status(), StatusCode::CONFLICT);

        let abgelaufen: ApiFehler = AuthError::TokenAbgelaufen.into();
        assert_eq!(abgelaufen.fehler_code(), "AUTH_TOKEN_EXPIRED");

        // Unerwartete Fehler werden zu 500, Details bleiben intern
        let intern: ApiFehler = AuthError::PasswortHashing("kaputt".into()).into();
        assert_eq!(intern.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!intern.to_string().contains("kaputt"));
    }

    #[test]
    fn saldo_fehler_aus_db_wird_400() {
        let fehler: ApiFehler = DbError::UngueltigerSaldo("negativ".into()).into();
        assert_eq!(fehler.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(fehler.fehler_code(), "ACCOUNT_INVALID_BALANCE");
    }
}
