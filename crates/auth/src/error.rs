//! Fehlertypen fuer den Auth-Service

use thiserror::Error;

/// Alle moeglichen Fehler im Auth-Service
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Eingabe ---
    #[error("{0}")]
    UngueltigeEingabe(String),

    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Authentifizierung ---
    #[error("Benutzername oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    // --- Registrierung ---
    #[error("Benutzername bereits vergeben: {0}")]
    BenutzernameVergeben(String),

    #[error("E-Mail bereits registriert: {0}")]
    EmailVergeben(String),

    // --- Token ---
    #[error("Token ungueltig")]
    TokenUngueltig,

    #[error("Token abgelaufen")]
    TokenAbgelaufen,

    // --- Benutzer ---
    #[error("Benutzer nicht gefunden: {0}")]
    BenutzerNichtGefunden(String),

    // --- Datenbank ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] kassenwart_db::DbError),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

impl AuthError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }
}

/// Result-Alias fuer den Auth-Service
pub type AuthResult<T> = Result<T, AuthError>;
