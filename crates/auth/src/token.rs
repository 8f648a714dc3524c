//! Signierte Identitaets-Tokens fuer Kassenwart
//!
//! Implementiert zeitlich begrenzte, HS256-signierte Tokens mit den
//! minimalen Identitaets-Claims (id, username, email). Tokens sind ohne
//! Datenbankzugriff verifizierbar; Geheimnis und Gueltigkeitsdauer kommen
//! einmalig aus der Konfiguration und sind danach unveraenderlich.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Standard-Gueltigkeit eines Tokens: 1 Stunde
pub const STANDARD_GUELTIGKEIT_SEKUNDEN: i64 = 60 * 60;

/// Die Identitaets-Claims die in einem Token stecken
///
/// Muss exakt durch Ausstellen und Verifizieren durchgereicht werden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenNutzlast {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Interne Claim-Struktur auf dem Draht
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    username: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// TokenDienst – stellt Tokens aus und verifiziert sie
///
/// Haelt die aus dem Server-Geheimnis abgeleiteten Schluessel.
pub struct TokenDienst {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    gueltigkeit_sekunden: i64,
}

impl TokenDienst {
    /// Erstellt einen neuen TokenDienst aus Geheimnis und Gueltigkeitsdauer
    pub fn neu(geheimnis: &str, gueltigkeit_sekunden: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(geheimnis.as_bytes()),
            decoding_key: DecodingKey::from_secret(geheimnis.as_bytes()),
            gueltigkeit_sekunden,
        }
    }

    /// Stellt einen signierten Token mit eingebettetem Ablaufzeitpunkt aus
    pub fn ausstellen(&self, nutzlast: &TokenNutzlast) -> AuthResult<String> {
        let jetzt = Utc::now().timestamp();
        let claims = Claims {
            sub: nutzlast.id,
            username: nutzlast.username.clone(),
            email: nutzlast.email.clone(),
            iat: jetzt,
            exp: jetzt + self.gueltigkeit_sekunden,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::intern(format!("Token-Ausstellung fehlgeschlagen: {e}")))
    }

    /// Verifiziert Signatur und Ablauf eines Tokens
    ///
    /// Gibt `AuthError::TokenAbgelaufen` zurueck wenn der Ablaufzeitpunkt
    /// ueberschritten ist, `AuthError::TokenUngueltig` bei kaputter
    /// Signatur oder Struktur.
    pub fn verifizieren(&self, token: &str) -> AuthResult<TokenNutzlast> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Keine Toleranz beim Ablauf
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(daten) => Ok(TokenNutzlast {
                id: daten.claims.sub,
                username: daten.claims.username,
                email: daten.claims.email,
            }),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(AuthError::TokenAbgelaufen),
                _ => Err(AuthError::TokenUngueltig),
            },
        }
    }
}
