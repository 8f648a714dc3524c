//! Datenbankmodelle fuer Kassenwart
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank.
//! Sie sind von den API-Typen getrennt und dienen als reine Datenuebertragungsobjekte.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Benutzer
// ---------------------------------------------------------------------------

/// Benutzer-Datensatz aus der Datenbank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenutzerRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2id-PHC-String, niemals das Klartext-Passwort
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Benutzers
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

// ---------------------------------------------------------------------------
// Konten
// ---------------------------------------------------------------------------

/// Konto-Datensatz aus der Datenbank
///
/// Invariante: `current_balance` startet bei `initial_balance` und wird
/// ausschliesslich ueber `update_balance` veraendert; `initial_balance`
/// bleibt nach dem Anlegen unveraendert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KontoRecord {
    pub id: Uuid,
    /// ID des Benutzers dem dieses Konto gehoert
    pub user_id: Uuid,
    pub name: String,
    /// ISO-Waehrungscode, immer in Grossbuchstaben gespeichert
    pub currency_code: String,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Kontos
#[derive(Debug, Clone)]
pub struct NeuesKonto<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub currency_code: &'a str,
    pub initial_balance: Decimal,
}

/// Eine Ergebnisseite der paginierten Kontoliste
#[derive(Debug, Clone)]
pub struct KontoSeite {
    pub konten: Vec<KontoRecord>,
    /// Gesamtanzahl aller Konten des Benutzers, unabhaengig vom Fenster
    pub gesamt: i64,
}

// ---------------------------------------------------------------------------
// Waehrungen
// ---------------------------------------------------------------------------

/// Waehrungs-Datensatz (Referenzdaten, per Migration eingespielt)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaehrungRecord {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub is_active: bool,
}
