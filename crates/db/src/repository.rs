//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Datenbank-Implementierung. Abwesenheit eines Datensatzes ist kein Fehler,
//! sondern `None`.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::{BenutzerRecord, KontoRecord, KontoSeite, NeuerBenutzer, NeuesKonto, WaehrungRecord};

/// Result-Alias fuer alle Repository-Operationen
pub type DbResult<T> = Result<T, DbError>;

/// Repository fuer Benutzer-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait UserRepository: Send + Sync {
    /// Legt einen neuen Benutzer an und gibt den vollstaendigen Datensatz zurueck.
    ///
    /// Eindeutigkeitsverletzungen (username/email) kommen als
    /// `DbError::Eindeutigkeit` mit der betroffenen Spalte zurueck.
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord>;

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<BenutzerRecord>>;

    async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>>;

    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>>;
}

/// Repository fuer Konto-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait KontoRepository: Send + Sync {
    /// Legt ein neues Konto an.
    ///
    /// Der Waehrungscode wird vor dem Speichern in Grossbuchstaben
    /// normalisiert. Ein negativer Anfangssaldo wird mit
    /// `DbError::UngueltigerSaldo` abgelehnt. `current_balance` wird im
    /// selben INSERT auf `initial_balance` gesetzt.
    async fn create(&self, data: NeuesKonto<'_>) -> DbResult<KontoRecord>;

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<KontoRecord>>;

    /// Alle Konten eines Benutzers, ohne Paginierung
    async fn get_by_user(&self, user_id: Uuid) -> DbResult<Vec<KontoRecord>>;

    /// Konten eines Benutzers als Fenster, neueste zuerst.
    ///
    /// `gesamt` zaehlt alle Konten des Benutzers unabhaengig von
    /// limit/offset. Die Validierung von limit/offset (positive Werte)
    /// ist Sache des Aufrufers.
    async fn get_by_user_paginiert(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> DbResult<KontoSeite>;

    /// Ueberschreibt `current_balance` und aktualisiert `updated_at`.
    /// `initial_balance` bleibt unangetastet; Bereichspruefungen
    /// (z.B. Ueberziehung) macht der Aufrufer.
    async fn update_balance(&self, id: Uuid, neuer_saldo: Decimal) -> DbResult<KontoRecord>;
}

/// Repository fuer Waehrungs-Referenzdaten
#[allow(async_fn_in_trait)]
pub trait WaehrungRepository: Send + Sync {
    /// Alle aktiven Waehrungen, sortiert nach Code
    async fn alle_aktiven(&self) -> DbResult<Vec<WaehrungRecord>>;
}
