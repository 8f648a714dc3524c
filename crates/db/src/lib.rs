//! kassenwart-db – Datenbank-Abstraktion
//!
//! Dieses Crate stellt das Repository-Pattern fuer Kassenwart bereit:
//! Benutzer, Konten und Waehrungen hinter schmalen Traits, implementiert
//! auf SQLite (sqlx). Migrationen sind im Crate eingebettet und laufen
//! beim Oeffnen des Pools.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::DbError;
pub use repository::{DbResult, KontoRepository, UserRepository, WaehrungRepository};
pub use sqlite::pool::{DatabaseConfig, SqliteDb};
