//! kassenwart-api – REST-Schnittstelle
//!
//! Axum-basierte HTTP-API: Auth-Endpunkte, Konten, Waehrungen.
//! Alle Fehler verlassen die API als `{status, code, message}`-Umschlag
//! mit stabilen, maschinenlesbaren Codes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use kassenwart_auth::AuthService;
use kassenwart_db::SqliteDb;

/// Axum-State fuer die REST-API
#[derive(Clone)]
pub struct ApiState {
    pub auth: Arc<AuthService<SqliteDb>>,
    pub db: Arc<SqliteDb>,
}

impl ApiState {
    pub fn neu(auth: Arc<AuthService<SqliteDb>>, db: Arc<SqliteDb>) -> Self {
        Self { auth, db }
    }
}

pub use server::RestServer;
