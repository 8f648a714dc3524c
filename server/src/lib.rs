//! kassenwart-server – Bibliotheks-Root
//!
//! Deklariert die Server-Module und verdrahtet Datenbank, Auth-Service
//! und REST-API zu einem lauffaehigen Server.

pub mod config;

use std::sync::Arc;

use anyhow::Result;

use kassenwart_api::{server::RestServerKonfig, ApiState, RestServer};
use kassenwart_auth::{AuthService, TokenDienst};
use kassenwart_db::{DatabaseConfig, SqliteDb};

use config::ServerConfig;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Startet alle Server-Subsysteme
    ///
    /// Reihenfolge:
    /// 1. Datenbankpool oeffnen, Migrationen ausfuehren
    /// 2. TokenDienst und AuthService konstruieren
    /// 3. REST-API binden und bedienen
    pub async fn starten(self) -> Result<()> {
        tracing::info!(
            adresse = %self.config.rest_bind_adresse(),
            datenbank = %self.config.datenbank.url,
            "Server startet"
        );

        if self.config.auth.token_geheimnis == config::ENTWICKLUNGS_GEHEIMNIS {
            tracing::warn!(
                "token_geheimnis ist das Entwicklungs-Geheimnis; fuer den Betrieb ersetzen"
            );
        }

        let db = Arc::new(
            SqliteDb::oeffnen(&DatabaseConfig {
                url: self.config.datenbank.url.clone(),
                max_verbindungen: self.config.datenbank.max_verbindungen,
                sqlite_wal: self.config.datenbank.wal,
            })
            .await?,
        );

        let token_dienst = Arc::new(TokenDienst::neu(
            &self.config.auth.token_geheimnis,
            self.config.auth.token_gueltigkeit_sekunden,
        ));
        let auth = Arc::new(AuthService::neu(Arc::clone(&db), token_dienst));

        let state = ApiState::neu(auth, db);

        let rest = RestServer::neu(RestServerKonfig {
            bind_addr: self.config.rest_bind_adresse().parse()?,
            cors_origins: self.config.server.cors_origins.clone(),
        });

        rest.starten(state).await
    }
}
