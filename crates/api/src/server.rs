//! Axum HTTP-Server fuer die Kassenwart-API

use std::net::SocketAddr;

use anyhow::Result;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{routes::api_router, ApiState};

/// REST-Server-Konfiguration
#[derive(Debug, Clone)]
pub struct RestServerKonfig {
    pub bind_addr: SocketAddr,
    /// Erlaubte CORS-Origins. Leer = alle Origins erlaubt (nur fuer Entwicklung).
    pub cors_origins: Vec<String>,
}

impl Default for RestServerKonfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            cors_origins: vec![],
        }
    }
}

/// Axum HTTP-Server fuer die Kassenwart-API
pub struct RestServer {
    konfig: RestServerKonfig,
}

impl RestServer {
    pub fn neu(konfig: RestServerKonfig) -> Self {
        Self { konfig }
    }

    /// Startet den REST-Server mit dem gegebenen State
    pub async fn starten(self, state: ApiState) -> Result<()> {
        // CORS konfigurieren: entweder spezifische Origins oder Any
        let cors = if self.konfig.cors_origins.is_empty() {
            CorsLayer::permissive()
        } else {
            let origins: Vec<HeaderValue> = self
                .konfig
                .cors_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(tower_http::cors::Any)
        };

        let app = api_router()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(self.konfig.bind_addr).await?;
        tracing::info!(addr = %self.konfig.bind_addr, "REST-Server gestartet");

        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// GET /health – Health-Check-Endpunkt
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
