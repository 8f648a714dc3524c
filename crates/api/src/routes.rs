//! Route-Definitionen fuer die REST-API (/api/...)

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, server, ApiState};

/// Erstellt den vollstaendigen API-Router
pub fn api_router() -> Router<ApiState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(handlers::auth::registrieren))
        .route("/api/auth/login", post(handlers::auth::anmelden))
        // Konten
        .route("/api/accounts/create", post(handlers::konten::konto_erstellen))
        .route("/api/accounts", get(handlers::konten::konten_auflisten))
        // Waehrungen (oeffentlich)
        .route(
            "/api/accounts/currencies",
            get(handlers::waehrungen::waehrungen_auflisten),
        )
        // Health-Check
        .route("/health", get(server::health))
        // Unbekannte Routen -> 404-Umschlag
        .fallback(handlers::nicht_gefunden)
}
