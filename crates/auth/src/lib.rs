//! kassenwart-auth – Authentifizierung fuer Kassenwart
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id
//! - TokenDienst (signierte, zeitlich begrenzte Identitaets-Tokens)
//! - AuthService (Registrierung, Login, Token-Aufloesung)

pub mod error;
pub mod password;
pub mod service;
pub mod token;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult};
pub use password::{passwort_hashen, passwort_verifizieren};
pub use service::AuthService;
pub use token::{TokenDienst, TokenNutzlast};
