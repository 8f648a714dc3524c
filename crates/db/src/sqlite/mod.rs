//! SQLite-Implementierungen der Repositories

pub mod benutzer;
pub mod konten;
pub mod pool;
pub mod waehrungen;

pub use pool::SqliteDb;
