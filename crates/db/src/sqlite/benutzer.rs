//! SQLite-Implementierung des UserRepository

use chrono::Utc;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::{BenutzerRecord, NeuerBenutzer};
use crate::repository::{DbResult, UserRepository};
use crate::sqlite::pool::SqliteDb;

impl UserRepository for SqliteDb {
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        sqlx::query(
            "INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id_str)
        .bind(data.username)
        .bind(data.email)
        .bind(data.password_hash)
        .bind(&now_str)
        .bind(&now_str)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("users.email") {
                DbError::Eindeutigkeit {
                    spalte: "email".into(),
                    wert: data.email.to_string(),
                }
            } else if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit {
                    spalte: "username".into(),
                    wert: data.username.to_string(),
                }
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(BenutzerRecord {
            id,
            username: data.username.to_string(),
            email: data.email.to_string(),
            password_hash: data.password_hash.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at, updated_at
             FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at, updated_at
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at, updated_at
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }
}

fn row_to_benutzer(row: &sqlx::sqlite::SqliteRow) -> DbResult<BenutzerRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    Ok(BenutzerRecord {
        id,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: zeitstempel_lesen(row, "created_at")?,
        updated_at: zeitstempel_lesen(row, "updated_at")?,
    })
}

/// Liest einen RFC3339-Zeitstempel aus einer TEXT-Spalte
pub(crate) fn zeitstempel_lesen(
    row: &sqlx::sqlite::SqliteRow,
    spalte: &str,
) -> DbResult<chrono::DateTime<Utc>> {
    use sqlx::Row as _;

    let wert: String = row.try_get(spalte)?;
    chrono::DateTime::parse_from_rfc3339(&wert)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::intern(format!("Ungueltiger Zeitstempel '{wert}' in {spalte}: {e}")))
}
