//! SQLite-Implementierung des KontoRepository

use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::{KontoRecord, KontoSeite, NeuesKonto};
use crate::repository::{DbResult, KontoRepository};
use crate::sqlite::benutzer::zeitstempel_lesen;
use crate::sqlite::pool::SqliteDb;

impl KontoRepository for SqliteDb {
    async fn create(&self, data: NeuesKonto<'_>) -> DbResult<KontoRecord> {
        if data.initial_balance < Decimal::ZERO {
            return Err(DbError::UngueltigerSaldo(format!(
                "Anfangssaldo {} ist negativ",
                data.initial_balance
            )));
        }

        let id = Uuid::new_v4();
        let currency_code = data.currency_code.to_uppercase();
        let now = Utc::now();
        let now_str = now.to_rfc3339();
        let saldo_str = data.initial_balance.to_string();

        // current_balance = initial_balance im selben INSERT
        sqlx::query(
            "INSERT INTO accounts
                 (id, user_id, account_name, currency_code,
                  initial_balance, current_balance, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(data.user_id.to_string())
        .bind(data.name)
        .bind(&currency_code)
        .bind(&saldo_str)
        .bind(&saldo_str)
        .bind(&now_str)
        .bind(&now_str)
        .execute(&self.pool)
        .await?;

        Ok(KontoRecord {
            id,
            user_id: data.user_id,
            name: data.name.to_string(),
            currency_code,
            initial_balance: data.initial_balance,
            current_balance: data.initial_balance,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<KontoRecord>> {
        let row = sqlx::query(
            "SELECT id, user_id, account_name, currency_code,
                    initial_balance, current_balance, created_at, updated_at
             FROM accounts WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_konto(&r)).transpose()
    }

    async fn get_by_user(&self, user_id: Uuid) -> DbResult<Vec<KontoRecord>> {
        let rows = sqlx::query(
            "SELECT id, user_id, account_name, currency_code,
                    initial_balance, current_balance, created_at, updated_at
             FROM accounts WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_konto).collect()
    }

    async fn get_by_user_paginiert(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> DbResult<KontoSeite> {
        use sqlx::Row as _;

        let gesamt_row = sqlx::query("SELECT COUNT(*) AS gesamt FROM accounts WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await?;
        let gesamt: i64 = gesamt_row.try_get("gesamt")?;

        let rows = sqlx::query(
            "SELECT id, user_id, account_name, currency_code,
                    initial_balance, current_balance, created_at, updated_at
             FROM accounts
             WHERE user_id = ?
             ORDER BY created_at DESC
             LIMIT ? OFFSET ?",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let konten = rows.iter().map(row_to_konto).collect::<DbResult<Vec<_>>>()?;

        Ok(KontoSeite { konten, gesamt })
    }

    async fn update_balance(&self, id: Uuid, neuer_saldo: Decimal) -> DbResult<KontoRecord> {
        let now_str = Utc::now().to_rfc3339();

        let affected = sqlx::query(
            "UPDATE accounts SET current_balance = ?, updated_at = ? WHERE id = ?",
        )
        .bind(neuer_saldo.to_string())
        .bind(&now_str)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Konto {id}")));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::intern("Konto nach Update nicht gefunden"))
    }
}

fn row_to_konto(row: &sqlx::sqlite::SqliteRow) -> DbResult<KontoRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let user_id_str: String = row.try_get("user_id")?;
    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{user_id_str}': {e}")))?;

    Ok(KontoRecord {
        id,
        user_id,
        name: row.try_get("account_name")?,
        currency_code: row.try_get("currency_code")?,
        initial_balance: saldo_lesen(row, "initial_balance")?,
        current_balance: saldo_lesen(row, "current_balance")?,
        created_at: zeitstempel_lesen(row, "created_at")?,
        updated_at: zeitstempel_lesen(row, "updated_at")?,
    })
}

/// Liest einen Dezimal-Saldo aus einer TEXT-Spalte
fn saldo_lesen(row: &sqlx::sqlite::SqliteRow, spalte: &str) -> DbResult<Decimal> {
    use sqlx::Row as _;

    let wert: String = row.try_get(spalte)?;
    Decimal::from_str(&wert)
        .map_err(|e| DbError::intern(format!("Ungueltiger Saldo '{wert}' in {spalte}: {e}")))
}
