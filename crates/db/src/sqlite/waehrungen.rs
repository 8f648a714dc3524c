//! SQLite-Implementierung des WaehrungRepository

use crate::models::WaehrungRecord;
use crate::repository::{DbResult, WaehrungRepository};
use crate::sqlite::pool::SqliteDb;

impl WaehrungRepository for SqliteDb {
    async fn alle_aktiven(&self) -> DbResult<Vec<WaehrungRecord>> {
        use sqlx::Row as _;

        let rows = sqlx::query(
            "SELECT code, name, symbol, is_active
             FROM currencies WHERE is_active = 1 ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let is_active: i64 = row.try_get("is_active")?;
                Ok(WaehrungRecord {
                    code: row.try_get("code")?,
                    name: row.try_get("name")?,
                    symbol: row.try_get("symbol")?,
                    is_active: is_active != 0,
                })
            })
            .collect()
    }
}
