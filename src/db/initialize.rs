use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const WORK_ITEM_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS WorkItem (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    workDate    DATE NOT NULL,
    startTime   TIME NOT NULL,
    endTime     TIME NOT NULL,
    description TEXT NULL
)
"#;

/// Ensure the `WorkItem` table exists. Safe to run on every invocation.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(WORK_ITEM_SCHEMA)
        .map_err(AppError::Schema)?;
    log::trace!("WorkItem table ensured");
    Ok(())
}
