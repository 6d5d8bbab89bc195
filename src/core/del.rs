use crate::db::pool::DbPool;
use crate::db::queries::delete_work_item;
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Turn the raw `--id` flag into a work item id.
    pub fn validate(id: Option<&str>) -> AppResult<i64> {
        let raw = id.map(str::trim).filter(|v| !v.is_empty());
        let raw = raw.ok_or(AppError::MissingId)?;
        raw.parse::<i64>()
            .map_err(|_| AppError::InvalidId(raw.to_string()))
    }

    /// Delete by id and return how many rows were removed (0 or 1).
    pub fn apply(pool: &DbPool, id: i64) -> AppResult<usize> {
        let affected = delete_work_item(pool, id)?;
        log::debug!("DELETE for work item {} affected {} row(s)", id, affected);
        Ok(affected)
    }
}
