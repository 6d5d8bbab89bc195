pub mod initialize;
pub mod pool;
pub mod queries;

use crate::config::Config;
use crate::errors::AppResult;
use pool::DbPool;

/// Connect, ping, and make sure the `WorkItem` table exists.
pub fn open(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::connect(cfg)?;
    initialize::init_db(&pool.conn)?;
    Ok(pool)
}
