use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::work_item::{DATE_FORMAT, NewWorkItem, WorkItem};
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Result, Row};

/// Insert a work item and return the id the store assigned to it.
pub fn insert_work_item(pool: &DbPool, item: &NewWorkItem) -> AppResult<i64> {
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO WorkItem (workDate, startTime, endTime, description)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        item.date_str(),
        item.start_str(),
        item.end_str(),
        item.description,
    ])?;

    Ok(pool.conn.last_insert_rowid())
}

/// Delete the work item with the given id.
///
/// Returns the number of rows removed; an unknown id removes nothing and is
/// not an error.
pub fn delete_work_item(pool: &DbPool, id: i64) -> AppResult<usize> {
    let affected = pool
        .conn
        .execute("DELETE FROM WorkItem WHERE id = ?1", [id])?;
    Ok(affected)
}

/// Load every work item, in whatever order the store returns them.
pub fn load_all_work_items(pool: &DbPool) -> AppResult<Vec<WorkItem>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, workDate, startTime, endTime, description FROM WorkItem")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<WorkItem> {
    let date_str: String = row.get("workDate")?;
    let start_str: String = row.get("startTime")?;
    let end_str: String = row.get("endTime")?;

    let work_date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_time = parse_time(&start_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(start_str.clone())),
        )
    })?;

    let end_time = parse_time(&end_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(end_str.clone())),
        )
    })?;

    Ok(WorkItem {
        id: row.get("id")?,
        work_date,
        start_time,
        end_time,
        description: row.get("description")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::pool::IN_MEMORY;
    use chrono::NaiveTime;

    fn pool() -> DbPool {
        let pool = DbPool::open(IN_MEMORY).unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn item(date: &str, start: &str, end: &str, desc: &str) -> NewWorkItem {
        NewWorkItem {
            work_date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
            start_time: parse_time(start).unwrap(),
            end_time: parse_time(end).unwrap(),
            description: desc.to_string(),
        }
    }

    #[test]
    fn insert_then_load_returns_the_item() {
        let pool = pool();
        let id = insert_work_item(&pool, &item("2024-01-10", "09:00:00", "17:00:00", "wrote spec"))
            .unwrap();

        let items = load_all_work_items(&pool).unwrap();
        assert_eq!(
            items,
            vec![WorkItem {
                id,
                work_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                description: Some("wrote spec".into()),
            }]
        );
    }

    #[test]
    fn ids_increase_with_each_insert() {
        let pool = pool();
        let first = insert_work_item(&pool, &item("2024-01-10", "09:00", "10:00", "a")).unwrap();
        let second = insert_work_item(&pool, &item("2024-01-10", "10:00", "11:00", "b")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let pool = pool();
        let first = insert_work_item(&pool, &item("2024-01-10", "09:00", "10:00", "a")).unwrap();
        delete_work_item(&pool, first).unwrap();
        let second = insert_work_item(&pool, &item("2024-01-11", "09:00", "10:00", "b")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn delete_removes_only_the_matching_item() {
        let pool = pool();
        let keep = insert_work_item(&pool, &item("2024-01-10", "09:00", "10:00", "keep")).unwrap();
        let gone = insert_work_item(&pool, &item("2024-01-10", "10:00", "11:00", "drop")).unwrap();

        assert_eq!(delete_work_item(&pool, gone).unwrap(), 1);

        let ids: Vec<i64> = load_all_work_items(&pool)
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn delete_of_unknown_id_succeeds_without_changes() {
        let pool = pool();
        insert_work_item(&pool, &item("2024-01-10", "09:00", "10:00", "keep")).unwrap();

        assert_eq!(delete_work_item(&pool, 999).unwrap(), 0);
        assert_eq!(load_all_work_items(&pool).unwrap().len(), 1);
    }

    #[test]
    fn end_before_start_is_stored_as_given() {
        let pool = pool();
        insert_work_item(&pool, &item("2024-01-10", "17:00", "09:00", "night")).unwrap();
        let items = load_all_work_items(&pool).unwrap();
        assert!(items[0].end_time < items[0].start_time);
    }

    #[test]
    fn null_description_loads_as_none() {
        let pool = pool();
        pool.conn
            .execute(
                "INSERT INTO WorkItem (workDate, startTime, endTime) VALUES ('2024-02-01', '08:00:00', '09:30:00')",
                [],
            )
            .unwrap();
        let items = load_all_work_items(&pool).unwrap();
        assert_eq!(items[0].description, None);
    }

    #[test]
    fn unparsable_stored_date_fails_the_whole_load() {
        let pool = pool();
        pool.conn
            .execute(
                "INSERT INTO WorkItem (workDate, startTime, endTime, description) VALUES ('yesterday', '08:00:00', '09:00:00', 'x')",
                [],
            )
            .unwrap();
        assert!(matches!(load_all_work_items(&pool), Err(AppError::Db(_))));
    }

    #[test]
    fn empty_table_loads_nothing() {
        assert!(load_all_work_items(&pool()).unwrap().is_empty());
    }
}
