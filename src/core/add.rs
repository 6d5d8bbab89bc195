use crate::db::pool::DbPool;
use crate::db::queries::insert_work_item;
use crate::errors::{AppError, AppResult};
use crate::models::work_item::NewWorkItem;
use crate::utils::date::resolve_date;
use crate::utils::time::parse_required_time;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

/// Raw `add` flags as they came from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddInput<'a> {
    pub date: Option<&'a str>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Blank values count as missing; a present value is returned untouched.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl AddLogic {
    /// Check that every flag is present, then parse date and times.
    ///
    /// Presence is checked first so that a command with several problems
    /// reports all missing flags at once.
    pub fn validate(input: AddInput<'_>, today: NaiveDate) -> AppResult<NewWorkItem> {
        let fields = [
            ("--date", present(input.date)),
            ("--start", present(input.start)),
            ("--end", present(input.end)),
            ("--description", present(input.description)),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| *name)
            .collect();

        let [(_, Some(date)), (_, Some(start)), (_, Some(end)), (_, Some(description))] = fields
        else {
            return Err(AppError::MissingFields(missing));
        };

        let work_date =
            resolve_date(date, today).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        Ok(NewWorkItem {
            work_date,
            start_time: parse_required_time(start)?,
            end_time: parse_required_time(end)?,
            description: description.to_string(),
        })
    }

    pub fn apply(pool: &DbPool, item: &NewWorkItem) -> AppResult<i64> {
        let id = insert_work_item(pool, item)?;
        log::debug!(
            "Inserted work item {} for {} ({}-{})",
            id,
            item.date_str(),
            item.start_str(),
            item.end_str()
        );
        Ok(id)
    }
}
