use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Date format of the `workDate` column and of `--date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format of the `startTime` / `endTime` columns.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// One recorded span of work, as stored in the `WorkItem` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: i64,                     // ⇔ WorkItem.id (assigned by SQLite)
    pub work_date: NaiveDate,        // ⇔ WorkItem.workDate (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime,       // ⇔ WorkItem.startTime (TEXT "HH:MM:SS")
    pub end_time: NaiveTime,         // ⇔ WorkItem.endTime (TEXT "HH:MM:SS")
    pub description: Option<String>, // ⇔ WorkItem.description (nullable)
}

/// The user-supplied part of a work item, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkItem {
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
}

impl NewWorkItem {
    pub fn date_str(&self) -> String {
        self.work_date.format(DATE_FORMAT).to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format(TIME_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format(TIME_FORMAT).to_string()
    }
}
