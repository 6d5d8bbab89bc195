use crate::models::work_item::DATE_FORMAT;
use chrono::NaiveDate;

/// Sentinel accepted by `--date` for the current local date.
pub const TODAY: &str = "TODAY";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse a `--date` value, resolving `TODAY` (any case) against `today`.
pub fn resolve_date(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    if s.trim().eq_ignore_ascii_case(TODAY) {
        return Some(today);
    }
    parse_date(s)
}
