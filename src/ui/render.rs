//! Output formats for `list`.

use crate::errors::AppResult;
use crate::models::work_item::{DATE_FORMAT, WorkItem};
use clap::ValueEnum;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Pretty-printed JSON array
    Json,
    /// One line per work item
    Table,
}

/// Write all items as one pretty-printed JSON array (2-space indent).
pub fn write_json(writer: &mut impl Write, items: &[WorkItem]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Write one line per item:
/// `0001 - Date: 2024-01-10  Start: 09:00  End: 17:00  Desc: wrote spec`
pub fn write_table(writer: &mut impl Write, items: &[WorkItem]) -> AppResult<()> {
    for item in items {
        writeln!(
            writer,
            "{:04} - Date: {}  Start: {}  End: {}  Desc: {}",
            item.id,
            item.work_date.format(DATE_FORMAT),
            item.start_time.format("%H:%M"),
            item.end_time.format("%H:%M"),
            item.description.as_deref().unwrap_or(""),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn item(id: i64, desc: Option<&str>) -> WorkItem {
        WorkItem {
            id,
            work_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            description: desc.map(String::from),
        }
    }

    fn table(items: &[WorkItem]) -> String {
        let mut buffer = Vec::new();
        write_table(&mut buffer, items).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn json(items: &[WorkItem]) -> String {
        let mut buffer = Vec::new();
        write_json(&mut buffer, items).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn table_line_pads_id_and_trims_seconds() {
        let out = table(&[item(1, Some("wrote spec"))]);
        assert_eq!(
            out,
            "0001 - Date: 2024-01-10  Start: 09:00  End: 17:00  Desc: wrote spec\n"
        );
    }

    #[test]
    fn table_prints_empty_description_for_null() {
        let out = table(&[item(12345, None)]);
        assert_eq!(
            out,
            "12345 - Date: 2024-01-10  Start: 09:00  End: 17:00  Desc: \n"
        );
    }

    #[test]
    fn empty_table_prints_nothing() {
        assert_eq!(table(&[]), "");
    }

    #[test]
    fn json_uses_camel_case_keys_and_two_space_indent() {
        let out = json(&[item(1, Some("wrote spec"))]);
        assert_eq!(
            out,
            r#"[
  {
    "id": 1,
    "workDate": "2024-01-10",
    "startTime": "09:00:00",
    "endTime": "17:00:00",
    "description": "wrote spec"
  }
]
"#
        );
    }

    #[test]
    fn json_for_no_items_is_empty_array() {
        assert_eq!(json(&[]), "[]\n");
    }

    #[test]
    fn json_null_description() {
        let out = json(&[item(3, None)]);
        assert!(out.contains(r#""description": null"#));
    }
}
