use crate::db::pool::DbPool;
use crate::db::queries::load_all_work_items;
use crate::errors::AppResult;
use crate::ui::render::{self, ListFormat};
use std::io::Write;

pub struct ListLogic;

impl ListLogic {
    pub fn apply(pool: &DbPool, format: ListFormat, out: &mut impl Write) -> AppResult<()> {
        let items = load_all_work_items(pool)?;
        log::debug!("Loaded {} work item(s)", items.len());

        match format {
            ListFormat::Json => render::write_json(out, &items)?,
            ListFormat::Table => render::write_table(out, &items)?,
        }
        out.flush()?;
        Ok(())
    }
}
