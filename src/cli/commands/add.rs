use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddInput, AddLogic};
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new work item.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        start,
        end,
        description,
    } = cmd
    {
        //
        // 1. Validate flags before touching the database
        //
        let input = AddInput {
            date: date_arg.as_deref(),
            start: start.as_deref(),
            end: end.as_deref(),
            description: description.as_deref(),
        };
        let item = AddLogic::validate(input, date::today())?;

        //
        // 2. Open DB and insert
        //
        let pool = db::open(cfg)?;
        AddLogic::apply(&pool, &item)?;

        success("Work item added successfully.");
    }

    Ok(())
}
