use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { id } = cmd {
        let id = DeleteLogic::validate(id.as_deref())?;

        let pool = db::open(cfg)?;
        let affected = DeleteLogic::apply(&pool, id)?;

        if affected == 0 {
            warning(format!("No work item with id {} was found.", id));
        }
        success("Work item deleted successfully.");
    }

    Ok(())
}
