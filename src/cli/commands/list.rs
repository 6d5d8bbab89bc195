use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { format } = cmd {
        let pool = db::open(cfg)?;
        let mut stdout = std::io::stdout().lock();
        ListLogic::apply(&pool, *format, &mut stdout)?;
    }
    Ok(())
}
