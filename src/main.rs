//! worklog main entrypoint.

use clap::Parser;
use worklog::cli::parser::Cli;
use worklog::ui::messages;
use worklog::{init_logging, run};

fn main() {
    // usage errors exit 1 like every other failure; --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
    }

    if let Err(e) = run(&cli) {
        if e.is_validation() {
            messages::error(&e);
        } else {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
