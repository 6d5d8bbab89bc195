use crate::ui::render::ListFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for worklog
/// CLI application to record work items in a SQLite table
#[derive(Parser, Debug)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: add, delete and list work items",
    long_about = None
)]
pub struct Cli {
    /// Path of the JSON config file with the database settings
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// increase the verbosity
    ///
    /// This flag can be used multiple times to increase the amount of information
    /// written to stderr
    #[arg(global = true, short, long, action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// output no logging
    #[arg(global = true, short, long, action = clap::ArgAction::SetTrue, help_heading = "Logging")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new work item
    ///
    /// All four values are required. The date may be given as TODAY
    /// to use the current local date.
    Add {
        /// Work date (YYYY-MM-DD) or TODAY
        #[arg(short = 'd', long = "date", value_name = "DATE")]
        date: Option<String>,

        /// Start time (HH:MM:SS)
        #[arg(short = 's', long = "start", value_name = "TIME")]
        start: Option<String>,

        /// End time (HH:MM:SS)
        #[arg(short = 'e', long = "end", value_name = "TIME")]
        end: Option<String>,

        /// Description of the work item (may start with '-')
        #[arg(
            short = 'm',
            long = "description",
            visible_alias = "desc",
            value_name = "TEXT",
            allow_hyphen_values = true
        )]
        description: Option<String>,
    },

    /// Delete a work item by id
    Delete {
        /// Id of the work item to delete
        #[arg(short = 'i', long = "id", value_name = "ID")]
        id: Option<String>,
    },

    /// List all work items
    List {
        #[arg(short = 'f', long, value_enum, default_value = "json")]
        format: ListFormat,
    },
}
