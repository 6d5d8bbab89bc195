//! Status lines printed once a command has done its work.
//! Data output (`list`) goes through `ui::render` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

/// Build one coloured status line, icon first.
pub fn status_line<T: fmt::Display>(tone: Tone, msg: T) -> String {
    format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg)
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Tone::Warning, msg));
}

/// Errors go to stderr so they never mix with `list` output.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", status_line(Tone::Error, msg));
}
