use std::{
    fmt::{self, Write as _},
    io::IsTerminal,
};

use colored::Colorize;

use crate::error::AppendError;

/// Prefix of every diagnostic the logger prints about its own failures.
pub const FALLBACK_PREFIX: &str = "logger:";

/// Reports a failed record on stderr. Never panics, never touches the log file.
pub fn report_failure(error: &AppendError) {
    eprint!("{}", fallback_line(error, std::io::stderr().is_terminal()));
}

/// One diagnostic line, the prefix is only colored when stderr is a terminal.
fn fallback_line(error: &AppendError, color: bool) -> String {
    if color {
        format!("{} {error}\n", FALLBACK_PREFIX.red())
    } else {
        format!("{FALLBACK_PREFIX} {error}\n")
    }
}

/// Renders `message` without panicking when one of its `Display` impls fails.
pub fn render(message: &dyn fmt::Display) -> Result<String, AppendError> {
    let mut rendered = String::new();
    rendered
        .write_fmt(format_args!("{message}"))
        .map_err(AppendError::Format)?;
    Ok(rendered)
}

/// Displays a list of values separated by `", "`, without a trailing separator.
pub struct Joined<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
