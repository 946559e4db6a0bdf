//! Line commands accepted by the interactive shell.

use thiserror::Error;

use crate::export::ExportFormat;

pub const HELP_TEXT: &str = "\
Commands:
  revenue <amount>      set revenue
  cost <amount>         set cost of goods sold
  calculate             compute gross profit and margin
  show                  show the current fields and result
  export [markdown|csv] write a report for the current result
  email <address>       send the current result by email
  reset                 restore the sample values and clear the result
  guide                 explain gross profit margin and how to improve it
  help                  show this help
  quit                  leave the calculator";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Revenue(String),
    Cost(String),
    Calculate,
    Show,
    Export(Option<ExportFormat>),
    Email(String),
    Reset,
    Guide,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error("unknown export format '{0}' (expected markdown or csv)")]
    UnknownFormat(String),
}

impl Command {
    /// Parses one input line. Returns `Ok(None)` for a blank line.
    ///
    /// The argument of `revenue` and `cost` is passed through untouched so
    /// the validator sees exactly what was typed, including an empty value.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "revenue" | "r" => Self::Revenue(rest.to_string()),
            "cost" | "cogs" | "c" => Self::Cost(rest.to_string()),
            "calculate" | "calc" => Self::Calculate,
            "show" => Self::Show,
            "export" => {
                if rest.is_empty() {
                    Self::Export(None)
                } else {
                    let format = ExportFormat::parse(rest)
                        .ok_or_else(|| CommandError::UnknownFormat(rest.to_string()))?;
                    Self::Export(Some(format))
                }
            }
            "email" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("email"));
                }
                Self::Email(rest.to_string())
            }
            "reset" => Self::Reset,
            "guide" | "learn" => Self::Guide,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}
