//! Parsing of interactive session commands.
//!
//! This module provides [`CommandParser`] which turns one line of user input into
//! a [`Command`]: either a navigation [`Event`] or a session control command.
//!
//! # Supported Commands
//! - **select / s** `<col> <n>`: pick item `n` in column `col` (wide)
//! - **open / o** `<n>`: pick item `n` in the active column (wide) or row `n` (compact)
//! - **toggle / t** `<n>`: expand, collapse or open row `n` (compact)
//! - **crumb / c** `<n>`: jump to breadcrumb `n`, `0` being the root
//! - **back / b**: go up one level
//! - **search / `/`** `<text>`: filter the visible level
//! - **clear**: drop the search filter
//! - **related / r** `<n>`: open related product `n`
//! - **layout** `<wide|compact>`: switch layout
//! - **help / ?**, **quit / q / exit**
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::core::error::{CatalogNavigatorError, Result};
use crate::core::session::{Event, Layout};

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(Event),
    Help,
    Quit,
}

/// Usage lines shown by `help` and in argument errors
pub const COMMAND_USAGE: &[(&str, &str)] = &[
    ("select <col> <n>", "Select item n in column col (wide layout)"),
    ("open <n>", "Open item n in the active column, or row n (compact layout)"),
    ("toggle <n>", "Expand/collapse row n, or open it if it is a product"),
    ("crumb <n>", "Jump to breadcrumb n (0 = Products)"),
    ("back", "Go up one level"),
    ("search <text>", "Filter the visible level by name"),
    ("clear", "Clear the search filter"),
    ("related <n>", "Open related product n"),
    ("layout <wide|compact>", "Switch layout"),
    ("help", "Show this help"),
    ("quit", "End the session"),
];

pub struct CommandParser;

impl CommandParser {
    /// Parse a line. Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        // "/text" is shorthand for "search text"
        if let Some(query) = line.strip_prefix('/') {
            return Ok(Some(Command::Navigate(Event::Search(
                query.trim().to_string(),
            ))));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match word.to_ascii_lowercase().as_str() {
            "select" | "s" => {
                let [column, item] = Self::numbers::<2>("select", "select <col> <n>", &args)?;
                Command::Navigate(Event::Select { column, item })
            }
            "open" | "o" => {
                let [item] = Self::numbers::<1>("open", "open <n>", &args)?;
                Command::Navigate(Event::Open { item })
            }
            "toggle" | "t" => {
                let [row] = Self::numbers::<1>("toggle", "toggle <n>", &args)?;
                Command::Navigate(Event::Toggle { row })
            }
            "crumb" | "c" => {
                let [crumb] = Self::numbers::<1>("crumb", "crumb <n>", &args)?;
                Command::Navigate(Event::Breadcrumb { crumb })
            }
            "related" | "r" => {
                let [item] = Self::numbers::<1>("related", "related <n>", &args)?;
                Command::Navigate(Event::Related { item })
            }
            "back" | "b" => Command::Navigate(Event::Back),
            "search" => {
                if rest.is_empty() {
                    return Err(CatalogNavigatorError::missing_argument(
                        "search",
                        "search <text>",
                    ));
                }
                Command::Navigate(Event::Search(rest.to_string()))
            }
            "clear" => Command::Navigate(Event::ClearSearch),
            "layout" => {
                let layout = args.first().ok_or_else(|| {
                    CatalogNavigatorError::missing_argument("layout", "layout <wide|compact>")
                })?;
                Command::Navigate(Event::SwitchLayout(layout.parse::<Layout>()?))
            }
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CatalogNavigatorError::unknown_command(word)),
        };

        log::debug!("Parsed '{line}' as {command:?}");
        Ok(Some(command))
    }

    /// Parse exactly `N` leading numeric arguments
    fn numbers<const N: usize>(command: &str, usage: &str, args: &[&str]) -> Result<[usize; N]> {
        if args.len() < N {
            return Err(CatalogNavigatorError::missing_argument(command, usage));
        }
        let mut values = [0usize; N];
        for (value, arg) in values.iter_mut().zip(args) {
            *value = arg
                .parse()
                .map_err(|_| CatalogNavigatorError::invalid_number(*arg))?;
        }
        Ok(values)
    }
}
