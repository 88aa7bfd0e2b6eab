//! Line-oriented user commands.

use common::{ALL_CATEGORIES, CategorySelection, SortOrder};
use query::FilterChange;

use crate::error::CommandError;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A filter state change.
    Change(FilterChange),
    /// Flip between newest-first and oldest-first.
    ToggleSort,
    NextPage,
    PreviousPage,
    /// List the categories available for filtering.
    Categories,
    /// Re-render the current page.
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>     filter by name (no text clears the search)
  category <id|all> filter by category
  sort [asc|desc]   order by founding year (no argument flips it)
  page <n>          jump to page n
  next, prev        move one page
  clear             drop search and category filters
  categories        list categories
  show              show the current page
  quit              exit";

impl Command {
    /// Parses an input line. Blank lines yield `None`.
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
            "search" | "s" => Command::Change(FilterChange::Search(rest.to_string())),
            "category" | "c" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "category",
                        expected: "a category id or 'all'",
                    });
                }
                let selection = if rest.eq_ignore_ascii_case(ALL_CATEGORIES) {
                    CategorySelection::All
                } else {
                    CategorySelection::from(rest)
                };
                Command::Change(FilterChange::Category(selection))
            }
            "sort" if rest.is_empty() => Command::ToggleSort,
            "sort" => Command::Change(FilterChange::Sort(rest.parse::<SortOrder>()?)),
            "page" | "p" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "page",
                        expected: "a page number",
                    });
                }
                let page = rest
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidPage(rest.to_string()))?;
                Command::Change(FilterChange::Page(page))
            }
            "clear" => Command::Change(FilterChange::ClearFilters),
            "next" | "n" => Command::NextPage,
            "prev" | "previous" => Command::PreviousPage,
            "categories" => Command::Categories,
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}
