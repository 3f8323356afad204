//! Parsing of console menu input.
//!
//! Every prompt accepts a single integer on its own line. Anything that is not
//! an integer in range is an [`InvalidChoice`]; callers report it and prompt
//! again in the same state.

use thiserror::Error;

use crate::{action::Action, item::Category};

/// Input that does not name a menu entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidChoice {
    /// The line is not an integer
    #[error("{0:?} is not a number")]
    NotANumber(String),
    /// The integer is outside the menu
    #[error("{choice} is not between 0 and {max}")]
    OutOfRange { choice: i64, max: usize },
}

/// Parse a line as a menu number in `0..=max`
///
/// # Errors
///
/// Returns [`InvalidChoice`] for non-numeric or out-of-range input.
pub fn parse_choice(line: &str, max: usize) -> Result<usize, InvalidChoice> {
    let trimmed = line.trim();
    let choice: i64 =
        trimmed.parse().map_err(|_| InvalidChoice::NotANumber(trimmed.to_string()))?;
    usize::try_from(choice)
        .ok()
        .filter(|value| *value <= max)
        .ok_or(InvalidChoice::OutOfRange { choice, max })
}

/// Top-level menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice {
    /// List the items of a category
    Show(Category),
    /// Leave the program
    Exit,
}

impl CategoryChoice {
    /// # Errors
    ///
    /// Returns [`InvalidChoice`] unless the line is 0, 1, 2 or 3.
    pub fn parse(line: &str) -> Result<Self, InvalidChoice> {
        let choice = parse_choice(line, Category::ALL.len())?;
        Ok(choice
            .checked_sub(1)
            .and_then(|index| Category::ALL.get(index).copied())
            .map_or(Self::Exit, Self::Show))
    }
}

/// Item list selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemChoice {
    /// 0-based index into the displayed list
    Select(usize),
    /// Back to the category menu
    Back,
}

impl ItemChoice {
    /// Parse a 1-based item number for a list of `len` items
    ///
    /// # Errors
    ///
    /// Returns [`InvalidChoice`] unless the line is between 0 and `len`.
    pub fn parse(line: &str, len: usize) -> Result<Self, InvalidChoice> {
        let choice = parse_choice(line, len)?;
        Ok(choice.checked_sub(1).map_or(Self::Back, Self::Select))
    }
}

/// Action menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    /// Run an action on the selected item
    Perform(Action),
    /// Back to the category menu
    Back,
}

impl ActionChoice {
    /// Actions in menu order, numbered from 1
    const MENU: [Action; 4] =
        [Action::TakeHome, Action::ReadInLibrary, Action::ShowDetails, Action::Return];

    /// # Errors
    ///
    /// Returns [`InvalidChoice`] unless the line is between 0 and 4.
    pub fn parse(line: &str) -> Result<Self, InvalidChoice> {
        let choice = parse_choice(line, Self::MENU.len())?;
        Ok(choice
            .checked_sub(1)
            .and_then(|index| Self::MENU.get(index).copied())
            .map_or(Self::Back, Self::Perform))
    }
}
