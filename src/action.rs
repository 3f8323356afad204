use serde::Serialize;
use thiserror::Error;

use crate::{
    catalog::CatalogError,
    item::{Category, Item},
    locale::Language,
};

/// Operations a patron can request on a selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    /// Borrow the item outside the library
    TakeHome,
    /// Use the item in the reading room
    ReadInLibrary,
    /// Print every attribute of the item
    ShowDetails,
    /// Put the item back on the shelf
    Return,
}

/// Reasons an action is refused; none of them change the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The item's category never permits this action
    #[error("{}", restriction_text(.category, .action))]
    CategoryRestricted { category: Category, action: Action },
    /// The item is already off the shelf
    #[error("{title} is unavailable {}.", unavailable_purpose(.action))]
    Unavailable { action: Action, title: String },
    /// Returning an item that is on the shelf
    #[error("{title} is already available.")]
    AlreadyAvailable { title: String },
    /// The key does not address a catalog item
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// English wording for a category restriction
///
/// Only taking home and reading in the library are ever restricted.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn restriction_text(category: &Category, action: &Action) -> String {
    let plural = Language::English.category_plural(*category);
    match action {
        Action::ReadInLibrary => format!("{plural} cannot be read in the reading room."),
        _ => format!("{plural} cannot be taken home."),
    }
}

/// Purpose clause for an unavailable item
#[allow(clippy::trivially_copy_pass_by_ref)]
fn unavailable_purpose(action: &Action) -> &'static str {
    match action {
        Action::ReadInLibrary => "for the reading room",
        _ => "to take home",
    }
}

impl Action {
    /// Whether the item's category allows this action at all
    #[must_use]
    pub const fn permits(self, category: Category) -> bool {
        match self {
            Self::TakeHome => category.can_take_home(),
            Self::ReadInLibrary => category.can_read_in_library(),
            Self::ShowDetails | Self::Return => true,
        }
    }

    /// Decide the availability this action leaves the item in
    ///
    /// The category restriction is checked before availability, so a newspaper
    /// that is already off the shelf still reports the newspaper rule.
    /// `Ok(None)` means the action only reads the item.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] when the category forbids the action or the
    /// item is in the wrong availability state for it.
    pub fn resolve(self, item: &Item) -> Result<Option<bool>, ActionError> {
        let category = item.category();
        if !self.permits(category) {
            return Err(ActionError::CategoryRestricted { category, action: self });
        }

        match self {
            Self::ShowDetails => Ok(None),
            Self::TakeHome | Self::ReadInLibrary if item.is_available() => Ok(Some(false)),
            Self::TakeHome | Self::ReadInLibrary => {
                Err(ActionError::Unavailable { action: self, title: item.title().to_string() })
            }
            Self::Return if item.is_available() => {
                Err(ActionError::AlreadyAvailable { title: item.title().to_string() })
            }
            Self::Return => Ok(Some(true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::DiscFormat;

    #[test]
    fn test_restriction_wins_over_availability() {
        let newspaper = Item::newspaper(4, "Izvestia", false, 1234);
        let result = Action::TakeHome.resolve(&newspaper);
        assert_eq!(
            result,
            Err(ActionError::CategoryRestricted {
                category: Category::Newspaper,
                action: Action::TakeHome
            })
        );
        assert_eq!(
            result.err().map(|e| e.to_string()).as_deref(),
            Some("Newspapers cannot be taken home.")
        );
    }

    #[test]
    fn test_disc_reading_room_rejected() {
        let disc = Item::disc(5, "The Dark Side of the Moon", true, DiscFormat::Cd);
        let err = Action::ReadInLibrary.resolve(&disc).err();
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("Discs cannot be read in the reading room.")
        );
    }

    #[test]
    fn test_unavailable_messages() {
        let book = Item::book(2, "1984", false, "George Orwell", 328);
        let take = Action::TakeHome.resolve(&book).err().map(|e| e.to_string());
        assert_eq!(take.as_deref(), Some("1984 is unavailable to take home."));
        let read = Action::ReadInLibrary.resolve(&book).err().map(|e| e.to_string());
        assert_eq!(read.as_deref(), Some("1984 is unavailable for the reading room."));
    }

    #[test]
    fn test_return_and_details() {
        let disc = Item::disc(6, "Thriller", false, DiscFormat::Dvd);
        assert_eq!(Action::Return.resolve(&disc), Ok(Some(true)));
        assert_eq!(Action::ShowDetails.resolve(&disc), Ok(None));

        let shelved = Item::disc(5, "The Dark Side of the Moon", true, DiscFormat::Cd);
        assert_eq!(
            Action::Return.resolve(&shelved),
            Err(ActionError::AlreadyAvailable { title: "The Dark Side of the Moon".to_string() })
        );
    }
}
