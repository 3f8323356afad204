use std::fmt;

use serde::Serialize;

use crate::locale::Language;

/// Catalog-wide identity of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of catalog item; decides which actions are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Books may go home and into the reading room
    Book,
    /// Newspapers never leave the building
    Newspaper,
    /// Discs cannot be used in the reading room
    Disc,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Self; 3] = [Self::Book, Self::Newspaper, Self::Disc];

    /// Whether items of this category may be taken home
    #[must_use]
    pub const fn can_take_home(self) -> bool {
        !matches!(self, Self::Newspaper)
    }

    /// Whether items of this category may be read in the reading room
    #[must_use]
    pub const fn can_read_in_library(self) -> bool {
        !matches!(self, Self::Disc)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Language::English.category_name(*self))
    }
}

/// Physical disc format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiscFormat {
    /// Compact disc
    Cd,
    /// DVD
    Dvd,
}

impl fmt::Display for DiscFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cd => f.write_str("CD"),
            Self::Dvd => f.write_str("DVD"),
        }
    }
}

/// Category-specific attributes of an item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A bound book
    Book {
        /// Author's name
        author: String,
        /// Number of pages
        page_count: u32,
    },
    /// A newspaper issue
    Newspaper {
        /// Issue number
        issue_number: u32,
    },
    /// An audio or video disc
    Disc {
        /// CD or DVD
        format: DiscFormat,
    },
}

impl ItemKind {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Book { .. } => Category::Book,
            Self::Newspaper { .. } => Category::Newspaper,
            Self::Disc { .. } => Category::Disc,
        }
    }
}

/// A single catalog entry
///
/// Only `available` ever changes after construction, and only through the
/// catalog's action handlers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Unique identity across the whole catalog
    id: ItemId,
    /// Display title
    title: String,
    /// Whether the item is currently on the shelf
    available: bool,
    /// Category-specific attributes
    kind: ItemKind,
}

impl Item {
    #[must_use]
    pub fn book(id: u32, title: &str, available: bool, author: &str, page_count: u32) -> Self {
        Self::new(id, title, available, ItemKind::Book { author: author.to_string(), page_count })
    }

    #[must_use]
    pub fn newspaper(id: u32, title: &str, available: bool, issue_number: u32) -> Self {
        Self::new(id, title, available, ItemKind::Newspaper { issue_number })
    }

    #[must_use]
    pub fn disc(id: u32, title: &str, available: bool, format: DiscFormat) -> Self {
        Self::new(id, title, available, ItemKind::Disc { format })
    }

    /// Shared constructor behind the per-category helpers
    fn new(id: u32, title: &str, available: bool, kind: ItemKind) -> Self {
        Self { id: ItemId(id), title: title.to_string(), available, kind }
    }

    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub const fn kind(&self) -> &ItemKind {
        &self.kind
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Flip the shelf flag; reachable only from the catalog store
    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// One-line title and availability summary used in item lists
    #[must_use]
    pub fn short_info(&self, language: Language) -> String {
        let title = &self.title;
        let answer = language.yes_no(self.available);
        match (language, &self.kind) {
            (Language::English, _) => format!("\"{title}\" available: {answer}"),
            (Language::Russian, ItemKind::Disc { .. }) => {
                format!("\"{title}\" доступен: {answer}")
            }
            (Language::Russian, _) => format!("\"{title}\" доступна: {answer}"),
        }
    }

    /// One-line dump of every attribute of the item
    #[must_use]
    pub fn detailed_info(&self, language: Language) -> String {
        let Self { id, title, available, kind } = self;
        let answer = language.yes_no(*available);
        match (language, kind) {
            (Language::English, ItemKind::Book { author, page_count }) => format!(
                "book: {title} ({page_count} pages) by {author} with id: {id} available: {answer}"
            ),
            (Language::English, ItemKind::Newspaper { issue_number }) => format!(
                "issue {issue_number} of newspaper {title} with id: {id} available: {answer}"
            ),
            (Language::English, ItemKind::Disc { format }) => {
                format!("{format} {title} with id: {id} available: {answer}")
            }
            (Language::Russian, ItemKind::Book { author, page_count }) => format!(
                "книга: {title} ({page_count} стр.) автора: {author} с id: {id} доступна: {answer}"
            ),
            (Language::Russian, ItemKind::Newspaper { issue_number }) => format!(
                "выпуск: {issue_number} газеты {title} с id: {id} доступен: {answer}"
            ),
            (Language::Russian, ItemKind::Disc { format }) => {
                format!("{format} {title} с id: {id} доступен: {answer}")
            }
        }
    }
}
