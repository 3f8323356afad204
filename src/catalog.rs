use std::fmt;

use thiserror::Error;

use crate::{
    action::{Action, ActionError},
    history::History,
    item::{Category, DiscFormat, Item},
    locale::Language,
    observers::ActionObserver,
};

/// Number of availability changes the catalog remembers
pub const MAX_HISTORY_SIZE: usize = 100;

/// Address of an item inside the catalog: its category list and 0-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey {
    /// List the item lives in
    pub category: Category,
    /// 0-based position within that list
    pub index: usize,
}

impl ItemKey {
    #[must_use]
    pub const fn new(category: Category, index: usize) -> Self {
        Self { category, index }
    }
}

/// Lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The key points past the end of its category list
    #[error("no item at position {index} among {category} items")]
    NoSuchItem { category: Category, index: usize },
}

/// The three fixed category lists
#[derive(Debug, Clone, Default)]
struct Shelves {
    /// Books in display order
    books: Vec<Item>,
    /// Newspapers in display order
    newspapers: Vec<Item>,
    /// Discs in display order
    discs: Vec<Item>,
}

impl Shelves {
    /// List for a category
    fn list(&self, category: Category) -> &[Item] {
        match category {
            Category::Book => &self.books,
            Category::Newspaper => &self.newspapers,
            Category::Disc => &self.discs,
        }
    }

    /// The only mutable path to an item
    fn item_mut(&mut self, key: ItemKey) -> Result<&mut Item, CatalogError> {
        let list = match key.category {
            Category::Book => &mut self.books,
            Category::Newspaper => &mut self.newspapers,
            Category::Disc => &mut self.discs,
        };
        list.get_mut(key.index)
            .ok_or(CatalogError::NoSuchItem { category: key.category, index: key.index })
    }
}

/// In-memory library catalog
///
/// Owns every item for the lifetime of the process. Items are addressed by
/// [`ItemKey`]; the only mutation is the availability flag, changed through
/// [`Catalog::perform`].
pub struct Catalog {
    /// Category lists
    shelves: Shelves,
    /// Record of availability changes
    history: History,
    /// Registered availability change observers
    observers: Vec<Box<dyn ActionObserver>>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("shelves", &self.shelves)
            .field("history", &self.history)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Catalog {
    /// Build the startup catalog: two books, two newspapers and two discs
    #[must_use]
    pub fn seeded(language: Language) -> Self {
        let (books, newspapers) = match language {
            Language::English => (
                vec![
                    Item::book(1, "War and Peace", true, "Leo Tolstoy", 1225),
                    Item::book(2, "1984", true, "George Orwell", 328),
                ],
                vec![
                    Item::newspaper(3, "Komsomolskaya Pravda", true, 794),
                    Item::newspaper(4, "Izvestia", false, 1234),
                ],
            ),
            Language::Russian => (
                vec![
                    Item::book(1, "Война и мир", true, "Лев Толстой", 1225),
                    Item::book(2, "1984", true, "Джордж Оруэлл", 328),
                ],
                vec![
                    Item::newspaper(3, "Комсомольская правда", true, 794),
                    Item::newspaper(4, "Известия", false, 1234),
                ],
            ),
        };
        let discs = vec![
            Item::disc(5, "The Dark Side of the Moon", true, DiscFormat::Cd),
            Item::disc(6, "Thriller", false, DiscFormat::Dvd),
        ];

        Self {
            shelves: Shelves { books, newspapers, discs },
            history: History::new(MAX_HISTORY_SIZE),
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of availability changes
    pub fn register_observer(&mut self, observer: Box<dyn ActionObserver>) {
        self.observers.push(observer);
    }

    /// Items of one category in display order
    #[must_use]
    pub fn list(&self, category: Category) -> &[Item] {
        self.shelves.list(category)
    }

    /// Every item, books first, then newspapers, then discs
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        Category::ALL.into_iter().flat_map(move |category| self.list(category))
    }

    /// Look up a single item
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoSuchItem`] if the key is past the end of its list.
    pub fn get(&self, key: ItemKey) -> Result<&Item, CatalogError> {
        self.list(key.category)
            .get(key.index)
            .ok_or(CatalogError::NoSuchItem { category: key.category, index: key.index })
    }

    /// Run an action against an item
    ///
    /// On success returns the item as it is after the action. A refused action
    /// leaves the catalog untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the key is unknown, the category forbids
    /// the action, or the item's availability does not allow it.
    pub fn perform(&mut self, key: ItemKey, action: Action) -> Result<&Item, ActionError> {
        let item = self.shelves.item_mut(key)?;
        if let Some(available) = action.resolve(item)? {
            let before = item.is_available();
            item.set_available(available);
            self.history.record(item, action, before);
            for observer in &self.observers {
                observer.on_availability_change(item, action);
            }
        }
        self.get(key).map_err(ActionError::from)
    }

    /// Availability changes made so far
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }
}
