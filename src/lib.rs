//! Console browser for a small library catalog.
//!
//! The catalog holds books, newspapers and discs. A [`Session`] walks the user
//! through category, item and action menus, and the [`Catalog`] applies the
//! borrowing rules of each category to the selected item.

pub mod action;
pub mod catalog;
pub mod history;
pub mod item;
pub mod locale;
pub mod menu;
pub mod observers;
pub mod session;

pub use action::{Action, ActionError};
pub use catalog::{Catalog, CatalogError, ItemKey};
pub use history::{ActionRecord, History, HistoryFormat};
pub use item::{Category, DiscFormat, Item, ItemId, ItemKind};
pub use locale::Language;
pub use observers::{ActionObserver, TracingObserver};
pub use session::{Session, SessionConfig, SessionError, SessionState};
