use clap::ValueEnum;

use crate::{
    action::{Action, ActionError},
    catalog::CatalogError,
    item::{Category, ItemId},
};

/// Language used for every line the browser prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    /// English messages and seed titles
    #[default]
    #[value(name = "en")]
    English,
    /// Russian messages and seed titles
    #[value(name = "ru")]
    Russian,
}

impl Language {
    /// Binary availability word
    #[must_use]
    pub const fn yes_no(self, flag: bool) -> &'static str {
        match (self, flag) {
            (Self::English, true) => "Yes",
            (Self::English, false) => "No",
            (Self::Russian, true) => "Да",
            (Self::Russian, false) => "Нет",
        }
    }

    /// Lines of the top-level menu, heading first
    #[must_use]
    pub const fn category_menu(self) -> [&'static str; 5] {
        match self {
            Self::English => [
                "Choose an item type:",
                "1. Show books",
                "2. Show newspapers",
                "3. Show discs",
                "0. Exit",
            ],
            Self::Russian => [
                "Выберите тип объекта:",
                "1. Показать книги",
                "2. Показать газеты",
                "3. Показать диски",
                "0. Выход",
            ],
        }
    }

    /// Lines of the per-item action menu, heading first
    #[must_use]
    pub const fn action_menu(self) -> [&'static str; 6] {
        match self {
            Self::English => [
                "Choose an action:",
                "1. Take home",
                "2. Read in the reading room",
                "3. Show detailed information",
                "4. Return",
                "0. Back to item type selection",
            ],
            Self::Russian => [
                "Выберите действие:",
                "1. Взять домой",
                "2. Читать в читальном зале",
                "3. Показать подробную информацию",
                "4. Вернуть",
                "0. Вернуться к выбору типа объекта",
            ],
        }
    }

    #[must_use]
    pub const fn invalid_input(self) -> &'static str {
        match self {
            Self::English => "Invalid input, try again.",
            Self::Russian => "Неверный ввод, попробуйте снова.",
        }
    }

    #[must_use]
    pub const fn item_list_heading(self) -> &'static str {
        match self {
            Self::English => "Item list:",
            Self::Russian => "Список объектов:",
        }
    }

    #[must_use]
    pub const fn item_prompt(self) -> &'static str {
        match self {
            Self::English => "Enter the item number to select it or 0 to go back:",
            Self::Russian => "Введите номер объекта для выбора или 0 для возврата:",
        }
    }

    #[must_use]
    pub fn selected(self, short_info: &str) -> String {
        match self {
            Self::English => format!("You selected: {short_info}"),
            Self::Russian => format!("Вы выбрали: {short_info}"),
        }
    }

    #[must_use]
    pub const fn details_heading(self) -> &'static str {
        match self {
            Self::English => "Detailed information:",
            Self::Russian => "Подробная информация:",
        }
    }

    #[must_use]
    pub const fn history_heading(self) -> &'static str {
        match self {
            Self::English => "Session history:",
            Self::Russian => "История сеанса:",
        }
    }

    #[must_use]
    pub const fn history_empty(self) -> &'static str {
        match self {
            Self::English => "No availability changes were made.",
            Self::Russian => "Доступность объектов не менялась.",
        }
    }

    /// Category name as used in success messages
    #[must_use]
    pub const fn category_name(self, category: Category) -> &'static str {
        match (self, category) {
            (Self::English, Category::Book) => "Book",
            (Self::English, Category::Newspaper) => "Newspaper",
            (Self::English, Category::Disc) => "Disc",
            (Self::Russian, Category::Book) => "Книга",
            (Self::Russian, Category::Newspaper) => "Газета",
            (Self::Russian, Category::Disc) => "Диск",
        }
    }

    /// Plural category name opening a restriction message
    #[must_use]
    pub const fn category_plural(self, category: Category) -> &'static str {
        match (self, category) {
            (Self::English, Category::Book) => "Books",
            (Self::English, Category::Newspaper) => "Newspapers",
            (Self::English, Category::Disc) => "Discs",
            (Self::Russian, Category::Book) => "Книги",
            (Self::Russian, Category::Newspaper) => "Газеты",
            (Self::Russian, Category::Disc) => "Диски",
        }
    }

    /// Short action name used in the history listing
    #[must_use]
    pub const fn action_name(self, action: Action) -> &'static str {
        match (self, action) {
            (Self::English, Action::TakeHome) => "take home",
            (Self::English, Action::ReadInLibrary) => "read in the reading room",
            (Self::English, Action::ShowDetails) => "show details",
            (Self::English, Action::Return) => "return",
            (Self::Russian, Action::TakeHome) => "взять домой",
            (Self::Russian, Action::ReadInLibrary) => "читать в читальном зале",
            (Self::Russian, Action::ShowDetails) => "показать подробности",
            (Self::Russian, Action::Return) => "вернуть",
        }
    }

    /// Confirmation printed after an action changed an item's availability
    ///
    /// Returns `None` for actions that never change availability.
    #[must_use]
    pub fn action_succeeded(
        self,
        action: Action,
        category: Category,
        id: ItemId,
        title: &str,
    ) -> Option<String> {
        let name = self.category_name(category);
        let verb = match (self, action) {
            (_, Action::ShowDetails) => return None,
            (Self::English, Action::TakeHome) => "was taken home.",
            (Self::English, Action::ReadInLibrary) => "was taken to the reading room.",
            (Self::English, Action::Return) => "was returned.",
            (Self::Russian, Action::TakeHome) => "взяли домой.",
            (Self::Russian, Action::ReadInLibrary) => "взяли в читальный зал.",
            (Self::Russian, Action::Return) => "вернули.",
        };
        Some(format!("{name} {id} \"{title}\" {verb}"))
    }

    /// User-facing text for a rejected action
    #[must_use]
    pub fn action_rejected(self, error: &ActionError) -> String {
        match self {
            Self::English => error.to_string(),
            Self::Russian => match error {
                ActionError::CategoryRestricted { category, action: Action::ReadInLibrary } => {
                    format!("{} нельзя читать в читальном зале.", self.category_plural(*category))
                }
                ActionError::CategoryRestricted { category, .. } => {
                    format!("{} нельзя брать домой.", self.category_plural(*category))
                }
                ActionError::Unavailable { action: Action::ReadInLibrary, title } => {
                    format!("{title} недоступен(а) для чтения в читальном зале.")
                }
                ActionError::Unavailable { title, .. } => {
                    format!("{title} недоступен(а) для взятия домой.")
                }
                ActionError::AlreadyAvailable { title } => format!("{title} уже доступен(а)."),
                ActionError::Catalog(CatalogError::NoSuchItem { category, index }) => format!(
                    "Объект {index} не найден в разделе \"{}\".",
                    self.category_name(*category)
                ),
            },
        }
    }
}
