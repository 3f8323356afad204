use std::{collections::VecDeque, fmt::Write as _};

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    action::Action,
    item::{Category, Item, ItemId},
    locale::Language,
};

/// How the session history is printed on exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryFormat {
    /// One numbered line per change
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// One availability change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    /// 1-based position of the change within the session
    pub sequence: u64,
    /// Item that changed
    pub item_id: ItemId,
    /// Title at the time of the change
    pub title: String,
    /// Category of the item
    pub category: Category,
    /// Action that caused the change
    pub action: Action,
    /// Availability before the action
    pub available_before: bool,
    /// Availability after the action
    pub available_after: bool,
}

/// Bounded log of availability changes, oldest first
#[derive(Debug, Clone)]
pub struct History {
    /// Retained records
    records: VecDeque<ActionRecord>,
    /// Maximum number of records to keep
    max_len: usize,
    /// Sequence number handed to the next record
    next_sequence: u64,
}

impl History {
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self { records: VecDeque::with_capacity(max_len), max_len, next_sequence: 1 }
    }

    /// Append a change; `item` is the state after the action
    pub fn record(&mut self, item: &Item, action: Action, available_before: bool) {
        if self.max_len == 0 {
            return;
        }
        if self.records.len() >= self.max_len {
            self.records.pop_front();
        }

        self.records.push_back(ActionRecord {
            sequence: self.next_sequence,
            item_id: item.id(),
            title: item.title().to_string(),
            category: item.category(),
            action,
            available_before,
            available_after: item.is_available(),
        });
        self.next_sequence = self.next_sequence.saturating_add(1);
    }

    pub fn records(&self) -> impl Iterator<Item = &ActionRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the history for printing
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if JSON serialization fails.
    pub fn render(
        &self,
        format: HistoryFormat,
        language: Language,
    ) -> Result<String, serde_json::Error> {
        match format {
            HistoryFormat::Json => serde_json::to_string_pretty(&self.records),
            HistoryFormat::Text => Ok(self.render_text(language)),
        }
    }

    /// Numbered text listing, one change per line
    fn render_text(&self, language: Language) -> String {
        let mut out = String::from(language.history_heading());
        if self.records.is_empty() {
            out.push('\n');
            out.push_str(language.history_empty());
            return out;
        }
        for record in &self.records {
            let before = language.yes_no(record.available_before);
            let after = language.yes_no(record.available_after);
            // Writing to a String cannot fail
            drop(write!(
                out,
                "\n{}. {} {} \"{}\" --({})--> {before} -> {after}",
                record.sequence,
                language.category_name(record.category),
                record.item_id,
                record.title,
                language.action_name(record.action),
            ));
        }
        out
    }
}
