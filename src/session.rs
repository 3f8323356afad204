use std::io::{self, BufRead, Write};

use colored::Colorize;
use thiserror::Error;

use crate::{
    action::Action,
    catalog::{Catalog, ItemKey},
    item::Category,
    locale::Language,
    menu::{ActionChoice, CategoryChoice, InvalidChoice, ItemChoice},
};

/// Console presentation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Language for menus and messages
    pub language: Language,
    /// Whether headings, errors and confirmations are colored
    pub color: bool,
}

/// Where the interaction currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Top-level menu
    #[default]
    CategorySelect,
    /// Waiting for an item number from a category's list
    ItemSelect(Category),
    /// Waiting for an action on the selected item
    ActionSelect(ItemKey),
    /// Exit was requested or input ended
    Terminated,
}

/// Failures that end a session abnormally
#[derive(Debug, Error)]
pub enum SessionError {
    /// The console could not be written to
    #[error("failed to write to the console")]
    Output(#[from] io::Error),
}

/// Kind of line being printed, for coloring
#[derive(Debug, Clone, Copy)]
enum Tone {
    /// Menu headings
    Heading,
    /// Rejections and invalid input
    Error,
    /// Successful availability changes
    Success,
}

/// Interactive catalog browser driven by line-oriented input
#[derive(Debug)]
pub struct Session<R, W> {
    /// The catalog being browsed
    catalog: Catalog,
    /// Source of menu input
    input: R,
    /// Transcript sink
    output: W,
    /// Presentation settings
    config: SessionConfig,
    /// Current state
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    #[must_use]
    pub fn new(catalog: Catalog, input: R, output: W, config: SessionConfig) -> Self {
        Self { catalog, input, output, config, state: SessionState::default() }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Hand back the catalog and the output sink
    #[must_use]
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.output)
    }

    /// Step until the session terminates
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Output`] if writing to the output fails.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while self.state != SessionState::Terminated {
            self.step()?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Prompt once, read one line and move to the next state
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Output`] if writing to the output fails.
    pub fn step(&mut self) -> Result<SessionState, SessionError> {
        let next = match self.state {
            SessionState::CategorySelect => self.select_category()?,
            SessionState::ItemSelect(category) => self.select_item(category)?,
            SessionState::ActionSelect(key) => self.select_action(key)?,
            SessionState::Terminated => SessionState::Terminated,
        };
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "session state changed");
        }
        self.state = next;
        Ok(next)
    }

    /// Top-level menu
    fn select_category(&mut self) -> Result<SessionState, SessionError> {
        let [heading, options @ ..] = self.config.language.category_menu();
        self.say(heading, Some(Tone::Heading))?;
        for option in options {
            self.say(option, None)?;
        }

        let Some(line) = self.read_line() else {
            return Ok(SessionState::Terminated);
        };
        match CategoryChoice::parse(&line) {
            Ok(CategoryChoice::Exit) => Ok(SessionState::Terminated),
            Ok(CategoryChoice::Show(category)) => {
                self.show_items(category)?;
                Ok(SessionState::ItemSelect(category))
            }
            Err(err) => self.reject_input(&err, self.state),
        }
    }

    /// Numbered short-info listing of a category
    fn show_items(&mut self, category: Category) -> Result<(), SessionError> {
        let language = self.config.language;
        let lines: Vec<String> = self
            .catalog
            .list(category)
            .iter()
            .zip(1_usize..)
            .map(|(item, number)| format!("{number}. {}", item.short_info(language)))
            .collect();

        self.say(language.item_list_heading(), Some(Tone::Heading))?;
        for line in &lines {
            self.say(line, None)?;
        }
        Ok(())
    }

    /// Item number prompt
    fn select_item(&mut self, category: Category) -> Result<SessionState, SessionError> {
        let language = self.config.language;
        self.say(language.item_prompt(), None)?;

        let Some(line) = self.read_line() else {
            return Ok(SessionState::Terminated);
        };
        match ItemChoice::parse(&line, self.catalog.list(category).len()) {
            Ok(ItemChoice::Back) => Ok(SessionState::CategorySelect),
            Ok(ItemChoice::Select(index)) => {
                let key = ItemKey::new(category, index);
                let selected =
                    self.catalog.get(key).map(|item| language.selected(&item.short_info(language)));
                match selected {
                    Ok(selected) => {
                        self.say(&selected, None)?;
                        Ok(SessionState::ActionSelect(key))
                    }
                    // Not reachable while `ItemChoice::parse` bounds the number by the list length
                    Err(err) => {
                        tracing::debug!(%err, "selected item vanished from its list");
                        self.say(language.invalid_input(), Some(Tone::Error))?;
                        Ok(self.state)
                    }
                }
            }
            Err(err) => self.reject_input(&err, self.state),
        }
    }

    /// Action menu for the selected item
    fn select_action(&mut self, key: ItemKey) -> Result<SessionState, SessionError> {
        let [heading, options @ ..] = self.config.language.action_menu();
        self.say(heading, Some(Tone::Heading))?;
        for option in options {
            self.say(option, None)?;
        }

        let Some(line) = self.read_line() else {
            return Ok(SessionState::Terminated);
        };
        match ActionChoice::parse(&line) {
            // The action menu leads straight back to the category menu, not the item list
            Ok(ActionChoice::Back) => Ok(SessionState::CategorySelect),
            Ok(ActionChoice::Perform(action)) => {
                self.perform(key, action)?;
                Ok(self.state)
            }
            Err(err) => self.reject_input(&err, self.state),
        }
    }

    /// Run an action and print its outcome
    fn perform(&mut self, key: ItemKey, action: Action) -> Result<(), SessionError> {
        let language = self.config.language;
        let outcome = self.catalog.perform(key, action).map(|item| match action {
            Action::ShowDetails => item.detailed_info(language),
            _ => language
                .action_succeeded(action, item.category(), item.id(), item.title())
                .unwrap_or_default(),
        });
        let (text, tone) = match outcome {
            Ok(details) if action == Action::ShowDetails => {
                self.say(language.details_heading(), Some(Tone::Heading))?;
                (details, None)
            }
            Ok(message) => (message, Some(Tone::Success)),
            Err(err) => {
                tracing::debug!(%err, ?action, ?key, "action rejected");
                (language.action_rejected(&err), Some(Tone::Error))
            }
        };
        self.say(&text, tone)
    }

    /// Report unusable input and stay in `state`
    fn reject_input(
        &mut self,
        err: &InvalidChoice,
        state: SessionState,
    ) -> Result<SessionState, SessionError> {
        tracing::debug!(%err, ?state, "invalid menu input");
        self.say(self.config.language.invalid_input(), Some(Tone::Error))?;
        Ok(state)
    }

    /// Next input line, or `None` once input is exhausted or unreadable
    ///
    /// Bytes that are not UTF-8 are kept as replacement characters so the line
    /// is rejected by the menu parser instead of ending the session.
    fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                tracing::debug!("end of input");
                None
            }
            Ok(_) => Some(String::from_utf8_lossy(&buf).into_owned()),
            Err(err) => {
                tracing::debug!(%err, "input unreadable, ending session");
                None
            }
        }
    }

    /// Print one line
    fn say(&mut self, text: &str, tone: Option<Tone>) -> Result<(), SessionError> {
        match tone.filter(|_| self.config.color) {
            None => writeln!(self.output, "{text}")?,
            Some(Tone::Heading) => writeln!(self.output, "{}", text.bold())?,
            Some(Tone::Error) => writeln!(self.output, "{}", text.red())?,
            Some(Tone::Success) => writeln!(self.output, "{}", text.green())?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
