use std::io::{self, BufReader, Read, Write};

use crate::{
    catalog::{Catalog, ItemKey},
    item::Category,
    locale::Language,
    session::{Session, SessionConfig, SessionError, SessionState},
};

/// Plain English settings so transcripts carry no escape codes
const PLAIN: SessionConfig = SessionConfig { language: Language::English, color: false };

/// Helper to run a scripted session to completion and capture its transcript
fn run_script(script: &str, config: SessionConfig) -> (Catalog, String) {
    run_raw_script(script.as_bytes(), config)
}

/// Same as [`run_script`] for input that need not be UTF-8
fn run_raw_script(script: &[u8], config: SessionConfig) -> (Catalog, String) {
    let mut session = Session::new(Catalog::seeded(config.language), script, Vec::new(), config);
    let result = session.run();
    assert!(result.is_ok());
    assert_eq!(session.state(), SessionState::Terminated);

    let (catalog, output) = session.into_parts();
    (catalog, String::from_utf8(output).unwrap_or_default())
}

/// Availability of the item at `key`
fn is_available(catalog: &Catalog, key: ItemKey) -> Option<bool> {
    catalog.get(key).ok().map(crate::item::Item::is_available)
}

#[test]
fn test_exit_immediately() {
    let (catalog, transcript) = run_script("0\n", PLAIN);
    assert_eq!(
        transcript,
        "Choose an item type:\n1. Show books\n2. Show newspapers\n3. Show discs\n0. Exit\n"
    );
    assert!(catalog.history().is_empty());
}

#[test]
fn test_take_home_book_twice() {
    let (catalog, transcript) = run_script("1\n2\n1\n1\n0\n0\n", PLAIN);

    assert!(transcript.contains(
        "Item list:\n1. \"War and Peace\" available: Yes\n2. \"1984\" available: Yes\n"
    ));
    assert!(transcript.contains("You selected: \"1984\" available: Yes\n"));
    assert!(transcript.contains("Book 2 \"1984\" was taken home.\n"));
    assert!(transcript.contains("1984 is unavailable to take home.\n"));
    assert_eq!(is_available(&catalog, ItemKey::new(Category::Book, 1)), Some(false));
    assert_eq!(catalog.history().len(), 1);
}

#[test]
fn test_newspaper_rule_beats_availability() {
    let (catalog, transcript) = run_script("2\n2\n1\n0\n0\n", PLAIN);

    assert!(transcript.contains("You selected: \"Izvestia\" available: No\n"));
    assert!(transcript.contains("Newspapers cannot be taken home.\n"));
    assert!(!transcript.contains("unavailable"));
    assert_eq!(is_available(&catalog, ItemKey::new(Category::Newspaper, 1)), Some(false));
}

#[test]
fn test_return_disc_twice() {
    let (catalog, transcript) = run_script("3\n2\n4\n4\n0\n0\n", PLAIN);

    assert!(transcript.contains("Disc 6 \"Thriller\" was returned.\n"));
    assert!(transcript.contains("Thriller is already available.\n"));
    assert_eq!(is_available(&catalog, ItemKey::new(Category::Disc, 1)), Some(true));
    assert_eq!(catalog.history().len(), 1);
}

#[test]
fn test_disc_cannot_be_read_in_library() {
    let (catalog, transcript) = run_script("3\n1\n2\n0\n0\n", PLAIN);

    assert!(transcript.contains("Discs cannot be read in the reading room.\n"));
    assert_eq!(is_available(&catalog, ItemKey::new(Category::Disc, 0)), Some(true));
}

#[test]
fn test_show_details() {
    let (_, transcript) = run_script("1\n1\n3\n0\n0\n", PLAIN);
    assert!(transcript.contains(
        "Detailed information:\n\
         book: War and Peace (1225 pages) by Leo Tolstoy with id: 1 available: Yes\n"
    ));
}

#[test]
fn test_invalid_category_input() {
    let (_, transcript) = run_script("abc\n9\n0\n", PLAIN);

    assert_eq!(transcript.matches("Invalid input, try again.").count(), 2);
    assert_eq!(transcript.matches("Choose an item type:").count(), 3);
    assert!(!transcript.contains("Item list:"));
}

#[test]
fn test_invalid_item_input_stays_in_list() {
    let (_, transcript) = run_script("1\n7\nx\n0\n0\n", PLAIN);

    assert_eq!(transcript.matches("Invalid input, try again.").count(), 2);
    assert_eq!(transcript.matches("Item list:").count(), 1);
    assert_eq!(
        transcript.matches("Enter the item number to select it or 0 to go back:").count(),
        3
    );
    assert_eq!(transcript.matches("Choose an item type:").count(), 2);
}

#[test]
fn test_invalid_action_input_stays_in_menu() {
    let (catalog, transcript) = run_script("1\n1\n5\nnope\n0\n0\n", PLAIN);

    assert_eq!(transcript.matches("Invalid input, try again.").count(), 2);
    assert_eq!(transcript.matches("Choose an action:").count(), 3);
    assert!(catalog.history().is_empty());
}

#[test]
#[allow(clippy::panic)]
fn test_action_back_returns_to_category_menu() {
    let config = PLAIN;
    let mut session = Session::new(
        Catalog::seeded(config.language),
        "1\n1\n0\n0\n".as_bytes(),
        Vec::new(),
        config,
    );

    let mut states = Vec::new();
    while session.state() != SessionState::Terminated {
        match session.step() {
            Ok(state) => states.push(state),
            Err(err) => panic!("step failed: {err}"),
        }
    }

    assert_eq!(
        states,
        vec![
            SessionState::ItemSelect(Category::Book),
            SessionState::ActionSelect(ItemKey::new(Category::Book, 0)),
            SessionState::CategorySelect,
            SessionState::Terminated,
        ]
    );
}

#[test]
fn test_end_of_input_terminates() {
    for script in ["", "1\n", "1\n1\n", "1\n1\n1\n"] {
        let (_, transcript) = run_script(script, PLAIN);
        assert!(transcript.starts_with("Choose an item type:"));
    }
}

#[test]
fn test_russian_transcript() {
    let config = SessionConfig { language: Language::Russian, color: false };
    let (catalog, transcript) = run_script("2\n1\n2\n1\n0\n0\n", config);

    assert!(transcript.contains("Выберите тип объекта:\n"));
    assert!(transcript.contains("1. \"Комсомольская правда\" доступна: Да\n"));
    assert!(
        transcript.contains("Газета 3 \"Комсомольская правда\" взяли в читальный зал.\n")
    );
    assert!(transcript.contains("Газеты нельзя брать домой.\n"));
    assert_eq!(is_available(&catalog, ItemKey::new(Category::Newspaper, 0)), Some(false));
}

#[test]
fn test_russian_rejections() {
    let config = SessionConfig { language: Language::Russian, color: false };
    let script = "3\n1\n2\n0\n3\n2\n4\n4\n0\n1\n1\n1\n1\n2\n0\n0\n";
    let (catalog, transcript) = run_script(script, config);

    assert!(transcript.contains("Диски нельзя читать в читальном зале.\n"));
    assert!(transcript.contains("Диск 6 \"Thriller\" вернули.\n"));
    assert!(transcript.contains("Thriller уже доступен(а).\n"));
    assert!(transcript.contains("Книга 1 \"Война и мир\" взяли домой.\n"));
    assert!(transcript.contains("Война и мир недоступен(а) для взятия домой.\n"));
    assert!(transcript.contains("Война и мир недоступен(а) для чтения в читальном зале.\n"));
    assert_eq!(is_available(&catalog, ItemKey::new(Category::Book, 0)), Some(false));
    assert_eq!(catalog.history().len(), 2);
}

#[test]
fn test_garbled_input_is_rejected() {
    let (_, transcript) = run_raw_script(b"\xff\xfe\n1\n0\n0\n", PLAIN);

    assert_eq!(transcript.matches("Invalid input, try again.").count(), 1);
    assert!(transcript.contains("Item list:\n"));
}

/// Reader that fails every read
#[derive(Debug)]
struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("input closed"))
    }
}

/// Writer that fails every write
#[derive(Debug)]
struct BrokenOutput;

impl Write for BrokenOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_unreadable_input_terminates_gracefully() {
    let mut session = Session::new(
        Catalog::seeded(Language::English),
        BufReader::new(BrokenInput),
        Vec::new(),
        PLAIN,
    );
    assert!(session.run().is_ok());
    assert_eq!(session.state(), SessionState::Terminated);
}

#[test]
fn test_write_failure_propagates() {
    let mut session =
        Session::new(Catalog::seeded(Language::English), "0\n".as_bytes(), BrokenOutput, PLAIN);
    assert!(matches!(session.run(), Err(SessionError::Output(_))));
}
