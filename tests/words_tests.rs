use std::fs;

use balda::{DictionaryError, WordRecord, WordSet};

#[test]
fn minimum_length_counts_characters_not_bytes() {
    // Every Cyrillic letter is two bytes in UTF-8; "БАЛ" must still count as 3
    let words = WordSet::from_words(["ДА", "БАЛ", "СЛОВО"], 3);
    assert_eq!(words.len(), 2);
    assert!(words.contains("БАЛ"));
    assert!(words.contains("СЛОВО"));
    assert!(!words.contains("ДА"));
}

#[test]
fn lookup_is_case_insensitive() {
    let words = WordSet::from_words(["балда"], 3);
    assert!(words.contains("БАЛДА"));
    assert!(words.contains("балда"));
    assert!(words.contains("Балда"));
}

#[test]
fn non_alphabetic_entries_are_dropped() {
    let words = WordSet::from_words(["АБ3В", "ПРИВЕТ-КА", "СТОЛ", "   "], 3);
    assert_eq!(words.len(), 1);
    assert!(words.contains("СТОЛ"));
}

#[test]
fn load_from_file_trims_uppercases_and_filters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("words.txt");
    fs::write(&path, "  стол\nДА\nбалда\n123\n\nЛОЖЬ\n").expect("write");

    let words = WordSet::load_from_file(&path, 3).expect("load");
    assert_eq!(words.len(), 3);
    assert!(words.contains("СТОЛ"));
    assert!(words.contains("БАЛДА"));
    assert!(words.contains("ЛОЖЬ"));
    assert_eq!(words.min_len(), 3);
}

#[test]
fn load_from_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = WordSet::load_from_file(dir.path().join("absent.txt"), 3).unwrap_err();
    assert!(matches!(err, DictionaryError::Io { .. }));
}

#[test]
fn load_with_no_usable_words_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("short.txt");
    fs::write(&path, "ДА\nНЕ\n42\n").expect("write");

    let err = WordSet::load_from_file(&path, 3).unwrap_err();
    assert!(matches!(err, DictionaryError::NoWords { .. }));
}

#[test]
fn record_holds_each_word_once() {
    let mut record = WordRecord::new();
    assert!(record.insert("ЛОЖ"));
    assert!(!record.insert("лож"), "case-normalized duplicate");
    assert_eq!(record.len(), 1);
    assert!(record.contains("ЛОЖ"));
    assert!(record.contains("лож"));
    assert_eq!(record.iter().collect::<Vec<_>>(), vec!["ЛОЖ"]);
}
