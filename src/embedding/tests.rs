use std::io::{Cursor, Write};

use super::*;

const GLOVE_SAMPLE: &str = "\
light 0.1 0.2 0.3
bright 0.1 0.25 0.3
kite -0.4 0.0 0.9
";

#[test]
fn test_table_from_glove_text() {
    let table = EmbeddingTable::from_reader(Cursor::new(GLOVE_SAMPLE)).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.dim(), 3);
    assert_eq!(table.vector_for("kite"), Some(&[-0.4, 0.0, 0.9][..]));
}

#[test]
fn test_table_accepts_word2vec_header() {
    let text = format!("3 3\n{GLOVE_SAMPLE}");
    let table = EmbeddingTable::from_reader(Cursor::new(text)).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.dim(), 3);
}

#[test]
fn test_table_header_fixes_dimension() {
    let text = "2 4\nlight 0.1 0.2 0.3\n";
    let err = EmbeddingTable::from_reader(Cursor::new(text)).unwrap_err();

    assert!(matches!(
        err,
        EmbeddingError::DimensionMismatch {
            expected: 4,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn test_table_lookup_is_case_insensitive() {
    let table = EmbeddingTable::from_reader(Cursor::new(GLOVE_SAMPLE)).unwrap();

    assert!(table.vector_for("LIGHT").is_some());
    assert!(table.vector_for(" Bright ").is_some());
    assert!(table.contains("Kite"));
}

#[test]
fn test_table_out_of_vocabulary() {
    let table = EmbeddingTable::from_reader(Cursor::new(GLOVE_SAMPLE)).unwrap();

    assert!(table.vector_for("zzyzx").is_none());
    assert!(!table.contains(""));
}

#[test]
fn test_table_first_spelling_wins() {
    let text = "light 1 0\nLight 0 1\n";
    let table = EmbeddingTable::from_reader(Cursor::new(text)).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.vector_for("light"), Some(&[1.0, 0.0][..]));
}

#[test]
fn test_table_skips_blank_lines() {
    let text = "\nlight 1 0\n\n   \nkite 0 1\n";
    let table = EmbeddingTable::from_reader(Cursor::new(text)).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_table_rejects_ragged_rows() {
    let text = "light 0.1 0.2 0.3\nkite 0.1 0.2\n";
    let err = EmbeddingTable::from_reader(Cursor::new(text)).unwrap_err();

    match err {
        EmbeddingError::DimensionMismatch {
            word,
            expected,
            actual,
        } => {
            assert_eq!(word, "kite");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_table_keeps_unicode_whitespace_inside_tokens() {
    let text = "light 1.0 0.0\na\u{00a0}b 0.5 0.5\nfull\u{3000}width 0.2 0.8\nbright 0.9 0.1\n";
    let table = EmbeddingTable::from_reader(Cursor::new(text)).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.vector_for("a\u{00a0}b"), Some(&[0.5, 0.5][..]));
    assert_eq!(table.vector_for("full\u{3000}width"), Some(&[0.2, 0.8][..]));
    assert_eq!(table.vector_for("bright"), Some(&[0.9, 0.1][..]));
}

#[test]
fn test_table_takes_trailing_fields_as_vector() {
    let text = "3 2\nlight 1.0 0.0\nnew york 0.3 0.7\n";
    let table = EmbeddingTable::from_reader(Cursor::new(text)).unwrap();

    assert_eq!(table.vector_for("new york"), Some(&[0.3, 0.7][..]));
}

#[test]
fn test_table_tolerates_crlf_and_invalid_utf8() {
    let mut bytes = b"light 1.0 0.0\r\ncaf".to_vec();
    bytes.extend_from_slice(&[0xC9]);
    bytes.extend_from_slice(b" 0.4 0.6\r\nbright 0.9 0.1\r\n");

    let table = EmbeddingTable::from_reader(Cursor::new(bytes)).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.vector_for("light"), Some(&[1.0, 0.0][..]));
    assert_eq!(table.vector_for("bright"), Some(&[0.9, 0.1][..]));
}

#[test]
fn test_table_rejects_non_numeric_component() {
    let text = "light 0.1 abc 0.3\n";
    let err = EmbeddingTable::from_reader(Cursor::new(text)).unwrap_err();
    assert!(matches!(err, EmbeddingError::MalformedLine { line: 1, .. }));
}

#[test]
fn test_table_rejects_word_without_vector() {
    let err = EmbeddingTable::from_reader(Cursor::new("light\n")).unwrap_err();
    assert!(matches!(err, EmbeddingError::MalformedLine { .. }));
}

#[test]
fn test_table_rejects_empty_input() {
    let err = EmbeddingTable::from_reader(Cursor::new("")).unwrap_err();
    assert!(matches!(err, EmbeddingError::EmptyTable));

    let err = EmbeddingTable::from_reader(Cursor::new("10 25\n")).unwrap_err();
    assert!(matches!(err, EmbeddingError::EmptyTable));
}

#[test]
fn test_table_from_entries() {
    let table = EmbeddingTable::from_entries(
        2,
        [("Blue", vec![1.0, 0.0]), ("true", vec![0.0, 1.0])],
    )
    .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.vector_for("blue"), Some(&[1.0, 0.0][..]));
    let mut words: Vec<&str> = table.words().collect();
    words.sort_unstable();
    assert_eq!(words, vec!["blue", "true"]);
}

#[test]
fn test_table_insert_rejects_wrong_dimension() {
    let mut table = EmbeddingTable::new(3).unwrap();
    let err = table.insert("light", vec![1.0]).unwrap_err();

    assert!(matches!(err, EmbeddingError::DimensionMismatch { .. }));
    assert!(table.is_empty());
}

#[test]
fn test_table_zero_dimension_rejected() {
    assert!(matches!(
        EmbeddingTable::new(0),
        Err(EmbeddingError::InvalidConfig { .. })
    ));
}

#[test]
fn test_table_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(GLOVE_SAMPLE.as_bytes()).unwrap();
    file.flush().unwrap();

    let table = EmbeddingTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 3);
}

#[test]
fn test_table_load_missing_file() {
    let err = EmbeddingTable::load("/nonexistent/glove.txt").unwrap_err();
    assert!(matches!(err, EmbeddingError::TableNotFound { .. }));
}

#[test]
fn test_provider_through_reference_and_dyn() {
    let table = EmbeddingTable::from_reader(Cursor::new(GLOVE_SAMPLE)).unwrap();
    let by_ref: &EmbeddingTable = &table;
    let dynamic: &dyn EmbeddingProvider = &table;

    assert_eq!(EmbeddingProvider::dim(&by_ref), 3);
    assert!(dynamic.contains("light"));
    assert_eq!(dynamic.dim(), 3);
}

#[test]
fn test_table_debug() {
    let table = EmbeddingTable::from_reader(Cursor::new(GLOVE_SAMPLE)).unwrap();
    let debug = format!("{:?}", table);
    assert!(debug.contains("words: 3"));
}
