//! Request files in, ranked result files out, plus the rhyme map pipeline.

mod common;

use std::io::Cursor;

use common::fixtures::{CMUDICT_SAMPLE, sample_table, write_file};
use rhyme::payload::{save_results, write_results};
use rhyme::{ResultFormat, RhymeMap, RhymeRequest, RhymeScorer};

#[test]
fn test_json_request_to_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "request.json",
        r#"{"base_word": "light", "candidates": [["bite", 0.9], ["night", 0.9]]}"#,
    );

    let request = RhymeRequest::load(&input).unwrap();
    let table = sample_table();
    let ranked = RhymeScorer::cosine(&table).rank(&request.base_word, &request.candidates);

    let output = dir.path().join("scores.tsv");
    save_results(&output, &ranked, ResultFormat::from_path(&output)).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("night\t0."));
    assert!(lines[1].starts_with("bite\t0.6"));
}

#[test]
fn test_word_list_request_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "words.txt", "light\nbright\nzzyzx\n");

    let request = RhymeRequest::load(&input).unwrap();
    let table = sample_table();
    let ranked = RhymeScorer::cosine(&table).rank(&request.base_word, &request.candidates);

    let mut buf = Vec::new();
    write_results(&mut buf, &ranked, ResultFormat::Csv).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "word,score");
    assert!(lines[1].starts_with("bright,0.9"));
    assert_eq!(lines[2], "zzyzx,0.900000");
}

#[test]
fn test_cmudict_to_saved_map_to_ranked_rhymes() {
    let dir = tempfile::tempdir().unwrap();
    let map = RhymeMap::from_cmudict(Cursor::new(CMUDICT_SAMPLE)).unwrap();

    let map_path = dir.path().join("rhyme_map.txt");
    map.write_to(std::fs::File::create(&map_path).unwrap()).unwrap();

    let loaded = RhymeMap::load(&map_path).unwrap();
    assert_eq!(loaded.pattern_count(), map.pattern_count());
    assert_eq!(
        loaded.find_rhymes("light"),
        vec!["Bright", "Night", "Bite", "Kite"]
    );

    let table = sample_table();
    let candidates = loaded.default_candidates_for("light");
    let ranked = RhymeScorer::cosine(&table).rank("light", &candidates);

    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].word, "night");
    assert_eq!(ranked.last().map(|r| r.word.as_str()), Some("bite"));
}

#[test]
fn test_word_with_no_rhymes() {
    let map = RhymeMap::from_cmudict(Cursor::new(CMUDICT_SAMPLE)).unwrap();
    assert!(map.find_rhymes("unknownword").is_empty());
    assert!(map.default_candidates_for("orange").is_empty());
}
