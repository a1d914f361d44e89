use std::path::{Path, PathBuf};

use rhyme::{EmbeddingTable, RhymeCandidate};

/// Small GloVe-style table. `light`, `bright`, and `night` point the same way;
/// `bite` points away from them.
pub const GLOVE_SAMPLE: &str = "\
light 0.9 0.1 0.0
bright 0.8 0.3 0.1
night 0.7 0.2 -0.1
bite -0.9 -0.1 0.0
kite 0.0 1.0 0.0
site 0.0 0.0 1.0
";

pub const CMUDICT_SAMPLE: &str = ";;; sample pronouncing dictionary
LIGHT  L AY1 T
BRIGHT  B R AY1 T
NIGHT  N AY1 T
BITE  B AY1 T
KITE  K AY1 T
UNKNOWNWORD  AH0 N N OW1 N W ER2 D
";

pub fn sample_table() -> EmbeddingTable {
    EmbeddingTable::from_reader(GLOVE_SAMPLE.as_bytes()).expect("sample table parses")
}

pub fn candidates(pairs: &[(&str, f32)]) -> Vec<RhymeCandidate> {
    pairs.iter().map(|&p| RhymeCandidate::from(p)).collect()
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture write");
    path
}
