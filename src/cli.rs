use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rhyme",
    about = "Rank rhyme candidates by blending phonetic and semantic similarity",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the candidates in a request file (.json, or a word list with the base word first)
    Rank {
        /// Request file
        input: PathBuf,

        /// Results file (default: RHYME_OUTPUT_PATH or rhyme_scores.tsv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Results format: tsv or csv (default: from the output extension)
        #[arg(long)]
        format: Option<String>,

        /// Semantic model: cosine or learned (default: RHYME_SCORER)
        #[arg(long)]
        scorer: Option<String>,

        /// Word-vector table (default: RHYME_EMBEDDINGS_PATH)
        #[arg(short, long)]
        embeddings: Option<PathBuf>,

        /// Rhyme net weights for the learned scorer (default: RHYME_MODEL_PATH)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Keep only the best N results
        #[arg(long)]
        top: Option<usize>,
    },

    /// List perfect rhymes for a word from a saved rhyme map
    Find {
        /// Word to rhyme
        word: String,

        /// Saved rhyme map (default: RHYME_RHYME_MAP_PATH)
        #[arg(long)]
        map: Option<PathBuf>,

        /// Rank the rhymes with embeddings instead of listing them
        #[arg(long)]
        rank: bool,

        /// Phonetic score given to every perfect rhyme when ranking
        #[arg(long, default_value_t = rhyme::DEFAULT_PHONETIC_SCORE)]
        phonetic: f32,

        /// Semantic model when ranking: cosine or learned (default: RHYME_SCORER)
        #[arg(long)]
        scorer: Option<String>,

        /// Word-vector table (default: RHYME_EMBEDDINGS_PATH)
        #[arg(short, long)]
        embeddings: Option<PathBuf>,

        /// Rhyme net weights for the learned scorer (default: RHYME_MODEL_PATH)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Keep only the best N results
        #[arg(long)]
        top: Option<usize>,
    },

    /// Build a rhyme map from a CMU-style pronouncing dictionary
    BuildMap {
        /// Pronouncing dictionary (`WORD  PH1 PH2 ...` per line)
        dict: PathBuf,

        /// Output file for the saved rhyme map
        #[arg(short, long)]
        output: PathBuf,
    },
}
