//! `rhyme` command-line entrypoint.

mod cli;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing::{info, warn};

use rhyme::{
    Config, EmbeddingProvider, EmbeddingTable, ResultFormat, RhymeCandidate, RhymeMap, RhymeNet,
    RhymeNetConfig, RhymeRequest, RhymeScorer, ScoredRhyme, ScorerKind, SemanticModel,
    validate_embedding_dim,
};

use cli::{Cli, Commands};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Rank {
            input,
            output,
            format,
            scorer,
            embeddings,
            model,
            top,
        } => {
            if let Some(path) = output {
                config.output_path = path;
            }
            if let Some(scorer) = scorer {
                config.scorer = scorer.parse()?;
            }
            if embeddings.is_some() {
                config.embeddings_path = embeddings;
            }
            if model.is_some() {
                config.model_path = model;
            }
            config.validate()?;

            let format: ResultFormat = match format {
                Some(f) => f.parse()?,
                None => ResultFormat::from_path(&config.output_path),
            };

            let request = RhymeRequest::load(&input)?;
            let table = load_table(&config)?;
            let ranked = rank_with_config(&config, &table, &request.base_word, &request.candidates, top)?;

            print_ranked(&request.base_word, &ranked);
            rhyme::payload::save_results(&config.output_path, &ranked, format)?;
            info!(
                output = %config.output_path.display(),
                %format,
                "Results written"
            );
        }

        Commands::Find {
            word,
            map,
            rank,
            phonetic,
            scorer,
            embeddings,
            model,
            top,
        } => {
            if map.is_some() {
                config.rhyme_map_path = map;
            }
            if let Some(scorer) = scorer {
                config.scorer = scorer.parse()?;
            }
            if embeddings.is_some() {
                config.embeddings_path = embeddings;
            }
            if model.is_some() {
                config.model_path = model;
            }
            config.validate_inputs()?;
            if rank {
                config.validate_scorer()?;
            }

            let map_path = config
                .rhyme_map_path
                .as_deref()
                .context("no rhyme map given (use --map or set RHYME_RHYME_MAP_PATH)")?;
            let rhyme_map = RhymeMap::load(map_path)?;

            if !rank {
                let rhymes = rhyme_map.find_rhymes(&word);
                if rhymes.is_empty() {
                    println!("No rhymes found for '{word}'.");
                } else {
                    println!("Rhymes for '{word}':");
                    for rhyme in rhymes {
                        println!("{rhyme}");
                    }
                }
                return Ok(());
            }

            let candidates = rhyme_map.candidates_for(&word, phonetic);
            let base_word = word.trim().to_lowercase();
            let request = RhymeRequest::new(base_word, candidates).validated()?;

            let table = load_table(&config)?;
            let ranked = rank_with_config(&config, &table, &request.base_word, &request.candidates, top)?;
            print_ranked(&request.base_word, &ranked);
        }

        Commands::BuildMap { dict, output } => {
            let reader = BufReader::new(
                File::open(&dict).with_context(|| format!("opening {}", dict.display()))?,
            );
            let rhyme_map = RhymeMap::from_cmudict(reader)?;
            rhyme_map.write_to(BufWriter::new(File::create(&output)?))?;

            info!(
                output = %output.display(),
                patterns = rhyme_map.pattern_count(),
                words = rhyme_map.total_words(),
                "Rhyme map written"
            );
            println!(
                "Wrote {} rhyme patterns ({} words) to {}",
                rhyme_map.pattern_count(),
                rhyme_map.total_words(),
                output.display()
            );
        }
    }

    Ok(())
}

fn load_table(config: &Config) -> anyhow::Result<EmbeddingTable> {
    let path = config
        .embeddings_path
        .as_deref()
        .context("no embedding table given (use --embeddings or set RHYME_EMBEDDINGS_PATH)")?;
    let table = EmbeddingTable::load(path)?;
    validate_embedding_dim(table.dim(), config.embedding_dim)
        .with_context(|| format!("embedding table {}", path.display()))?;
    Ok(table)
}

fn rank_with_config(
    config: &Config,
    table: &EmbeddingTable,
    base_word: &str,
    candidates: &[RhymeCandidate],
    top: Option<usize>,
) -> anyhow::Result<Vec<ScoredRhyme>> {
    if candidates.is_empty() {
        warn!(base_word, "Request has no candidates");
    }

    match config.scorer {
        ScorerKind::Cosine => Ok(run(&RhymeScorer::cosine(table), base_word, candidates, top)),
        ScorerKind::Learned => {
            let weights = config
                .model_path
                .as_deref()
                .context("the learned scorer needs --model or RHYME_MODEL_PATH")?;
            let net = load_net(weights, table.dim())?;
            let scorer = RhymeScorer::learned(table, net)?;
            Ok(run(&scorer, base_word, candidates, top))
        }
    }
}

fn load_net(weights: &Path, embedding_dim: usize) -> anyhow::Result<RhymeNet> {
    let net = RhymeNet::load(RhymeNetConfig::new(weights).with_embedding_dim(embedding_dim))?;
    Ok(net)
}

fn run<P: EmbeddingProvider + ?Sized, M: SemanticModel>(
    scorer: &RhymeScorer<'_, P, M>,
    base_word: &str,
    candidates: &[RhymeCandidate],
    top: Option<usize>,
) -> Vec<ScoredRhyme> {
    match top {
        Some(n) => scorer.rank_top_n(base_word, candidates, n),
        None => scorer.rank(base_word, candidates),
    }
}

fn print_ranked(base_word: &str, ranked: &[ScoredRhyme]) {
    println!("Ranked rhymes for '{base_word}':");
    println!("{}", "-".repeat(40));
    for r in ranked {
        println!("{}: {:.4}", r.word, r.combined_score);
    }
}
