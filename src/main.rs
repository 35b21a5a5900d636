use anyhow::Context;
use bingo_tex::{generate, tex, CardSpec, EntryPool};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Write TeX for printable bingo cards from a list of entries.
#[derive(Parser)]
#[command(name = "bingo-tex", version, about)]
struct Cli {
    /// Path to the file containing the list of entries, one per line
    #[arg(short = 'e', long)]
    entry_file: PathBuf,

    /// Number of unique cards to generate
    #[arg(long, default_value_t = 1)]
    cards: usize,

    /// Title printed at the top of each card
    #[arg(long, default_value = "BINGO")]
    title: String,

    /// Number of rows per card
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Number of columns per card
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Include a free space in the center of each card
    #[arg(long)]
    free_space: bool,

    /// Text for the free space (implies --free-space)
    #[arg(long)]
    free_space_text: Option<String>,

    /// Seed for the random number generator that selects entries
    #[arg(long)]
    seed: Option<u64>,

    /// Path of the TeX file to write
    #[arg(short = 'o', long, default_value = "bingo_cards.tex")]
    output: PathBuf,

    /// Print information about the cards while generating
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    let file = File::open(&cli.entry_file)
        .with_context(|| format!("failed to open entry file {}", cli.entry_file.display()))?;
    let pool = EntryPool::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read entries from {}", cli.entry_file.display()))?;

    let spec = CardSpec {
        rows: cli.rows,
        cols: cli.cols,
        free_space: cli.free_space,
        free_space_text: cli.free_space_text,
        count: cli.cards,
        title: cli.title,
    }
    .normalized();

    if spec.free_space && !cli.free_space {
        info!("free space text was provided without --free-space; assuming a free space is desired");
    }

    let plural = if spec.count == 1 { "" } else { "s" };
    match spec.free_space_text.as_deref() {
        Some(text) => info!(
            "making {} card{plural} with {} rows, {} columns, and a free space with text {text:?}",
            spec.count, spec.rows, spec.cols
        ),
        None => info!(
            "making {} card{plural} with {} rows, {} columns, and no free space",
            spec.count, spec.rows, spec.cols
        ),
    }
    if let Some(index) = spec.free_space_index() {
        if spec.rows % 2 == 0 {
            info!("number of rows is even, placing the free space in the last row of the first half");
        }
        if spec.cols % 2 == 0 {
            info!("number of columns is even, placing the free space in the last column of the first half");
        }
        info!(
            "free space placed at row {} and column {}",
            index / spec.cols,
            index % spec.cols
        );
    }
    if pool.len() > spec.entries_required() {
        info!(
            "more entries provided than spaces on the card{plural}, \
             not all entries will be included in every card"
        );
    }

    let mut rng = match cli.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_os_rng(),
    };
    let cards = generate(&pool, &spec, &mut rng).context("card generation failed")?;

    let out = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut out = BufWriter::new(out);
    tex::render_document(&mut out, &spec, &cards)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    out.flush()?;

    info!("wrote {} card{plural} to {}", cards.len(), cli.output.display());
    Ok(())
}
