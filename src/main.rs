use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_hunt::{config::Config, GridGenerator, Puzzle, WordPool};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_hunt=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let json = std::env::args().skip(1).any(|arg| arg == "--json");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = match &config.puzzle.word_pool_path {
        Some(path) => WordPool::load(path)?,
        None => WordPool::default(),
    };

    let generator = config.generator();
    let puzzle = match config.puzzle.seed {
        Some(seed) => {
            tracing::info!("Using puzzle seed {}", seed);
            GridGenerator::generate_with_rng(
                pool.words(),
                &generator,
                &mut StdRng::seed_from_u64(seed),
            )
        }
        None => GridGenerator::generate(pool.words(), &generator),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else {
        print_puzzle(&puzzle);
    }

    Ok(())
}

fn print_puzzle(puzzle: &Puzzle) {
    for row in &puzzle.grid {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("{}", line.join(" "));
    }

    println!();
    println!("Words to find ({}):", puzzle.words.len());
    for placed in &puzzle.words {
        println!("  {} ({} letters)", placed.word, placed.len());
    }
}
