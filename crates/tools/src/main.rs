use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_core::{Game, InputJournal, Rules, replay::replay_to_end};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate many floors and report generator effort
    Bench {
        /// Number of runs, seeded 0..seeds
        #[arg(short, long, default_value_t = 100)]
        seeds: u64,
        /// Floors generated per run, starting from floor 1
        #[arg(short, long, default_value_t = 100)]
        floors: u32,
        /// TOML file overriding the default rules
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
    /// Replay a recorded input journal and print the final state
    Replay {
        /// Path to the journal JSON file
        #[arg(short, long)]
        journal: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    match Args::parse().command {
        Command::Bench { seeds, floors, rules } => bench(seeds, floors, load_rules(rules)?),
        Command::Replay { journal } => replay(&journal),
    }
}

fn load_rules(path: Option<PathBuf>) -> Result<Rules> {
    let Some(path) = path else {
        return Ok(Rules::default());
    };
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    Rules::from_toml_str(&source)
        .with_context(|| format!("Failed to load rules from {}", path.display()))
}

fn bench(seeds: u64, floors: u32, rules: Rules) -> Result<()> {
    let started = Instant::now();
    let mut total_attempts = 0u64;
    let mut unfair = 0u64;
    let mut setups = 0u64;

    for seed in 0..seeds {
        let mut game = Game::with_rules(seed, rules.clone());
        for floor in 1..=floors {
            let attempts =
                if floor == 1 { game.setup_floor() } else { game.advance_floor() };
            total_attempts += u64::from(attempts);
            setups += 1;
            if !game.floor_is_fair() {
                unfair += 1;
            }
        }
        debug!(seed, "bench run finished");
    }

    let per_setup = if setups == 0 { 0.0 } else { total_attempts as f64 / setups as f64 };
    println!("{total_attempts} attempts ({per_setup:.3} attempts per setup)");
    println!("{unfair} of {setups} floors accepted at the attempt cap");
    println!("{:.1} ms", started.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}

fn replay(path: &Path) -> Result<()> {
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    let journal: InputJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;

    let result = replay_to_end(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Final Floor: {}", result.final_floor);
    println!("Final Turn: {}", result.final_turn);
    println!("Game Over: {}", result.game_over);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_files_override_defaults_and_report_bad_input() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let good = dir.path().join("rules.toml");
        fs::write(&good, "offer_count = 2\nbase_traps = 4\n").expect("rules file should be written");
        let rules = load_rules(Some(good)).expect("rules should load");
        assert_eq!(rules.offer_count, 2);
        assert_eq!(rules.base_traps, 4);
        assert_eq!(rules.base_grid_size, Rules::default().base_grid_size);

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "offer_cuont = 2\n").expect("rules file should be written");
        let error = load_rules(Some(bad)).expect_err("unknown keys should be rejected");
        assert!(error.to_string().starts_with("Failed to load rules"));

        assert_eq!(load_rules(None).expect("defaults should load"), Rules::default());
    }

    #[test]
    fn journal_files_replay_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("journal.json");
        let mut journal = InputJournal::new(8);
        for token in ["right", "down", "yes"] {
            journal.record(token);
        }
        let json = serde_json::to_string(&journal).expect("journal should serialize");
        fs::write(&path, json).expect("journal file should be written");

        replay(&path).expect("journal should replay from disk");
        assert!(replay(&dir.path().join("missing.json")).is_err());
    }
}
