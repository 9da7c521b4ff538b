//! Operator Roulette CLI
//!
//! Loads the attacker and defender rosters and draws a random selection of
//! unique operators into a terminal slot panel. With no subcommand it
//! behaves like the page-load default: both rosters loaded, attackers
//! rolled once.

mod terminal;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use or_core::{data, render, DraftConfig, DraftState, Roster, Side};
use terminal::TerminalSurface;

#[derive(Parser)]
#[command(name = "or_cli")]
#[command(about = "Roll random operator picks from the attacker and defender rosters", long_about = None)]
struct Cli {
    /// Attacker roster JSON (defaults to the embedded roster)
    #[arg(long)]
    attackers: Option<PathBuf>,

    /// Defender roster JSON (defaults to the embedded roster)
    #[arg(long)]
    defenders: Option<PathBuf>,

    /// Number of operators to draw
    #[arg(long, default_value_t = or_core::DEFAULT_SLOT_COUNT)]
    count: usize,

    /// RNG seed for a reproducible roll
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a selection from the attacker roster
    Attack,
    /// Roll a selection from the defender roster
    Defend,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let state = DraftState::new(
        roster_for(Side::Attack, cli.attackers.as_deref()),
        roster_for(Side::Defend, cli.defenders.as_deref()),
    );

    let side = match cli.command {
        Some(Commands::Defend) => Side::Defend,
        Some(Commands::Attack) | None => Side::Attack,
    };

    let mut rng = match cli.seed {
        Some(seed) => {
            log::debug!("using fixed seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let config = DraftConfig {
        sample_size: cli.count,
        ..DraftConfig::default()
    };

    let picked = state.randomize(side, config.sample_size, &mut rng);

    let mut surface = TerminalSurface::new(&config.slots);
    render(&mut surface, &config.slots, &picked);

    println!(
        "🎲 {} roll: {} of {} operators",
        side,
        picked.len(),
        state.roster(side).len()
    );
    surface.print_panel();

    Ok(())
}

fn roster_for(side: Side, path: Option<&Path>) -> Roster {
    match path {
        Some(path) => data::load_roster(path),
        None => match side {
            Side::Attack => data::default_attackers().clone(),
            Side::Defend => data::default_defenders().clone(),
        },
    }
}
