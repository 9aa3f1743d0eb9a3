//! Self-play generation, matches and interactive play for AlphaZero-style Gomoku.
//!
//! Self-play writes JSON-lines training samples for the external trainer and
//! bumps the iteration counter. Matches pit search and random agents
//! against each other; `play` puts a human at the board.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use zero_arena::{artifacts, config, matches, selfplay, AppConfig, MatchSummary};
use zero_core::{GameStatus, Player};
use zero_gomoku::Gomoku;
use zero_mcts::{MctsConfig, Strategy};

/// AlphaZero-style Gomoku arena.
#[derive(Parser)]
#[command(name = "zero-arena")]
#[command(about = "Generate self-play data, run matches and play against the engine")]
struct Cli {
    /// Configuration file (default: $ZERO_CONFIG, then ./zero.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (overrides the config file).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate self-play games for training.
    Selfplay {
        /// Number of games to generate.
        #[arg(short, long)]
        games: Option<usize>,

        /// Output directory for sample files.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of MCTS simulations per move.
        #[arg(short, long)]
        simulations: Option<usize>,

        /// Random seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a series of games between two automatic agents.
    Match {
        /// Agent moving first.
        #[arg(long, value_enum, default_value = "alpha-zero")]
        first: AgentKind,

        /// Agent moving second.
        #[arg(long, value_enum, default_value = "random")]
        second: AgentKind,

        /// Number of games to play.
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Number of MCTS simulations per move.
        #[arg(short, long)]
        simulations: Option<usize>,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Play against the engine from the terminal.
    Play {
        /// Let the engine move first.
        #[arg(long)]
        engine_first: bool,

        /// Number of MCTS simulations per move.
        #[arg(short, long)]
        simulations: Option<usize>,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Automatic agents selectable for matches.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    AlphaZero,
    Random,
}

impl From<AgentKind> for Strategy {
    fn from(kind: AgentKind) -> Self {
        match kind {
            AgentKind::AlphaZero => Strategy::AlphaZero,
            AgentKind::Random => Strategy::Random,
        }
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Greedy, noise-free search with the configured budget and exploration constant.
fn evaluation_config(config: &MctsConfig, simulations: Option<usize>) -> MctsConfig {
    MctsConfig {
        c_puct: config.c_puct,
        ..MctsConfig::for_evaluation(simulations.unwrap_or(config.num_simulations))
    }
}

fn cmd_selfplay(
    config: &AppConfig,
    games: Option<usize>,
    output: Option<PathBuf>,
    simulations: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let mut selfplay_config = config.selfplay.clone();
    selfplay_config.games = games.unwrap_or(selfplay_config.games);
    selfplay_config.output = output.unwrap_or(selfplay_config.output);
    selfplay_config.seed = seed.unwrap_or(selfplay_config.seed);

    let mut mcts_config = config.mcts.clone();
    mcts_config.num_simulations = simulations.unwrap_or(mcts_config.num_simulations);

    let iteration = artifacts::next_iteration(&selfplay_config.iteration_file)?;
    let game = Gomoku::new(config.game)?;

    println!(
        "Iteration {}: generating {} games on {}x{} (n={}) with {} simulations/move",
        iteration,
        selfplay_config.games,
        config.game.board_width,
        config.game.board_width,
        config.game.n_in_row,
        mcts_config.num_simulations
    );

    let start = Instant::now();
    let records = selfplay::generate(&game, &mcts_config, &selfplay_config)?;
    let samples: Vec<_> = records.iter().flat_map(|r| r.samples.iter().cloned()).collect();

    let path = artifacts::samples_path(&selfplay_config.output, iteration);
    artifacts::write_samples(&path, &samples)?;
    artifacts::write_iteration(&selfplay_config.iteration_file, iteration)?;

    let mut summary = MatchSummary::default();
    for record in &records {
        summary.record(record.status);
    }

    println!("\nCompleted in {:.2}s", start.elapsed().as_secs_f64());
    println!("Samples: {} written to {}", samples.len(), path.display());
    println!(
        "Outcomes: X wins: {}, O wins: {}, Draws: {}",
        summary.first_wins, summary.second_wins, summary.draws
    );
    Ok(())
}

fn cmd_match(
    config: &AppConfig,
    first: AgentKind,
    second: AgentKind,
    games: usize,
    simulations: Option<usize>,
    seed: u64,
) -> Result<()> {
    let game = Gomoku::new(config.game)?;
    let mcts_config = evaluation_config(&config.mcts, simulations);

    println!(
        "Playing {} games: {:?} (X) vs {:?} (O), {} simulations/move",
        games, first, second, mcts_config.num_simulations
    );

    let start = Instant::now();
    let summary = matches::run_matches(
        &game,
        &mcts_config,
        config.selfplay.rollout_depth,
        first.into(),
        second.into(),
        games,
        seed,
    )?;

    let pct = |n: usize| n as f32 / summary.games().max(1) as f32 * 100.0;
    println!("\n================================================");
    println!("FINAL RESULTS ({:.2}s)", start.elapsed().as_secs_f64());
    println!("================================================");
    println!("{:?} (X) wins: {} ({:.1}%)", first, summary.first_wins, pct(summary.first_wins));
    println!("{:?} (O) wins: {} ({:.1}%)", second, summary.second_wins, pct(summary.second_wins));
    println!("Draws:          {} ({:.1}%)", summary.draws, pct(summary.draws));
    Ok(())
}

fn cmd_play(config: &AppConfig, engine_first: bool, simulations: Option<usize>, seed: u64) -> Result<()> {
    let game = Gomoku::new(config.game)?;
    let mcts_config = evaluation_config(&config.mcts, simulations);
    let rollout_depth = config.selfplay.rollout_depth;

    let mut human = matches::build_agent(Strategy::Human, &mcts_config, rollout_depth, seed);
    let mut engine = matches::build_agent(Strategy::AlphaZero, &mcts_config, rollout_depth, seed.wrapping_add(1));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    println!("Enter moves as `row col` (0-based) or a cell index.");
    let (status, human_side) = if engine_first {
        (matches::play_game(&game, &mut engine, &mut human, &mut input, &mut out, true)?, Player::Second)
    } else {
        (matches::play_game(&game, &mut human, &mut engine, &mut input, &mut out, true)?, Player::First)
    };

    match status {
        GameStatus::Win(player) if player == human_side => println!("You win!"),
        GameStatus::Win(player) => println!("{player} wins."),
        _ => println!("Draw."),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = config::load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(level) = cli.log_level {
        app_config.log_level = level;
    }
    init_tracing(&app_config.log_level);
    info!(log_level = %app_config.log_level, game = ?app_config.game, "configuration loaded");

    match cli.command {
        Commands::Selfplay {
            games,
            output,
            simulations,
            seed,
        } => cmd_selfplay(&app_config, games, output, simulations, seed),

        Commands::Match {
            first,
            second,
            games,
            simulations,
            seed,
        } => cmd_match(&app_config, first, second, games, simulations, seed),

        Commands::Play {
            engine_first,
            simulations,
            seed,
        } => cmd_play(&app_config, engine_first, simulations, seed),
    }
}
