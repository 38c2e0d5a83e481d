use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use hanabi_mc::core::GameConfig;
use hanabi_mc::logging::init_logging;
use hanabi_mc::rollout::{RolloutConfig, RolloutEngine};
use hanabi_mc::runner::play_game;

/// Play one game of Hanabi with a Monte Carlo rollout player in every seat.
#[derive(Debug, Parser)]
#[command(name = "hanabi", author, version, about = "Monte Carlo Hanabi self-play")]
struct Cli {
    /// Number of players (2-5).
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Trials per decision.
    #[arg(short, long, default_value_t = 500)]
    trials: usize,

    /// Maximum simulated turns per trial.
    #[arg(short, long, default_value_t = 15)]
    depth: usize,

    /// Seed for the deal and the rollouts.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Worker threads (default: one per core).
    #[arg(long, value_name = "COUNT")]
    threads: Option<usize>,

    /// Give up on a decision after this many seconds.
    #[arg(long, value_name = "SECS", default_value_t = 3600)]
    timeout_secs: u64,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(Level::WARN, cli.json_logs);

    let game_config = GameConfig::default()
        .with_player_count(cli.players)
        .with_seed(cli.seed);
    game_config.validate().context("invalid game configuration")?;

    let mut rollout_config = RolloutConfig::default()
        .with_trials(cli.trials)
        .with_max_depth(cli.depth)
        .with_seed(cli.seed)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(threads) = cli.threads {
        rollout_config = rollout_config.with_threads(threads);
    }
    let mut engine = RolloutEngine::new(rollout_config).context("starting rollout workers")?;

    let summary = play_game(&game_config, &mut engine, |report| {
        let game = report.game;
        let stats = &report.decision.stats;
        let rate = format!(
            "{:.0} trials/s, depth {:.1}",
            stats.trials_per_second(),
            stats.avg_depth()
        );
        println!(
            "turn {:>3}: {:<40} score {:>2}  info {}  fuses {}  deck {:>2}  {}",
            report.turn,
            report.decision.action.to_string(),
            game.score(),
            game.info_tokens(),
            game.fuse_tokens(),
            game.deck().len(),
            rate,
        );
    })
    .context("game aborted")?;

    println!(
        "final score: {} after {} turns ({} fuses left)",
        summary.score, summary.turns, summary.fuse_tokens
    );
    Ok(())
}
