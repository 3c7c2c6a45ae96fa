use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use connect_k::{play, play_series, BoardEngine, FirstLegal, GameConfig, MovePolicy, Token, UniformRandom};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    /// Uniformly random legal column
    Random,
    /// Lowest legal column
    First,
}

/// Play connect-k games between automatic players.
#[derive(Parser)]
#[command(name = "connect-k", about = "Play connect-k with automatic players")]
struct Cli {
    /// Board rows
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 7)]
    cols: usize,

    /// Line length needed to win
    #[arg(long, default_value_t = 4)]
    k: usize,

    /// Player tokens in turn order (non-zero)
    #[arg(long, value_delimiter = ',', default_values_t = [1u8, 2])]
    players: Vec<u8>,

    /// Move policy
    #[arg(long, value_enum, default_value = "random")]
    policy: PolicyKind,

    /// RNG seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many silent games and print a tally instead
    #[arg(long)]
    games: Option<usize>,

    /// Resume from a saved snapshot (board options are ignored)
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the final position to this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Only print the result
    #[arg(long)]
    quiet: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(clock_seed);

    if let Some(games) = cli.games {
        let config = build_config(&cli)?;
        let stats = play_series(&config, seed, games).context("running series")?;
        println!("Seed: {seed}");
        for (token, wins) in config.players.iter().zip(&stats.wins) {
            println!("Player {token}: {wins} wins");
        }
        println!("Draws: {}", stats.draws);
        println!("Mean length: {:.1} moves", stats.mean_length());
        return Ok(());
    }

    let mut engine = match &cli.load {
        Some(path) => BoardEngine::load_from_path(path)
            .with_context(|| format!("loading snapshot from {}", path.display()))?,
        None => BoardEngine::started(build_config(&cli)?).context("invalid board options")?,
    };

    let mut policy: Box<dyn MovePolicy> = match cli.policy {
        PolicyKind::Random => Box::new(UniformRandom::new(seed)),
        PolicyKind::First => Box::new(FirstLegal),
    };

    if !cli.quiet {
        print!("{}", engine.render()?);
    }

    let quiet = cli.quiet;
    let playout = play(&mut engine, policy.as_mut(), |action, engine| {
        if !quiet {
            println!("Action: {action}");
            if let Ok(frame) = engine.render() {
                print!("{frame}");
            }
        }
    })?;

    println!("{}", playout.result);

    if let Some(path) = &cli.save {
        engine
            .save_to_path(path)
            .with_context(|| format!("saving snapshot to {}", path.display()))?;
        if !cli.quiet {
            println!("Saved to {}", path.display());
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let Some(players) = Token::from_raw_ids(&cli.players) else {
        bail!("player tokens must be non-zero (got {:?})", cli.players);
    };
    let config = GameConfig::new(cli.rows, cli.cols, cli.k).with_players(players);
    config.validate()?;
    Ok(config)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
