use std::collections::BTreeMap;
use std::io::{stdin, stdout};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe::PlayerId;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ttt_judge::{
    play_game, GameConfig, GameResult, LoggingInterface, Player, PrintingInterface, RandomPlayer,
    TerminalPlayer,
};

#[derive(Parser)]
struct Args {
    /// Number of human players
    #[arg(long, default_value_t = 1)]
    humans: u32,

    /// Number of bots
    #[arg(long, default_value_t = 1)]
    bots: u32,

    /// Path to a JSON file like {"humans": 2, "bots": 1}, overriding --humans and --bots
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many games to play [default: 1 when interactive, 100 otherwise]
    #[arg(short, long)]
    num_games: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let the humans play at this terminal instead of random stand-ins
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Print every bot's scores for the free cells before each human move
    #[arg(long, default_value_t = false)]
    show_scores: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: BTreeMap<PlayerId, usize>,
    draws: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => {
            let config = GameConfig {
                humans: args.humans,
                bots: args.bots,
            };
            config.validate()?;
            config
        }
    };
    let num_games = args
        .num_games
        .unwrap_or(if args.interactive { 1 } else { 100 });

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut players: Vec<Box<dyn Player>> = if args.interactive {
        // Everybody shares the terminal
        let player = TerminalPlayer::new("terminal", stdin().lock(), stdout())
            .with_scores(args.show_scores);
        vec![Box::new(player) as Box<dyn Player>]
    } else {
        (1..=config.humans)
            .map(|seat| {
                let name = format!("random {}", seat);
                let player = RandomPlayer::new(&name, StdRng::seed_from_u64(rng.gen()));
                Box::new(player) as Box<dyn Player>
            })
            .collect()
    };

    let mut match_score = MatchScore::default();
    let mut title = String::new();
    for game_idx in 0..num_games {
        let mut game = config.new_game()?;
        title = game.title();
        if args.interactive {
            game.set_user_interface(Box::new(PrintingInterface::new(stdout())));
        } else {
            game.set_user_interface(Box::new(LoggingInterface::new(game_idx)));
        }

        let result = play_game(&mut game, &mut players)?;
        if args.interactive {
            println!("Final board:\n{}", game.board());
        }
        match result {
            GameResult::WonByPlayer { player } => {
                debug!(winner = player, game_idx);
                *match_score.wins.entry(player).or_default() += 1;
            }
            GameResult::Draw => {
                debug!(game_idx, "Draw");
                match_score.draws += 1;
            }
        }
    }

    eprintln!("End result after {} games of {}:", num_games, title);
    for player in 1..=config.num_players() {
        let kind = if player <= config.humans { "human" } else { "bot" };
        eprintln!(
            "- {} wins by player {} ({})",
            match_score.wins.get(&player).copied().unwrap_or(0),
            player,
            kind
        );
    }
    eprintln!("- {} draws", match_score.draws);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
