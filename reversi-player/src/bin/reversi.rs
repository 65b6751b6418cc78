use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::Rng;
use reversi_player::{play_game, run_self_play, MatchConfig, SourceKind};

#[derive(Parser, Debug)]
#[command(name = "reversi", about = "Play Reversi at the terminal or run self-play matches")]
struct Cli {
    /// TOML file with match settings; command-line flags override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a single game, printing the final board.
    Play {
        #[command(flatten)]
        sides: SideArgs,
    },
    /// Play many games in parallel and print the totals.
    Selfplay {
        #[command(flatten)]
        sides: SideArgs,

        #[arg(long)]
        games: Option<usize>,

        /// Worker threads; 0 lets rayon decide.
        #[arg(long)]
        threads: Option<usize>,
    },
}

#[derive(Args, Debug)]
struct SideArgs {
    #[arg(long, value_enum)]
    green: Option<SourceKind>,

    #[arg(long, value_enum)]
    red: Option<SourceKind>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_rejections: Option<u32>,
}

impl SideArgs {
    fn apply(&self, config: &mut MatchConfig) {
        if let Some(green) = self.green {
            config.green = green;
        }
        if let Some(red) = self.red {
            config.red = red;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_rejections) = self.max_rejections {
            config.max_rejections = max_rejections;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => MatchConfig::load_or_default(path)?,
        None => MatchConfig::default(),
    };

    match cli.command {
        Command::Play { sides } => {
            sides.apply(&mut config);
            config.games = 1;
            config.validate()?;

            let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
            let record = play_game(&config, seed)?;
            println!("{}", record.board);
            println!("{}", record.transcript());
            println!("{}", record.outcome);
        }
        Command::Selfplay {
            sides,
            games,
            threads,
        } => {
            sides.apply(&mut config);
            if let Some(games) = games {
                config.games = games;
            }
            if let Some(threads) = threads {
                config.threads = threads;
            }
            config.validate()?;

            let summary = run_self_play(&config)?;
            println!("{}", summary);
        }
    }

    Ok(())
}
