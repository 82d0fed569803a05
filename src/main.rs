use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use othello_engine::core::{Board, BoardSnapshot, Color, Position};
use othello_engine::player::{make_move, AIConfig, PlayMode};
use othello_engine::selfplay::{run_selfplay, SelfPlayConfig};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: log::Level,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a move for one side of a saved board
    Move {
        /// JSON snapshot (`{"rows": [...]}`) or plain text, one row per line
        #[arg(long)]
        board: PathBuf,
        /// B or W
        #[arg(long)]
        color: Color,
        #[arg(long, default_value = "ai_config.json")]
        config: PathBuf,
        /// 1 = manual, 2 = random, 3 = intelligent
        #[arg(long)]
        mode: Option<u8>,
        /// Position for manual mode, e.g. `C,D`
        #[arg(long)]
        at: Option<Position>,
        #[arg(long)]
        depth: Option<usize>,
        #[arg(long)]
        time_ms: Option<u64>,
        /// Leeway taken off `--time-ms` (default from the config)
        #[arg(long, requires = "time_ms")]
        margin_ms: Option<u64>,
    },
    /// Engine-vs-engine games from the standard opening
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = 8)]
        rows: usize,
        #[arg(long, default_value_t = 8)]
        cols: usize,
        #[arg(long, default_value = "ai_config.json")]
        config: PathBuf,
        #[arg(long)]
        save: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    match args.command {
        Command::Move {
            board,
            color,
            config,
            mode,
            at,
            depth,
            time_ms,
            margin_ms,
        } => {
            let mut config = AIConfig::load_or_default(&config);
            if let Some(code) = mode {
                config.search.play_mode = PlayMode::try_from(code)?;
            }
            if let Some(depth) = depth {
                config.search.max_depth = depth;
            }
            if let Some(ms) = time_ms {
                config.search.set_time_limit(ms, margin_ms);
            }
            run_move(&board, color, &config, at)
        }
        Command::Selfplay {
            games,
            rows,
            cols,
            config,
            save,
        } => {
            let ai = AIConfig::load_or_default(&config);
            let stats = run_selfplay(&SelfPlayConfig {
                num_games: games,
                rows,
                cols,
                black: ai.clone(),
                white: ai,
                save_kifus: save,
                ..SelfPlayConfig::default()
            })?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
    }
}

fn run_move(
    board_path: &Path,
    color: Color,
    config: &AIConfig,
    at: Option<Position>,
) -> anyhow::Result<()> {
    let board = load_board(board_path)?;
    info!(
        "{}x{} board, {} to move, mode {:?}",
        board.rows(),
        board.cols(),
        color,
        config.search.play_mode
    );

    match make_move(&board, color, config, at)? {
        Some(placement) => {
            println!("{} chooses {}", color, placement.position);
            print!("{}", placement.board);
        }
        None => println!("no move"),
    }
    Ok(())
}

fn load_board(path: &Path) -> anyhow::Result<Board> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading board from {}", path.display()))?;
    if text.trim_start().starts_with('{') {
        let snapshot: BoardSnapshot = serde_json::from_str(&text)?;
        return Ok(Board::try_from(snapshot)?);
    }
    let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    Ok(othello_engine::core::setup_from_strings(&rows)?)
}
