use crate::core::{standard_board, Color};
use crate::game::{Game, GameOutcome, KifuData};
use crate::player::{build_controller, AIConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub rows: usize,
    pub cols: usize,
    pub black: AIConfig,
    pub white: AIConfig,
    pub save_kifus: bool,
    pub kifu_dir: PathBuf,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            rows: 8,
            cols: 8,
            black: AIConfig::default(),
            white: AIConfig::default(),
            save_kifus: false,
            kifu_dir: PathBuf::from("selfplay_kifu"),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Color>,
    pub black_discs: usize,
    pub white_discs: usize,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub board_size: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Color::Black) => self.black_wins += 1,
            Some(Color::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

/// Plays `num_games` independent games in parallel. Each search stays single-threaded.
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let board = standard_board(config.rows, config.cols)?;
    let mut stats = SelfPlayStats::new();
    stats.board_size = format!("{}x{}", config.rows, config.cols);

    let finished: Vec<anyhow::Result<(GameResult, KifuData)>> = (1..=config.num_games)
        .into_par_iter()
        .map(|game_num| -> anyhow::Result<(GameResult, KifuData)> {
            let black = build_controller(Color::Black, &config.black, None)?;
            let white = build_controller(Color::White, &config.white, None)?;

            let start_time = Instant::now();
            let mut game = Game::new(board.clone());
            let outcome = game.play(black.as_ref(), white.as_ref())?;
            let elapsed = start_time.elapsed();

            log::info!(
                "Game {}/{}: {} ({} moves, {:.1}s)",
                game_num,
                config.num_games,
                describe(&outcome),
                outcome.moves,
                elapsed.as_secs_f64()
            );

            let result = GameResult {
                winner: outcome.winner,
                black_discs: outcome.black,
                white_discs: outcome.white,
                moves: outcome.moves,
                time_ms: elapsed.as_millis(),
            };
            Ok((result, game.kifu()))
        })
        .collect();

    for (idx, game) in finished.into_iter().enumerate() {
        let (result, kifu) = game?;
        if config.save_kifus {
            save_kifu(&config.kifu_dir, &kifu, idx + 1)?;
        }
        stats.add_result(result);
    }

    log::info!(
        "Self-play done: Black {} / White {} / Draw {} over {} games (avg {:.1} moves, {:.1}s)",
        stats.black_wins,
        stats.white_wins,
        stats.draws,
        stats.total_games,
        stats.avg_moves,
        stats.avg_time_ms / 1000.0
    );
    Ok(stats)
}

fn describe(outcome: &GameOutcome) -> String {
    match outcome.winner {
        Some(Color::Black) => format!("Black wins {} to {}", outcome.black, outcome.white),
        Some(Color::White) => format!("White wins {} to {}", outcome.white, outcome.black),
        None => format!("Tie at {} each", outcome.black),
    }
}

fn save_kifu(dir: &Path, kifu: &KifuData, game_num: usize) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let filename = dir.join(format!(
        "game_{:04}_{}.json",
        game_num,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, kifu)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayMode;

    fn random_config() -> AIConfig {
        let mut config = AIConfig::fixed_depth(1);
        config.search.play_mode = PlayMode::Random;
        config
    }

    #[test]
    fn test_stats_add_up() {
        let config = SelfPlayConfig {
            num_games: 6,
            rows: 4,
            cols: 4,
            black: AIConfig::fixed_depth(2),
            white: random_config(),
            save_kifus: false,
            ..SelfPlayConfig::default()
        };
        let stats = run_selfplay(&config).unwrap();
        assert_eq!(stats.total_games, 6);
        assert_eq!(stats.black_wins + stats.white_wins + stats.draws, 6);
        assert_eq!(stats.games.len(), 6);
        assert_eq!(stats.board_size, "4x4");
        assert!(stats.avg_moves > 0.0);
    }

    #[test]
    fn test_manual_mode_cannot_self_play() {
        let mut manual = AIConfig::default();
        manual.search.play_mode = PlayMode::Manual;
        let config = SelfPlayConfig {
            num_games: 1,
            rows: 4,
            cols: 4,
            black: manual,
            white: random_config(),
            ..SelfPlayConfig::default()
        };
        assert!(run_selfplay(&config).is_err());
    }

    #[test]
    fn test_kifu_written_to_disk() {
        let dir = std::env::temp_dir().join(format!("othello_kifu_{}", std::process::id()));
        let kifu = KifuData {
            initial: standard_board(4, 4).unwrap(),
            moves: Vec::new(),
        };
        let path = save_kifu(&dir, &kifu, 1).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let back: KifuData = serde_json::from_str(&text).unwrap();
        assert_eq!(back.initial, kifu.initial);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
