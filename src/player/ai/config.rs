use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// How a move is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// A caller-supplied position, checked against the legal moves
    Manual,
    /// Uniformly random legal move
    Random,
    /// Alpha-beta search
    Intelligent,
}

impl TryFrom<u8> for PlayMode {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PlayMode::Manual),
            2 => Ok(PlayMode::Random),
            3 => Ok(PlayMode::Intelligent),
            other => Err(EngineError::UnknownPlayMode(other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub corner_value: i32,
    pub edge_value: i32,
    pub single_flip_value: i32,
    pub win_value: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub play_mode: PlayMode,
    /// Fixed search depth, and the deepening cap
    pub max_depth: usize,
    /// First depth tried by iterative deepening
    pub min_depth: usize,
    pub iterative_deepening: bool,
    /// Wall-clock allowance per move. `None` searches without a time limit.
    pub max_time_ms: Option<u64>,
    /// Leeway subtracted from `max_time_ms` before the search is cut off
    pub safety_margin_ms: u64,
}

impl SearchConfig {
    /// Time after which the search stops expanding, or `None` when unlimited.
    pub fn time_budget(&self) -> Option<Duration> {
        self.max_time_ms
            .map(|ms| Duration::from_millis(ms.saturating_sub(self.safety_margin_ms)))
    }

    /// Replaces the per-move allowance, and the margin when one is given.
    pub fn set_time_limit(&mut self, max_time_ms: u64, safety_margin_ms: Option<u64>) {
        self.max_time_ms = Some(max_time_ms);
        if let Some(margin) = safety_margin_ms {
            self.safety_margin_ms = margin;
        }
        if self.safety_margin_ms >= max_time_ms {
            log::warn!(
                "safety margin {}ms leaves nothing of {}ms, searching one ply only",
                self.safety_margin_ms,
                max_time_ms
            );
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            corner_value: 5000,
            edge_value: 50,
            single_flip_value: 10,
            win_value: 100000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            play_mode: PlayMode::Intelligent,
            max_depth: 8,
            min_depth: 1,
            iterative_deepening: true,
            max_time_ms: Some(60_000),
            safety_margin_ms: 3_000,
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl AIConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Falling back to default AI config: {}", e);
            Self::default()
        })
    }

    /// Depths must be at least 1 and weights non-negative. Nothing else is checked.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.search.max_depth < 1 {
            return Err(EngineError::InvalidConfig("max_depth must be >= 1".into()));
        }
        if self.search.min_depth < 1 {
            return Err(EngineError::InvalidConfig("min_depth must be >= 1".into()));
        }
        let e = &self.evaluation;
        for (name, value) in [
            ("corner_value", e.corner_value),
            ("edge_value", e.edge_value),
            ("single_flip_value", e.single_flip_value),
            ("win_value", e.win_value),
        ] {
            if value < 0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Fixed-depth search with no time limit.
    pub fn fixed_depth(depth: usize) -> Self {
        let mut config = Self::default();
        config.search.max_depth = depth;
        config.search.iterative_deepening = false;
        config.search.max_time_ms = None;
        config
    }
}
