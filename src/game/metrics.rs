//! Final per-game metrics handed to the metrics log.

use serde::{Deserialize, Serialize};

/// Score, move count, wall-clock duration and win flag of one game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMetrics {
    pub score: u32,
    pub moves: u32,
    /// Seconds from deal to the first metrics query.
    pub duration: f64,
    pub won: bool,
}

impl GameMetrics {
    /// Header line of a metrics log.
    pub const LOG_HEADER: &'static str = "score,num_moves,game_duration,did_win";

    /// Win flag as written to the log.
    #[must_use]
    pub fn win_indicator(&self) -> u8 {
        u8::from(self.won)
    }

    /// `score,moves,duration,win` with the win flag as 0/1.
    #[must_use]
    pub fn log_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.score,
            self.moves,
            self.duration,
            self.win_indicator()
        )
    }
}
