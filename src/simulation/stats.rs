//! Aggregate statistics over a batch of games.

use serde::{Deserialize, Serialize};

use crate::game::GameMetrics;

/// z-score of a two-sided 95 % interval.
const Z_95: f64 = 1.96;

/// Win rate and move statistics of a simulation run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games played.
    pub games: usize,

    /// Games won.
    pub wins: usize,

    /// Fraction of games won (0.0 when no games were played).
    pub win_rate: f64,

    /// Mean move count over won games; 0.0 without wins.
    pub avg_moves_win: f64,

    /// Half-width of the 95 % normal-approximation interval on `win_rate`.
    pub ci95_win_rate: f64,

    /// Mean score over all games.
    pub avg_score: f64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_metrics<'a>(metrics: impl IntoIterator<Item = &'a GameMetrics>) -> Self {
        let mut games = 0usize;
        let mut wins = 0usize;
        let mut win_moves = 0u64;
        let mut total_score = 0u64;

        for m in metrics {
            games += 1;
            total_score += u64::from(m.score);
            if m.won {
                wins += 1;
                win_moves += u64::from(m.moves);
            }
        }

        if games == 0 {
            return Self::default();
        }

        let n = games as f64;
        let p = wins as f64 / n;
        Self {
            games,
            wins,
            win_rate: p,
            avg_moves_win: if wins == 0 { 0.0 } else { win_moves as f64 / wins as f64 },
            ci95_win_rate: Z_95 * (p * (1.0 - p) / n).sqrt(),
            avg_score: total_score as f64 / n,
        }
    }

    /// Games not won, including turn-capped and stalled games.
    #[must_use]
    pub fn losses(&self) -> usize {
        self.games - self.wins
    }
}
