//! Batch autoplay: one fresh game per run, driven by a policy until it is
//! won, stalls or runs out of turns.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::{GameConfig, GameRng};
use crate::error::SimulationError;
use crate::game::{Game, GameEvent, GameMetrics};
use crate::strategy::{Decision, Policy};

use super::config::SimulationConfig;
use super::metrics_log::MetricsLog;
use super::stats::SimulationStats;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// All foundation stacks are complete.
    Won,
    /// The decision-cycle budget ran out.
    TurnCap,
    /// Stock and waste are empty and no rule applies.
    Stalled,
}

/// Result of a single simulated game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Shuffle seed of the deal.
    pub seed: u64,
    pub metrics: GameMetrics,
    /// Decision cycles used.
    pub cycles: u32,
    pub termination: Termination,
    /// Diagnostic events; empty unless diagnostics are enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<GameEvent>,
}

/// Every outcome in run order plus their aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub outcomes: Vec<GameOutcome>,
    pub stats: SimulationStats,
}

impl SimulationReport {
    /// Seeds of the games that were won.
    pub fn winning_seeds(&self) -> impl Iterator<Item = u64> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.termination == Termination::Won)
            .map(|outcome| outcome.seed)
    }
}

/// Simulation driver.
///
/// Games share nothing, so a parallel run plays them on the rayon pool and
/// only merges results afterwards. Per-game seeds are forked from the base
/// seed up front, which keeps parallel and sequential runs identical.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    game_config: GameConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let game_config = config.game_config();
        game_config.validate()?;
        Ok(Self { config, game_config })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Per-game seeds for this configuration, in run order.
    #[must_use]
    pub fn seeds(&self) -> Vec<u64> {
        GameRng::new(self.config.seed).fork_seeds(self.config.num_runs)
    }

    /// Drive `game` with `policy` until it ends.
    pub fn play<P: Policy + ?Sized>(&self, policy: &P, game: &mut Game) -> Termination {
        self.play_counted(policy, game).0
    }

    fn play_counted<P: Policy + ?Sized>(&self, policy: &P, game: &mut Game) -> (Termination, u32) {
        let mut cycles = 0;
        loop {
            if game.game_won() {
                return (Termination::Won, cycles);
            }
            if cycles >= self.config.max_turns {
                return (Termination::TurnCap, cycles);
            }
            cycles += 1;
            if policy.decide(game) == Decision::Stuck {
                return (Termination::Stalled, cycles);
            }
        }
    }

    /// Deal a game from `seed` and play it out.
    pub fn run_game<P: Policy + ?Sized>(&self, policy: &P, seed: u64) -> GameOutcome {
        let deck = Deck::new(self.game_config.deck_count, &mut GameRng::new(seed));
        let mut game = Game::deal(self.game_config.clone(), deck);

        let (termination, cycles) = self.play_counted(policy, &mut game);
        let metrics = game.final_metrics();
        log::debug!(
            "seed {seed}: {termination:?} after {cycles} cycles, score {}, {} moves",
            metrics.score,
            metrics.moves
        );

        GameOutcome {
            seed,
            metrics,
            cycles,
            termination,
            events: game.events().to_vec(),
        }
    }

    /// Play `num_runs` games, log their metrics and aggregate them.
    pub fn run<P: Policy + ?Sized>(&self, policy: &P) -> Result<SimulationReport, SimulationError> {
        let seeds = self.seeds();
        log::info!(
            "simulating {} games (max {} turns, seed {}, {})",
            seeds.len(),
            self.config.max_turns,
            self.config.seed,
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let outcomes: Vec<GameOutcome> = if self.config.parallel {
            seeds.par_iter().map(|&seed| self.run_game(policy, seed)).collect()
        } else {
            seeds.iter().map(|&seed| self.run_game(policy, seed)).collect()
        };

        if let Some(path) = &self.config.log_path {
            let mut metrics_log = MetricsLog::create(path)?;
            for outcome in &outcomes {
                metrics_log.append(&outcome.metrics)?;
            }
            metrics_log.flush()?;
        }

        let stats = SimulationStats::from_metrics(outcomes.iter().map(|outcome| &outcome.metrics));
        log::info!(
            "won {}/{} ({:.1}% ± {:.1}%)",
            stats.wins,
            stats.games,
            stats.win_rate * 100.0,
            stats.ci95_win_rate * 100.0
        );

        let stalled = outcomes
            .iter()
            .filter(|outcome| outcome.termination == Termination::Stalled)
            .count();
        if stalled > 0 {
            log::warn!("{stalled} game(s) stalled with an empty stock");
        }

        Ok(SimulationReport { outcomes, stats })
    }
}
