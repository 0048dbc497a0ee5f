//! Batch simulation of autoplayed games.
//!
//! ## Key Types
//!
//! - `SimulationConfig`: run count, turn budget, base seed, parallelism, log path
//! - `Simulation`: plays one fresh game per run with a `Policy`
//! - `GameOutcome` / `SimulationReport`: per-game results and their aggregate
//! - `MetricsLog`: CSV log of `GameMetrics`
//! - `Sweep`: every rule order under a fixed column order

pub mod config;
pub mod metrics_log;
pub mod runner;
pub mod stats;
pub mod sweep;

pub use config::SimulationConfig;
pub use metrics_log::MetricsLog;
pub use runner::{GameOutcome, Simulation, SimulationReport, Termination};
pub use stats::SimulationStats;
pub use sweep::{write_summary, Sweep, SweepSummary, SUMMARY_HEADER};
