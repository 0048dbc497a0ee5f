//! Rule-order sweep: every permutation of the five rules under one column
//! order, one summary line per permutation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::strategy::{ColumnOrder, RuleOrder, Strategy};

use super::config::SimulationConfig;
use super::runner::Simulation;
use super::stats::SimulationStats;

/// Summary CSV header.
pub const SUMMARY_HEADER: &str =
    "log_file,num_runs,num_turns,rule_order,col_order,avg_win_rate,avg_moves_win,ci95_win_rate";

/// Aggregate of one rule/column configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Per-game metrics log, if one was written.
    pub log_file: Option<PathBuf>,
    pub num_runs: usize,
    pub num_turns: u32,
    pub rule_order: RuleOrder,
    pub col_order: ColumnOrder,
    pub stats: SimulationStats,
}

impl SweepSummary {
    /// One summary CSV line matching `SUMMARY_HEADER`.
    #[must_use]
    pub fn csv_line(&self) -> String {
        let log_file = self
            .log_file
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        format!(
            "{},{},{},{},{},{},{},{}",
            log_file,
            self.num_runs,
            self.num_turns,
            self.rule_order,
            self.col_order,
            self.stats.win_rate,
            self.stats.avg_moves_win,
            self.stats.ci95_win_rate
        )
    }
}

/// Runs the same simulation under many rule orders.
#[derive(Clone, Debug)]
pub struct Sweep {
    config: SimulationConfig,
    columns: ColumnOrder,
    log_dir: Option<PathBuf>,
}

impl Sweep {
    /// Any `log_path` in `config` is ignored; per-order logs go to
    /// `with_log_dir` instead.
    pub fn new(config: SimulationConfig, columns: ColumnOrder) -> Self {
        Self {
            config: SimulationConfig { log_path: None, ..config },
            columns,
            log_dir: None,
        }
    }

    /// Write one metrics log per rule order into `dir`.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Log path for a rule order, e.g. `runs_auto_basic_100_100_12345_6543210.log`.
    fn log_file(&self, rules: &RuleOrder) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| {
            dir.join(format!(
                "runs_auto_basic_{}_{}_{}_{}.log",
                self.config.num_runs, self.config.max_turns, rules, self.columns
            ))
        })
    }

    /// Simulate one rule order.
    pub fn run_order(&self, rules: RuleOrder) -> Result<SweepSummary, SimulationError> {
        let log_file = self.log_file(&rules);
        let mut config = self.config.clone();
        config.log_path = log_file.clone();

        let strategy = Strategy::new(rules.clone(), self.columns.clone());
        let report = Simulation::new(config)?.run(&strategy)?;

        Ok(SweepSummary {
            log_file,
            num_runs: self.config.num_runs,
            num_turns: self.config.max_turns,
            rule_order: rules,
            col_order: self.columns.clone(),
            stats: report.stats,
        })
    }

    /// Simulate every rule order, in lexicographic order.
    pub fn run_all(&self) -> Result<Vec<SweepSummary>, SimulationError> {
        let orders = RuleOrder::all_permutations();
        log::info!("sweeping {} rule orders with columns {}", orders.len(), self.columns);
        orders.into_iter().map(|rules| self.run_order(rules)).collect()
    }
}

/// Write `summaries` as CSV with `SUMMARY_HEADER`.
pub fn write_summary(path: impl AsRef<Path>, summaries: &[SweepSummary]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{SUMMARY_HEADER}")?;
    for summary in summaries {
        writeln!(writer, "{}", summary.csv_line())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_line_matches_header() {
        let summary = SweepSummary {
            log_file: Some(PathBuf::from("logs/run.log")),
            num_runs: 10,
            num_turns: 50,
            rule_order: RuleOrder::default(),
            col_order: ColumnOrder::reversed(),
            stats: SimulationStats {
                games: 10,
                wins: 2,
                win_rate: 0.2,
                avg_moves_win: 90.5,
                ci95_win_rate: 0.25,
                avg_score: 100.0,
            },
        };

        let line = summary.csv_line();
        assert_eq!(line, "logs/run.log,10,50,12345,6543210,0.2,90.5,0.25");
        assert_eq!(line.split(',').count(), SUMMARY_HEADER.split(',').count());
    }

    #[test]
    fn test_run_order_writes_named_log() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimulationConfig::new().with_runs(3).with_max_turns(30);
        let sweep = Sweep::new(config, ColumnOrder::reversed()).with_log_dir(dir.path());

        let summary = sweep.run_order("21345".parse().unwrap()).unwrap();
        let log_file = summary.log_file.clone().unwrap();

        assert_eq!(
            log_file.file_name().unwrap().to_str().unwrap(),
            "runs_auto_basic_3_30_21345_6543210.log"
        );
        let text = std::fs::read_to_string(&log_file).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(summary.stats.games, 3);
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let sweep = Sweep::new(SimulationConfig::new().with_runs(2).with_max_turns(10), ColumnOrder::default());
        let summaries = vec![sweep.run_order(RuleOrder::default()).unwrap()];

        write_summary(&path, &summaries).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], SUMMARY_HEADER);
        assert!(lines[1].starts_with(",2,10,12345,0123456,"));
    }
}
