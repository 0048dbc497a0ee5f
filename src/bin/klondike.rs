//! Klondike command-line driver.
//!
//! Subcommands: `play` (interactive prompt), `simulate` (batch autoplay),
//! `sweep` (every rule order under one column order).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use klondike_autoplay::simulation::write_summary;
use klondike_autoplay::{
    ColumnOrder, Game, GameConfig, MetricsLog, Move, RuleOrder, Simulation, SimulationConfig,
    SimulationError, Strategy, Sweep,
};

#[derive(Parser)]
#[command(author, version, about = "Klondike Solitaire engine and autoplayer", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Play a game at the terminal")]
    Play {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Append final metrics to this log.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    #[command(about = "Autoplay a batch of games", alias = "sim")]
    Simulate {
        /// JSON `SimulationConfig`; flags override its fields.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        runs: Option<usize>,
        #[arg(long)]
        max_turns: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Rule priority, e.g. 21345.
        #[arg(long, default_value = "12345")]
        rules: RuleOrder,
        /// 0-based column scan order, e.g. 6543210.
        #[arg(long, default_value = "0123456")]
        columns: ColumnOrder,
        #[arg(long)]
        parallel: bool,
        #[arg(long)]
        log: Option<PathBuf>,
    },
    #[command(about = "Simulate every rule order and write a summary CSV")]
    Sweep {
        #[arg(long, default_value_t = 100)]
        runs: usize,
        #[arg(long, default_value_t = 100)]
        max_turns: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value = "6543210")]
        columns: ColumnOrder,
        #[arg(long)]
        parallel: bool,
        /// Directory for per-order metrics logs.
        #[arg(long)]
        log_dir: Option<PathBuf>,
        #[arg(long, default_value = "summary.csv")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Play { seed, log } => play(seed, log),
        Command::Simulate {
            config,
            runs,
            max_turns,
            seed,
            rules,
            columns,
            parallel,
            log,
        } => {
            let base = match config {
                Some(path) => SimulationConfig::from_json_file(path),
                None => Ok(SimulationConfig::default()),
            };
            base.and_then(|mut config| {
                if let Some(runs) = runs {
                    config.num_runs = runs;
                }
                if let Some(max_turns) = max_turns {
                    config.max_turns = max_turns;
                }
                if let Some(seed) = seed {
                    config.seed = seed;
                }
                config.parallel |= parallel;
                if log.is_some() {
                    config.log_path = log;
                }
                simulate(config, Strategy::new(rules, columns))
            })
        }
        Command::Sweep {
            runs,
            max_turns,
            seed,
            columns,
            parallel,
            log_dir,
            out,
        } => {
            let config = SimulationConfig::new()
                .with_runs(runs)
                .with_max_turns(max_turns)
                .with_seed(seed)
                .with_parallel(parallel);
            sweep(config, columns, log_dir, out)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

const HELP: &str = "\
Valid commands:
    mv        draw a card from the stock
    wf        waste to foundation
    wt<c>     waste to tableau column c (1-7)
    tf<c>     tableau column c to foundation
    tt<a><b>  tableau column a to tableau column b
    h         show this help
    q         quit";

fn play(seed: u64, log_path: Option<PathBuf>) -> Result<(), SimulationError> {
    let mut game = Game::new(GameConfig::default(), seed)?;
    println!("{HELP}");
    println!("{game}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !game.game_won() {
        print!("Enter a command (type 'h' for help): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let command: String = line?.split_whitespace().collect::<String>().to_lowercase();
        match command.as_str() {
            "h" => println!("{HELP}"),
            "q" => {
                println!("Game exited.");
                break;
            }
            _ => match Move::parse(&command) {
                Ok(mv) => {
                    if let Err(err) = game.try_move(mv) {
                        println!("Error! {err}");
                    }
                    println!("{game}");
                }
                Err(err) => println!("Sorry, that is not a valid command ({err})."),
            },
        }
    }

    if game.game_won() {
        println!("Congratulations! You've won!");
    }
    let metrics = game.final_metrics();
    println!(
        "Final Score: {}\nNum Moves: {}\nGame Duration: {:.2} seconds",
        metrics.score, metrics.moves, metrics.duration
    );

    if let Some(path) = log_path {
        let mut metrics_log = MetricsLog::open_append(path)?;
        metrics_log.append(&metrics)?;
        metrics_log.flush()?;
    }
    Ok(())
}

fn simulate(config: SimulationConfig, strategy: Strategy) -> Result<(), SimulationError> {
    let simulation = Simulation::new(config)?;
    let report = simulation.run(&strategy)?;
    let stats = &report.stats;

    println!(
        "rules {} columns {}: won {}/{} ({:.2}% ± {:.2}%), avg moves of wins {:.1}, avg score {:.1}",
        strategy.rule_order(),
        strategy.column_order(),
        stats.wins,
        stats.games,
        stats.win_rate * 100.0,
        stats.ci95_win_rate * 100.0,
        stats.avg_moves_win,
        stats.avg_score
    );
    Ok(())
}

fn sweep(
    config: SimulationConfig,
    columns: ColumnOrder,
    log_dir: Option<PathBuf>,
    out: PathBuf,
) -> Result<(), SimulationError> {
    let mut sweep = Sweep::new(config, columns);
    if let Some(dir) = log_dir {
        std::fs::create_dir_all(&dir)?;
        sweep = sweep.with_log_dir(dir);
    }

    let mut summaries = sweep.run_all()?;
    write_summary(&out, &summaries)?;

    summaries.sort_by(|a, b| b.stats.win_rate.total_cmp(&a.stats.win_rate));
    if let Some(best) = summaries.first() {
        println!(
            "best rule order {} ({:.2}% wins); summary written to {}",
            best.rule_order,
            best.stats.win_rate * 100.0,
            out.display()
        );
    }
    Ok(())
}
