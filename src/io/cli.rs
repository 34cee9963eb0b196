//! Command-line interface for solving board files or random scrambles

use crate::io::configuration::{
    DEFAULT_SCRAMBLE_MOVES, DEFAULT_SEED, INCOMPLETE_MESSAGE, INPUT_EXTENSION,
    NO_SOLUTION_MESSAGE,
};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::parser::read_board;
use crate::io::progress::ProgressManager;
use crate::puzzle::board::Board;
use crate::puzzle::scramble::Scrambler;
use crate::search::engine::{
    SearchConfig, SearchEngine, SearchMonitor, SearchOutcome, SilentMonitor,
};
use crate::search::heuristic::Estimator;
use clap::Parser;
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "circle16")]
#[command(
    author,
    version,
    about = "Solve the circular 16-tile puzzle with row and column rotations"
)]
/// Command-line arguments for the solver
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board file, or directory of board files, to solve
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Estimator used to order the search frontier
    #[arg(short, long, value_enum, default_value_t = Estimator::Manhattan)]
    pub estimator: Estimator,

    /// Stop each search after this many node expansions
    #[arg(short = 'x', long)]
    pub max_expansions: Option<usize>,

    /// Stop each search after this many milliseconds
    #[arg(short, long)]
    pub time_limit_ms: Option<u64>,

    /// Solve a randomly scrambled board instead of reading files
    #[arg(long, conflicts_with = "target")]
    pub scramble: bool,

    /// Number of random moves applied by --scramble
    #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_MOVES)]
    pub moves: usize,

    /// Random seed for reproducible scrambles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Print each board before its route
    #[arg(short = 'b', long)]
    pub show_board: bool,

    /// Replay each route and warn if it does not reach the goal
    #[arg(short, long)]
    pub verify: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search parameters selected on the command line
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            estimator: self.estimator,
            max_expansions: self.max_expansions,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
            ..SearchConfig::default()
        }
    }
}

/// Solves the boards named on the command line and renders one line per board
pub struct BoardProcessor {
    cli: Cli,
    engine: SearchEngine,
    progress_manager: Option<ProgressManager>,
}

impl BoardProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let engine = SearchEngine::new(cli.search_config());

        Self {
            cli,
            engine,
            progress_manager,
        }
    }

    /// Solve every requested board, printing and returning the output lines
    ///
    /// # Errors
    ///
    /// Returns an error if no input was requested, the target does not exist,
    /// or a board file cannot be read or parsed. Unsolvable and incomplete
    /// searches are reported as output lines, not errors.
    pub fn process(&mut self) -> Result<Vec<String>> {
        let stdout = std::io::stdout();
        self.process_to(&mut stdout.lock())
    }

    /// Solve every requested board, writing each board's lines to `out` as
    /// soon as its search finishes
    ///
    /// Lines of boards solved before a failing file are already written when
    /// the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::process`], and `FileSystem` if `out`
    /// cannot be written.
    pub fn process_to(&mut self, out: &mut impl Write) -> Result<Vec<String>> {
        if self.cli.scramble {
            let lines = self.process_scramble(self.cli.moves);
            emit(out, &lines)?;
            Ok(lines)
        } else {
            self.process_files(out)
        }
    }

    fn process_scramble(&mut self, moves: usize) -> Vec<String> {
        let (board, applied) = Scrambler::new(self.cli.seed).scramble(moves);
        let applied: Vec<String> = applied.iter().map(ToString::to_string).collect();
        info!("scrambled with seed {}: {}", self.cli.seed, applied.join(" "));

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(1);
            pm.start_file(0, Path::new("scramble"));
        }
        let lines = self.solve_board(&board, None);
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        lines
    }

    fn process_files(&mut self, out: &mut impl Write) -> Result<Vec<String>> {
        let files = self.collect_files()?;
        let batch = self.cli.target.as_ref().is_some_and(|target| target.is_dir());

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut lines = Vec::new();
        for (index, file) in files.iter().enumerate() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, file);
            }
            let board = match read_board(file) {
                Ok(board) => board,
                Err(error) => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.finish();
                    }
                    return Err(error);
                }
            };
            let label = batch.then(|| {
                file.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string()
            });
            let file_lines = self.solve_board(&board, label.as_deref());
            emit(out, &file_lines)?;
            lines.extend(file_lines);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(lines)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let Some(target) = self.cli.target.as_ref() else {
            return Err(invalid_parameter(
                "target",
                &"",
                &"a board file, a directory or --scramble is required",
            ));
        };

        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a board file or a directory",
            ))
        }
    }

    // Allow print for user feedback when a route fails verification
    #[allow(clippy::print_stderr)]
    fn solve_board(&mut self, board: &Board, label: Option<&str>) -> Vec<String> {
        let start_time = Instant::now();
        let mut lines = Vec::new();
        if self.cli.show_board {
            lines.extend(board.to_string().lines().map(ToString::to_string));
        }

        let mut silent = SilentMonitor;
        let monitor: &mut dyn SearchMonitor = match self.progress_manager.as_mut() {
            Some(pm) => pm,
            None => &mut silent,
        };
        let outcome = self.engine.solve_with(board, monitor);

        let rendered = match &outcome {
            SearchOutcome::Solved(solution) => {
                if self.cli.verify && !solution.verify(board) {
                    warn!("route{solution} does not solve the board");
                    if !self.cli.quiet {
                        eprintln!("Warning: route{solution} does not reach the goal");
                    }
                }
                solution.to_string()
            }
            SearchOutcome::Unsolvable => NO_SOLUTION_MESSAGE.to_string(),
            SearchOutcome::Incomplete(cutoff) => format!(
                "{INCOMPLETE_MESSAGE}: {} after {} expansions",
                cutoff.reason, cutoff.expanded
            ),
        };

        if let Some(ref mut pm) = self.progress_manager {
            let summary = outcome.solution().map_or_else(
                || rendered.clone(),
                |solution| format!("{} moves", solution.len()),
            );
            pm.complete_file(&summary, start_time.elapsed());
        }

        lines.push(label.map_or_else(|| rendered.clone(), |name| format!("{name}:{rendered}")));
        lines
    }
}

fn emit(out: &mut impl Write, lines: &[String]) -> Result<()> {
    let write_failed = |source| SolverError::FileSystem {
        path: PathBuf::from("<output>"),
        operation: "write",
        source,
    };
    for line in lines {
        writeln!(out, "{line}").map_err(write_failed)?;
    }
    out.flush().map_err(write_failed)
}
