//! Progress display for searches, with a batch bar for large file sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use crate::search::engine::{SearchMonitor, SearchStats};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display while boards are solved one after another
///
/// A spinner follows the running search; once more files are queued than
/// [`MAX_INDIVIDUAL_PROGRESS_BARS`], a batch bar counts finished files too.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    search_bar: Option<ProgressBar>,
    file_count: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Boards: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            search_bar: None,
            file_count: 0,
            completed: 0,
        }
    }

    /// Prepare the display for `file_count` boards
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        self.completed = 0;

        // Switch to batch mode for large file sets
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let search_bar = ProgressBar::new_spinner();
        search_bar.set_style(SEARCH_STYLE.clone());
        self.search_bar = Some(self.multi_progress.add(search_bar));
    }

    /// Point the spinner at a new board
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if let Some(ref bar) = self.search_bar {
            bar.set_prefix(format!("{}/{} {display_name}", index + 1, self.file_count));
            bar.set_message("searching");
            bar.reset_elapsed();
        }
    }

    /// Mark a board as finished with a one-line summary
    pub fn complete_file(&mut self, summary: &str, elapsed: Duration) {
        self.completed += 1;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(ref bar) = self.search_bar {
            bar.set_message(format!("✓ {summary} in {:.2}s", elapsed.as_secs_f64()));
        }
    }

    /// Number of boards finished since the last `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message(format!("{} boards processed", self.completed()));
        }
        if let Some(ref bar) = self.search_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}

impl SearchMonitor for ProgressManager {
    fn report(&mut self, stats: &SearchStats) {
        if let Some(ref bar) = self.search_bar {
            bar.set_message(format!(
                "{} expanded, {} queued, {} boards seen",
                stats.expanded, stats.frontier_len, stats.boards_seen
            ));
            bar.tick();
        }
    }
}
