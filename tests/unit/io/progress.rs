//! Tests for progress display bookkeeping

#[cfg(test)]
mod tests {
    use circle16::io::progress::ProgressManager;
    use circle16::search::engine::{SearchMonitor, SearchStats};
    use std::path::Path;
    use std::time::Duration;

    // Tests completed boards are counted and reset on initialize
    // Verified by skipping the increment in complete_file
    #[test]
    fn test_completion_count() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        pm.start_file(0, Path::new("a.txt"));
        pm.complete_file("1 moves", Duration::from_millis(5));
        pm.start_file(1, Path::new("b.txt"));
        pm.complete_file("no solution", Duration::ZERO);
        assert_eq!(pm.completed(), 2);
        pm.finish();

        pm.initialize(7);
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }

    // Tests the manager accepts search reports before and after setup
    // Verified by unwrapping the spinner in report
    #[test]
    fn test_monitor_reports() {
        let mut pm = ProgressManager::default();
        let stats = SearchStats {
            expanded: 10,
            ..SearchStats::default()
        };
        pm.report(&stats);
        pm.initialize(1);
        pm.report(&stats);
        pm.finish();
        assert_eq!(pm.completed(), 0);
    }
}
