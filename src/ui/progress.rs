//! Flow progress display.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar spanning a whole flow, positioned in sub-steps.
///
/// Totals and positions come from the step accounting, so flows mixing
/// single-question and multi-part steps report honest progress.
pub struct FlowProgress {
    bar: ProgressBar,
    start_time: Instant,
}

impl FlowProgress {
    /// Create a progress bar over `total` sub-steps.
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:24.magenta} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    /// Create a hidden progress bar (for quiet or scripted runs).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            start_time: Instant::now(),
        }
    }

    /// Move the bar to an absolute sub-step position.
    pub fn set_position(&self, position: usize) {
        self.bar.set_position(position as u64);
    }

    /// Remove the bar from the terminal.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }

    /// Elapsed time since the flow started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Format a step counter, e.g. "Step 3 of 10". Positions are 1-based.
pub fn step_counter(current: usize, total: usize) -> String {
    format!("Step {} of {}", current, total)
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counter_is_one_based() {
        assert_eq!(step_counter(1, 10), "Step 1 of 10");
        assert_eq!(step_counter(10, 10), "Step 10 of 10");
    }

    #[test]
    fn format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_secs_f64(5.3)), "5.3s");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }

    #[test]
    fn format_duration_zero() {
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }

    #[test]
    fn hidden_progress_accepts_positions() {
        let progress = FlowProgress::hidden();
        progress.set_position(3);
        progress.clear();
    }

    #[test]
    fn progress_tracks_elapsed() {
        let progress = FlowProgress::hidden();
        std::thread::sleep(Duration::from_millis(10));
        assert!(progress.elapsed() >= Duration::from_millis(10));
    }
}
