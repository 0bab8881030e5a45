//! Progress display for simulation runs and analysis sweeps

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Runs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress bar spanning the generation cap of one run
pub struct RunProgress {
    bar: ProgressBar,
}

impl RunProgress {
    /// Create a bar for a run of at most `max_generations` steps
    pub fn new(max_generations: usize, label: &str) -> Self {
        let bar = ProgressBar::new(max_generations as u64);
        bar.set_style(GENERATION_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Report the generation the run has reached
    pub fn update(&self, generation: u64) {
        self.bar.set_position(generation.saturating_sub(1));
    }

    /// Finish with a closing status line
    pub fn finish(&self, status: &str) {
        self.bar.finish_with_message(status.to_string());
    }
}

/// Progress bar for the analysis sweep over the pattern catalog
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar spanning the number of analysis runs
    pub fn new(total_runs: usize) -> Self {
        let bar = ProgressBar::new(total_runs as u64);
        bar.set_style(SWEEP_STYLE.clone());
        Self { bar }
    }

    /// Mark one run as finished
    pub fn complete_run(&self) {
        self.bar.inc(1);
    }

    /// Clear the bar once the sweep is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
