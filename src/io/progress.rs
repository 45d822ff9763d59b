//! Batch progress tracking for directory scans

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress display for checking many map files
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Set the number of files that will be processed
    pub fn initialize(&mut self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
    }

    /// Show the file currently being checked
    pub fn start_file(&self, path: &Path) {
        let display_name = path.file_name().unwrap_or_default().to_string_lossy();
        self.bar.set_message(display_name.to_string());
    }

    /// Advance the bar past the current file
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Number of files reported as complete so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the progress display, summarizing `failed` files
    pub fn finish(&self, failed: usize) {
        let message = if failed == 0 {
            "All maps valid".to_string()
        } else {
            format!("{failed} failed")
        };
        self.bar.finish_with_message(message);
    }
}
