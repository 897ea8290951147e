//! Terminal progress display for frame rendering and export

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} frames {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the frames of a run
///
/// A hidden bar is used when progress output is suppressed, so callers never
/// need to branch on quiet mode.
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Create a visible progress bar for `total` frames
    pub fn new(total: u64, label: &str) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total);
        Self { bar }
    }

    /// Report that a frame finished rendering
    pub fn frame_done(&self, mode_name: &str) {
        self.bar.set_message(mode_name.to_string());
        self.bar.inc(1);
    }

    /// Frames reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Show an export step in the message slot
    pub fn exporting(&self, what: &str) {
        self.bar.set_message(format!("writing {what}"));
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
