use indicatif::{ProgressBar, ProgressStyle};

/// A terminal progress bar for batch runs.
///
/// Automatically clears itself when dropped (RAII pattern).
pub struct BatchProgress {
    progress_bar: ProgressBar,
}

impl BatchProgress {
    /// Creates a progress bar sized for `total` files.
    #[allow(clippy::unwrap_used)]
    pub fn new(total: u64) -> Self {
        let progress_bar = ProgressBar::new(total);
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:30}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=> "),
        );

        Self { progress_bar }
    }

    /// Shows the file currently being translated.
    pub fn set_current_file(&self, name: &str) {
        self.progress_bar.set_message(name.to_string());
    }

    /// Marks one file as finished.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Stops the bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
