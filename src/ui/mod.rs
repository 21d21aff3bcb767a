//! Terminal UI components (progress bar, colors).

mod progress;
mod theme;

pub use progress::BatchProgress;
pub use theme::Style;
