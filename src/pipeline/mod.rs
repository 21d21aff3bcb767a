//! Per-file translation pipelines.

mod tabular;
mod text;

pub use tabular::translate_table;
pub use text::translate_file;
