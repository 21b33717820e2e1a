//! Services around the list view
//!
//! - Data set loading (bundled or from a file)
//! - Cell formatting
//! - CSV export

pub mod dataset;
pub mod export;
pub mod format;

pub use dataset::{bundled_colleges, load_colleges};
pub use export::export_csv;
pub use format::{format_optional_inr, ranking_ratio, ratio_bar};
