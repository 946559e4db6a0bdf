//! Terminal renderings of the calculator output.
//!
//! Views draw only from `margin_core::presentation` shapes, formatter
//! output and the fixed `margin_core::guide` text; they never read a
//! `CalculationResult` directly.

pub mod charts;
pub mod guide;
pub mod summary;

pub use charts::{CHART_WIDTH, render_bars, render_donut, render_gauge};
pub use guide::render_guide;
pub use summary::{render_fields, render_summary};
