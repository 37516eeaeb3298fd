//! gradebook-report — Class summary rendering.
//!
//! Turns the statistics and rankings computed by `gradebook-core` into a
//! self-contained HTML page. Nothing here computes metrics of its own.

pub mod html;

pub use html::{generate_html, write_html_report};
