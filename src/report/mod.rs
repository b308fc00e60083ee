//! Markdown digest rendering.

pub mod credits;
pub mod render;

pub use credits::{collect_contributors, format_credit_line};
pub use render::{Bucket, MISC_BUCKET, bucket_by_component, render_report, render_sections};
