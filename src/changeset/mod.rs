//! Changeset extraction and message cleanup.

pub mod extract;
pub mod normalize;

pub use extract::{Changeset, clean_description, extract, format_revision};
