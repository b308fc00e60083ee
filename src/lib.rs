//! tracnotes - A CLI tool that builds a categorized changelog digest from a Trac changeset log.
//!
//! # Overview
//!
//! tracnotes downloads the verbose revision log for a range of revisions,
//! extracts one record per changeset (revision, author, cleaned message,
//! referenced tickets, credited contributors), looks up each referenced
//! ticket's component, and renders a markdown digest grouped by component
//! with a closing "thanks" line for everyone involved.

pub mod changeset;
pub mod component;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod trac;

// Re-export commonly used types
pub use changeset::Changeset;
pub use component::{ComponentSource, Resolution};
pub use config::Config;
pub use error::{ConfigError, IssueError, RangeError, TracError};
pub use pipeline::{Digest, DigestRequest, LogSource, build_digest};
pub use trac::{RevisionRange, TracClient};
