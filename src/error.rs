//! Error types for tracnotes modules using thiserror.

use thiserror::Error;

/// Errors from talking to the Trac server.
#[derive(Error, Debug)]
pub enum TracError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

/// Errors from looking up a single issue's component.
///
/// These never abort a run; the resolver collects them and the caller logs them.
#[derive(Error, Debug)]
pub enum IssueError {
    #[error("Failed to fetch ticket #{id}: {source}")]
    Fetch {
        id: String,
        #[source]
        source: TracError,
    },

    #[error("Ticket #{0} has no component")]
    MissingComponent(String),
}

/// Errors from parsing a revision range.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid revision '{0}'. Expected a number like 12345, r12345 or @12345")]
    InvalidRevision(String),

    #[error("Revision range is reversed: {from} is newer than {to}")]
    Reversed { from: u64, to: u64 },
}

/// Errors from resolving runtime configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid Trac URL '{0}'. Expected an http:// or https:// URL")]
    InvalidTracUrl(String),

    #[error("--fan-out must be at least 1")]
    ZeroFanOut,

    #[error("--limit must be at least 1")]
    ZeroLimit,
}
