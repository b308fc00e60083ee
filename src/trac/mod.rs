//! Trac server access: revision ranges, log download and ticket lookups.

pub mod client;
pub mod range;
pub mod ticket;

pub use client::TracClient;
pub use range::RevisionRange;
pub use ticket::parse_ticket_component;
