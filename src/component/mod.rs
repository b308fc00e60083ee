//! Component resolution for changesets via their referenced tickets.

pub mod resolver;

pub use resolver::{ComponentSource, Resolution, resolve_components};
