//! Concurrent ticket lookups that attach components to changesets.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::changeset::Changeset;
use crate::error::IssueError;

/// Source of a ticket's component name.
///
/// This abstraction allows mocking the Trac server in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentSource: Send + Sync {
    /// Look up the component of the ticket with the given id.
    async fn fetch_component(&self, issue_id: &str) -> Result<String, IssueError>;
}

/// Changesets with their components attached, plus the lookups that failed.
#[derive(Debug)]
pub struct Resolution {
    pub changesets: Vec<Changeset>,
    pub failures: Vec<IssueError>,
}

/// Attach components to every changeset from its related tickets.
///
/// Each distinct ticket id is looked up once, with at most `fan_out` lookups
/// in flight (`None` means no limit). Components are appended in `related`
/// order regardless of which lookup finishes first, so the first component
/// of a changeset is always that of its earliest resolvable reference.
///
/// A failed or empty lookup is recorded in [`Resolution::failures`] and
/// contributes nothing; it never aborts the run.
pub async fn resolve_components<S>(
    mut changesets: Vec<Changeset>,
    source: &S,
    fan_out: Option<usize>,
) -> Resolution
where
    S: ComponentSource + ?Sized,
{
    let issue_ids = unique_issue_ids(&changesets);
    let limit = fan_out.unwrap_or(issue_ids.len()).max(1);

    debug!(
        "Looking up {} tickets with fan-out {}",
        issue_ids.len(),
        limit
    );

    let results: Vec<(String, Result<String, IssueError>)> = stream::iter(issue_ids)
        .map(|id| async move {
            let result = source.fetch_component(&id).await;
            (id, result)
        })
        .buffered(limit)
        .collect()
        .await;

    let mut components = HashMap::new();
    let mut failures = Vec::new();

    for (id, result) in results {
        match result {
            Ok(name) if !name.trim().is_empty() => {
                components.insert(id, name);
            }
            Ok(_) => failures.push(IssueError::MissingComponent(id)),
            Err(e) => failures.push(e),
        }
    }

    for changeset in &mut changesets {
        let resolved = changeset
            .related
            .iter()
            .filter_map(|id| components.get(id).cloned());
        changeset.components.extend(resolved);
    }

    Resolution {
        changesets,
        failures,
    }
}

/// Distinct ticket ids across all changesets, in order of first reference.
fn unique_issue_ids(changesets: &[Changeset]) -> Vec<String> {
    let mut seen = HashSet::new();
    changesets
        .iter()
        .flat_map(|c| c.related.iter())
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
