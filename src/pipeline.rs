//! The digest pipeline: download log, extract, resolve components, render.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::changeset::{Changeset, extract};
use crate::component::{ComponentSource, resolve_components};
use crate::error::{IssueError, TracError};
use crate::report::{bucket_by_component, render_report};
use crate::trac::RevisionRange;

/// Source of the verbose changeset log markup.
///
/// This abstraction allows mocking the Trac server in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Download the log for `range`, returning at most `limit` changesets.
    async fn fetch_log(&self, range: RevisionRange, limit: usize) -> Result<String, TracError>;
}

/// What to digest and how hard to hit the server.
#[derive(Debug, Clone, Copy)]
pub struct DigestRequest {
    pub range: RevisionRange,
    pub limit: usize,
    /// Maximum concurrent ticket lookups; `None` means unbounded.
    pub fan_out: Option<usize>,
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct Digest {
    pub changesets: Vec<Changeset>,
    /// Ticket lookups that failed and were left out of bucketing.
    pub failures: Vec<IssueError>,
    pub report: String,
}

impl Digest {
    pub fn is_empty(&self) -> bool {
        self.changesets.is_empty()
    }

    /// One-line summary for the user.
    pub fn summary(&self) -> String {
        let count = self.changesets.len();
        let sections = bucket_by_component(&self.changesets).len();

        let mut summary = format!(
            "Rendered {} {} in {} {}",
            count,
            if count == 1 { "changeset" } else { "changesets" },
            sections,
            if sections == 1 { "section" } else { "sections" }
        );

        match self.failures.len() {
            0 => {}
            1 => summary.push_str(" (1 issue lookup failed)"),
            n => summary.push_str(&format!(" ({} issue lookups failed)", n)),
        }

        summary
    }
}

/// Run the whole pipeline.
///
/// A failed log download aborts the run. Failed ticket lookups are logged
/// and carried in [`Digest::failures`]; the affected changesets fall back to
/// the "Misc" section.
pub async fn build_digest<L, C>(
    log_source: &L,
    component_source: &C,
    request: &DigestRequest,
) -> Result<Digest, TracError>
where
    L: LogSource + ?Sized,
    C: ComponentSource + ?Sized,
{
    let markup = log_source.fetch_log(request.range, request.limit).await?;

    let changesets = extract(&markup);
    info!("Found {} changesets in {}", changesets.len(), request.range);

    let resolution = resolve_components(changesets, component_source, request.fan_out).await;
    for failure in &resolution.failures {
        warn!("Skipping ticket component: {}", failure);
    }

    let report = render_report(&resolution.changesets);

    Ok(Digest {
        changesets: resolution.changesets,
        failures: resolution.failures,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::resolver::MockComponentSource;

    const LOG: &str = r#"<table class="chglist"><tbody>
        <tr><td class="rev"><a>@11</a></td><td class="author">amy</td></tr>
        <tr><td class="log"><p>Polish toolbar.
Fixes <a class="ticket" href="/ticket/7">#7</a>.</p></td></tr>
        <tr><td class="rev"><a>@10</a></td><td class="author">ben</td></tr>
        <tr><td class="log"><p>Update readme.</p></td></tr>
    </tbody></table>"#;

    fn request() -> DigestRequest {
        DigestRequest {
            range: RevisionRange { from: 10, to: Some(11) },
            limit: 100,
            fan_out: None,
        }
    }

    #[tokio::test]
    async fn test_build_digest() {
        let mut log = MockLogSource::new();
        log.expect_fetch_log()
            .times(1)
            .returning(|_, _| Ok(LOG.to_string()));

        let mut components = MockComponentSource::new();
        components
            .expect_fetch_component()
            .withf(|id| id == "7")
            .returning(|_| Ok("Toolbar".to_string()));

        let digest = build_digest(&log, &components, &request()).await.unwrap();

        assert_eq!(digest.changesets.len(), 2);
        assert!(digest.failures.is_empty());
        assert!(digest.report.contains("### Toolbar\n\n* Polish toolbar. [11] #7\n"));
        assert!(digest.report.contains("### Misc\n\n* Update readme. [10] #\n"));
        assert!(digest.report.ends_with("Thanks to @amy, and @ben for their contributions!\n"));
        assert_eq!(digest.summary(), "Rendered 2 changesets in 2 sections");
    }

    #[tokio::test]
    async fn test_build_digest_log_failure_is_fatal() {
        let mut log = MockLogSource::new();
        log.expect_fetch_log().returning(|_, _| {
            Err(TracError::HttpStatus {
                url: "https://trac.example.org/log/".to_string(),
                status: 503,
            })
        });

        let mut components = MockComponentSource::new();
        components.expect_fetch_component().never();

        let result = build_digest(&log, &components, &request()).await;

        assert!(matches!(result, Err(TracError::HttpStatus { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_summary_reports_failures() {
        let mut log = MockLogSource::new();
        log.expect_fetch_log().returning(|_, _| Ok(LOG.to_string()));

        let mut components = MockComponentSource::new();
        components
            .expect_fetch_component()
            .returning(|id| Err(IssueError::MissingComponent(id.to_string())));

        let digest = build_digest(&log, &components, &request()).await.unwrap();

        assert_eq!(digest.failures.len(), 1);
        assert_eq!(
            digest.summary(),
            "Rendered 2 changesets in 1 section (1 issue lookup failed)"
        );
    }
}
