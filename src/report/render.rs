//! Grouping changesets by component and rendering the markdown digest.

use std::collections::HashMap;

use crate::changeset::Changeset;

use super::credits::{collect_contributors, format_credit_line};

/// Section name for changesets without a resolved component.
pub const MISC_BUCKET: &str = "Misc";

/// Changesets sharing the same primary component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    pub name: &'a str,
    pub changesets: Vec<&'a Changeset>,
}

/// Group changesets by their first component, in order of first appearance.
pub fn bucket_by_component(changesets: &[Changeset]) -> Vec<Bucket<'_>> {
    let mut buckets: Vec<Bucket<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for changeset in changesets {
        let name = changeset.primary_component().unwrap_or(MISC_BUCKET);
        let slot = *index.entry(name).or_insert_with(|| {
            buckets.push(Bucket {
                name,
                changesets: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].changesets.push(changeset);
    }

    buckets
}

/// Render one list entry.
///
/// The ticket tail is emitted even when `related` is empty, leaving a bare `#`.
fn format_entry(changeset: &Changeset) -> String {
    format!(
        "* {} {} #{}",
        changeset.description,
        changeset.revision,
        changeset.related.join(", #")
    )
}

/// Render every bucket as a `###` section with one list entry per changeset.
pub fn render_sections(buckets: &[Bucket<'_>]) -> String {
    let mut out = String::new();

    for bucket in buckets {
        out.push_str(&format!("### {}\n\n", bucket.name));
        for changeset in &bucket.changesets {
            out.push_str(&format_entry(changeset));
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// Render the full digest: "Code Changes" sections followed by "Props".
pub fn render_report(changesets: &[Changeset]) -> String {
    let sections = render_sections(&bucket_by_component(changesets));
    let credit_line = format_credit_line(&collect_contributors(changesets));

    let mut report = String::from("## Code Changes\n\n");
    report.push_str(&sections);
    report.push_str("## Props\n\n");
    if !credit_line.is_empty() {
        report.push_str(&credit_line);
        report.push('\n');
    }

    report
}
