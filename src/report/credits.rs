//! Contributor credits for the digest's "Props" section.

use crate::changeset::Changeset;

/// Collect every author and credited contributor, deduplicated.
///
/// Handles are gathered in changeset order (author, then props), sorted
/// case-insensitively with a stable sort, and adjacent case-insensitive
/// duplicates are dropped so the first-seen casing wins. Empty handles are
/// skipped.
pub fn collect_contributors(changesets: &[Changeset]) -> Vec<String> {
    let mut handles: Vec<String> = changesets
        .iter()
        .flat_map(|c| std::iter::once(&c.author).chain(c.props.iter()))
        .filter(|handle| !handle.is_empty())
        .cloned()
        .collect();

    handles.sort_by_cached_key(|handle| handle.to_lowercase());
    handles.dedup_by(|a, b| a.to_lowercase() == b.to_lowercase());
    handles
}

/// Format the thank-you line for a list of contributors.
///
/// Returns an empty string when there is nobody to thank.
pub fn format_credit_line(contributors: &[String]) -> String {
    match contributors {
        [] => String::new(),
        [only] => format!("Thanks to @{} for their contributions!", only),
        [rest @ .., last] => format!(
            "Thanks to @{}, and @{} for their contributions!",
            rest.join(", @"),
            last
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changeset(author: &str, props: &[&str]) -> Changeset {
        Changeset {
            author: author.to_string(),
            props: props.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_author_credit_line() {
        let contributors = collect_contributors(&[changeset("Alice", &[])]);
        assert_eq!(
            format_credit_line(&contributors),
            "Thanks to @Alice for their contributions!"
        );
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first_seen_casing() {
        let contributors = collect_contributors(&[changeset("bob", &["alice", "Bob"])]);
        assert_eq!(contributors, vec!["alice", "bob"]);
        assert_eq!(
            format_credit_line(&contributors),
            "Thanks to @alice, and @bob for their contributions!"
        );
    }

    #[test]
    fn test_collects_across_changesets_in_order() {
        let contributors = collect_contributors(&[
            changeset("Zed", &["carol"]),
            changeset("carol", &["Zed", "ann"]),
        ]);
        assert_eq!(contributors, vec!["ann", "carol", "Zed"]);
    }

    #[test]
    fn test_skips_empty_handles() {
        let contributors = collect_contributors(&[changeset("", &["dana"])]);
        assert_eq!(contributors, vec!["dana"]);
    }

    #[test]
    fn test_credit_line_many() {
        assert_eq!(
            format_credit_line(&names(&["a", "b", "c"])),
            "Thanks to @a, @b, and @c for their contributions!"
        );
    }

    #[test]
    fn test_credit_line_empty() {
        assert_eq!(format_credit_line(&[]), "");
    }
}
