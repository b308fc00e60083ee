//! Text cleanup helpers for changeset descriptions and props lists.
//!
//! Commit messages credit contributors and reference tickets in free prose
//! ("Props jane, john for testing, bob.\nFixes #123."), so these helpers work
//! on regex heuristics rather than structured fields. Their sharp edges are
//! kept on purpose: a props list ends at the first period, and a line that
//! merely starts with "See" is treated as a reference clause.

use std::sync::LazyLock;

use regex_lite::Regex;
use scraper::{ElementRef, Html};

static FIXES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[[:punct:][:space:]]*fixes\b[^\n]*").expect("Invalid regex")
});

static SEE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[[:punct:][:space:]]*see\b[^\n]*").expect("Invalid regex")
});

static PROPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\n*^[[:space:]]*props\b:?\s*([^.]*\.?)").expect("Invalid regex")
});

static FOR_QUALIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bfor\b[^,.]*").expect("Invalid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid regex"));

/// Elements whose text is rendered as inline code.
const CODE_TAGS: [&str; 2] = ["code", "tt"];

/// Remove the first "Fixes ..." line and the first "See ..." line.
///
/// Each clause is matched case-insensitively at the start of a line, after
/// optional punctuation or blank lines, and removed through the end of that
/// line. At most one of each is removed.
pub fn strip_fixes_and_see_clauses(text: &str) -> String {
    let without_fixes = FIXES_RE.replacen(text, 1, "");
    SEE_RE.replacen(&without_fixes, 1, "").into_owned()
}

/// Split a "Props ..." clause off the text.
///
/// The marker only counts at the start of a line, so "props" used in prose
/// or code spans is left alone. Returns the text with the clause removed and
/// the raw name segment that followed the marker (up to and including the
/// first period), or `None` when the text carries no props marker.
pub fn extract_props_clause(text: &str) -> (String, Option<String>) {
    match PROPS_RE.captures(text) {
        Some(caps) => {
            let raw = caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default();
            let remaining = PROPS_RE.replacen(text, 1, "").into_owned();
            (remaining, Some(raw))
        }
        None => (text.to_string(), None),
    }
}

/// Turn a raw props segment into contributor handles.
///
/// Drops "for ..." qualifiers up to the next comma or period, drops periods,
/// treats any whitespace run as a separator, and discards empty tokens.
pub fn clean_name_list(raw: &str) -> Vec<String> {
    let unqualified = FOR_QUALIFIER_RE.replace_all(raw, "");
    let without_periods = unqualified.replace('.', "");
    let separated = WHITESPACE_RE.replace_all(&without_periods, ",");

    separated
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace every run of three or more newlines with exactly two.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES_RE.replace_all(text, "\n\n").into_owned()
}

/// Flatten an HTML fragment to plain text, keeping inline code as backticks.
///
/// Code spans are rewritten to `` `text` `` while walking the tree, before any
/// text is joined, so their boundaries survive flattening. Line breaks become
/// newlines; every other element contributes only its text.
pub fn re_add_code_markers(fragment: &str) -> String {
    let html = Html::parse_fragment(fragment);
    let mut out = String::new();
    flatten_into(html.root_element(), &mut out);
    out
}

fn flatten_into(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if CODE_TAGS.contains(&name) {
                out.push('`');
                out.extend(child_element.text());
                out.push('`');
            } else if name == "br" {
                out.push('\n');
            } else {
                flatten_into(child_element, out);
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}
