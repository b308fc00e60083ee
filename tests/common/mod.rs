//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to a Trac page fixture.
pub fn trac_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("trac").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Wrap log rows in the table markup Trac serves.
pub fn log_page(rows: &str) -> String {
    format!(
        "<html><body><table class=\"listing chglist\"><thead><tr><th class=\"rev\">Rev</th></tr></thead>\
         <tbody>{}</tbody></table></body></html>",
        rows
    )
}

/// A metadata row followed by its description row.
pub fn log_entry(rev: u64, author: &str, message_html: &str) -> String {
    format!(
        "{}<tr class=\"verbose\"><td class=\"log\" colspan=\"5\">{}</td></tr>",
        meta_row(rev, author),
        message_html
    )
}

/// A lone metadata row, as seen when the log is truncated.
pub fn meta_row(rev: u64, author: &str) -> String {
    format!(
        "<tr><td class=\"rev\"><a href=\"/changeset/{rev}\">@{rev}</a></td>\
         <td class=\"author\"><span class=\"trac-author\">{author}</span></td></tr>"
    )
}

/// A ticket link as Trac renders it inside a log message.
pub fn ticket_link(id: u64) -> String {
    format!("<a class=\"closed ticket\" href=\"/ticket/{id}\">#{id}</a>")
}

/// A minimal ticket page carrying the given component.
pub fn ticket_page(component: &str) -> String {
    format!(
        "<html><body><table class=\"properties\"><tr>\
         <th id=\"h_component\">Component:</th>\
         <td headers=\"h_component\"><a href=\"/query?component={component}\">{component}</a></td>\
         </tr></table></body></html>"
    )
}
