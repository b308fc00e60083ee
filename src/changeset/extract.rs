//! Changeset extraction from Trac's verbose log table.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::debug;

use super::normalize::{
    clean_name_list, collapse_blank_lines, extract_props_clause, re_add_code_markers,
    strip_fixes_and_see_clauses,
};

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.chglist > tbody > tr").expect("Invalid selector"));
static REV_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.rev a").expect("Invalid selector"));
static REV_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.rev").expect("Invalid selector"));
static AUTHOR_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.author").expect("Invalid selector"));
static LOG_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.log").expect("Invalid selector"));
static TICKET_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.ticket").expect("Invalid selector"));

/// One committed revision as it appears in the digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Changeset {
    /// Bracketed revision id, e.g. `[12345]`.
    pub revision: String,
    pub author: String,
    /// Message with reference and props clauses removed.
    pub description: String,
    /// Ticket ids referenced by the message, in order of appearance.
    pub related: Vec<String>,
    /// Components reported by the related tickets, in `related` order.
    pub components: Vec<String>,
    /// Contributors credited in the message's props clause.
    pub props: Vec<String>,
}

impl Changeset {
    /// The component this changeset is filed under, if any was resolved.
    pub fn primary_component(&self) -> Option<&str> {
        self.components.first().map(String::as_str)
    }
}

/// Parse the verbose log markup into changesets, in row order.
///
/// Rows are consumed in pairs (metadata row, then description row). A
/// trailing unpaired row ends extraction; earlier changesets are kept.
pub fn extract(markup: &str) -> Vec<Changeset> {
    let document = Html::parse_document(markup);
    let rows: Vec<ElementRef<'_>> = document.select(&ROW).collect();

    let mut changesets = Vec::with_capacity(rows.len() / 2);

    for pair in rows.chunks(2) {
        let [meta, detail] = pair else {
            debug!(
                "Log ended with an unpaired row; keeping {} complete changesets",
                changesets.len()
            );
            break;
        };

        changesets.push(parse_pair(*meta, *detail));
    }

    changesets
}

fn parse_pair(meta: ElementRef<'_>, detail: ElementRef<'_>) -> Changeset {
    let revision = format_revision(&revision_text(meta));
    let author = meta
        .select(&AUTHOR_CELL)
        .next()
        .map(|cell| element_text(cell).trim().to_string())
        .unwrap_or_default();

    let log_cell = detail.select(&LOG_CELL).next().unwrap_or(detail);

    let related = log_cell
        .select(&TICKET_LINK)
        .map(|link| {
            let text = element_text(link);
            let text = text.trim();
            text.strip_prefix('#').unwrap_or(text).to_string()
        })
        .collect();

    let flattened = re_add_code_markers(&log_cell.inner_html());
    let (description, props) = clean_description(&flattened);

    Changeset {
        revision,
        author,
        description,
        related,
        components: Vec::new(),
        props,
    }
}

/// Strip reference and props clauses from a flattened message.
///
/// Returns the final description and the credited contributors.
pub fn clean_description(text: &str) -> (String, Vec<String>) {
    let stripped = strip_fixes_and_see_clauses(text);
    let (remaining, raw_props) = extract_props_clause(&stripped);
    let props = raw_props.as_deref().map(clean_name_list).unwrap_or_default();
    let description = collapse_blank_lines(&remaining).trim().to_string();

    (description, props)
}

/// Convert Trac's `@N` display form to the bracketed `[N]` form.
pub fn format_revision(display: &str) -> String {
    let display = display.trim();
    let id = display.strip_prefix('@').unwrap_or(display);
    format!("[{}]", id)
}

fn revision_text(meta: ElementRef<'_>) -> String {
    meta.select(&REV_LINK)
        .next()
        .or_else(|| meta.select(&REV_CELL).next())
        .map(element_text)
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
