//! Scraping ticket fields from a Trac ticket page.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static COMPONENT_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[headers="h_component"]"#).expect("Invalid selector"));

/// Extract the component name from a ticket page.
///
/// Returns `None` when the page has no component field or it is blank.
pub fn parse_ticket_component(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let cell = document.select(&COMPONENT_CELL).next()?;
    let text: String = cell.text().collect();
    let component = text.split_whitespace().collect::<Vec<_>>().join(" ");

    (!component.is_empty()).then_some(component)
}
