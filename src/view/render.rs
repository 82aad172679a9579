//! HTML rendering
//!
//! Produces the whole document for a [`ViewState`]: heading, card grid and
//! the Back / Page N / Next pager.

use super::state::ViewState;
use crate::types::LaunchRecord;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Document title and heading
pub const TITLE: &str = "SpaceX Launches";

const DESCRIPTION: &str = "Past launches fetched from a GraphQL API, ten at a time";

const STYLE: &str = "\
body{font-family:-apple-system,BlinkMacSystemFont,Segoe UI,Roboto,sans-serif;margin:0}\
.main{padding:4rem 0;display:flex;flex-direction:column;align-items:center}\
.grid{display:flex;flex-wrap:wrap;justify-content:center;max-width:800px;margin-top:2rem}\
.card{margin:1rem;flex-basis:45%;padding:1.5rem;color:inherit;text-decoration:none;\
border:1px solid #eaeaea;border-radius:10px}\
.pager{display:flex;align-items:center;gap:1rem}";

/// Render the full page for `state`
pub fn render_page(state: &ViewState) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n"));
    html.push_str("<link rel=\"icon\" href=\"/favicon.ico\">\n");
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<main class=\"main\">\n");
    html.push_str(&format!("<h1 class=\"title\">{TITLE}</h1>\n"));
    html.push_str(&format!("<p class=\"description\">{DESCRIPTION}</p>\n"));

    html.push_str("<div class=\"grid\">\n");
    for launch in state.records() {
        html.push_str(&render_card(launch));
    }
    html.push_str("</div>\n");

    html.push_str(&render_pager(state));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// One launch card; absent links leave their attribute out
pub fn render_card(launch: &LaunchRecord) -> String {
    let href = optional_attr("href", launch.links.video_link.as_deref());
    let src = optional_attr("src", launch.links.mission_patch.as_deref());

    format!(
        "<a class=\"card\"{href} target=\"_blank\" rel=\"noopener noreferrer\">\
<h3>{name}</h3>\
<p><strong>Launch Date:</strong> {date}</p>\
<img{src} style=\"max-width:200px;max-height:200px\" alt=\"\">\
</a>\n",
        name = escape_html(&launch.mission_name),
        date = format_launch_date(&launch.launch_date_local),
    )
}

fn render_pager(state: &ViewState) -> String {
    let disabled = if state.can_go_back() { "" } else { " disabled" };
    format!(
        "<div class=\"pager\">\n\
<form method=\"post\" action=\"/back\"><button type=\"submit\"{disabled}>Back</button></form>\n\
<span>Page {page}</span>\n\
<form method=\"post\" action=\"/next\"><button type=\"submit\">Next</button></form>\n\
</div>\n",
        page = state.page(),
    )
}

fn optional_attr(name: &str, value: Option<&str>) -> String {
    value.map_or_else(String::new, |v| format!(" {name}=\"{}\"", escape_html(v)))
}

/// Format a launch timestamp as a US date (`M/D/YYYY`)
///
/// Uses the calendar date in the timestamp's own offset, so the output does
/// not depend on the host timezone. Unparseable input yields `Invalid Date`.
pub fn format_launch_date(raw: &str) -> String {
    match parse_local_date(raw) {
        Some(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        None => "Invalid Date".to_string(),
    }
}

fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
