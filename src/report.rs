//! Text, JSON and HTML renderings of a [`ScrapeReport`].
//!
//! All renderings are pure functions of the report: the same report always
//! renders to the same bytes.

use crate::{
    data::{ScrapeReport, Table},
    ScrapeError,
};
use html_escape::encode_text;
use std::io::{self, Write};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes the labeled plain-text lines, one per record.
pub fn render_text<W: io::Write>(out: &mut W, report: &ScrapeReport) -> io::Result<()> {
    write!(out, "{}", report)?;
    out.flush()
}

/// Async counterpart of [`render_text`] for request handlers, so the
/// console echo does not block a runtime worker.
pub async fn echo_text<W: AsyncWrite + Unpin>(
    out: &mut W,
    report: &ScrapeReport,
) -> io::Result<()> {
    out.write_all(report.to_string().as_bytes()).await?;
    out.flush().await
}

/// Pretty JSON with the sequences keyed `schedule_results`, `team_stats`,
/// `individual_leaders`, in that order.
pub fn render_json(report: &ScrapeReport) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One-shot output: the text report, or JSON when `json` is set.
pub fn write_once<W: io::Write>(
    out: &mut W,
    report: &ScrapeReport,
    json: bool,
) -> Result<(), ScrapeError> {
    if json {
        writeln!(out, "{}", render_json(report)?)?;
        out.flush()?;
    } else {
        render_text(out, report)?;
    }
    Ok(())
}

fn push_table<T: Table>(html: &mut String, rows: &[T]) {
    html.push_str(&format!("  <h1>{}</h1>\n", T::TITLE));
    html.push_str("  <table border=\"1\">\n    <tr>\n");
    for column in T::COLUMNS {
        html.push_str(&format!("      <th>{}</th>\n", column));
    }
    html.push_str("    </tr>\n");

    for row in rows {
        html.push_str("    <tr>\n");
        for cell in row.cells() {
            html.push_str(&format!("      <td>{}</td>\n", encode_text(cell)));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </table>\n");
}

/// Renders the report as a standalone HTML document with one table per
/// record kind. All scraped text is escaped.
pub fn render_html(report: &ScrapeReport) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>NCAA Stats</title>\n</head>\n<body>\n",
    );
    push_table(&mut html, &report.schedule_results);
    html.push('\n');
    push_table(&mut html, &report.team_stats);
    html.push('\n');
    push_table(&mut html, &report.individual_leaders);
    html.push_str("</body>\n</html>\n");
    html
}
