//! The driving loop: runs the search plan and renders the report.

use std::io::Write;

use anyhow::Result;
use pinpoint_core::{SearchPlan, SourceDocument, locate};

/// Lines of context printed before and after a matched line.
pub const CONTEXT_RADIUS: usize = 2;

/// Runs every request in the plan and writes the report to `out`.
///
/// Each document is loaded once and scanned once per keyword; the first
/// matching line per keyword wins. A document that cannot be read aborts
/// the whole run after its header has been written, leaving earlier output
/// intact. A keyword without a match writes nothing.
///
/// # Errors
/// Returns an error if a document cannot be read or the writer fails.
pub fn render<W: Write>(plan: &SearchPlan, context_radius: usize, out: &mut W) -> Result<()> {
    for request in &plan.requests {
        writeln!(out)?;
        writeln!(out, "== {} ==", request.path.display())?;

        let document = SourceDocument::load(&request.path)?;
        for keyword in &request.keywords {
            let Some(window) = locate(document.lines(), keyword, context_radius) else {
                tracing::debug!("no occurrence of {keyword:?} in {}", request.path.display());
                continue;
            };

            for (number, text) in &window.lines {
                writeln!(out, "{number:04}: {text}")?;
            }
        }
    }

    Ok(())
}
