//! Output formatting utilities for the CLI.

use std::io::{self, Write};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Formatter, Result};

/// Format error message for display.
pub fn format_error(operation: &str, details: &str) -> String {
    format!("ERROR: {operation} - {details}")
}

/// Log info message (respects quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{msg}");
    }
}

/// Write output to file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
        io::stdout().flush()?;
    }
    Ok(())
}

/// Serialize the entity catalog as JSON.
///
/// Extraction faults stay content rather than exit codes, matching the
/// formatter's propagation policy: failures serialize as an `error` object.
pub fn render_json(formatter: &Formatter, text: &str) -> String {
    match formatter.catalog(text) {
        Ok(catalog) => serde_json::to_string_pretty(&catalog)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string()),
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}

static BLOCK_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<br>|</h2>|</h3>").expect("valid literal alternation"));
static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Strip markup for plain-text consumers.
///
/// Block-level closers and `<br>` become newlines first so headings and
/// list items stay on their own lines, then remaining tags are dropped.
pub fn strip_markup(html: &str) -> String {
    let broken = BLOCK_BREAKS.replace_all(html, "\n");
    TAGS.replace_all(&broken, "").trim_end().to_string()
}
