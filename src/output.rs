// src/output.rs
//! XML serialization of a sorted frequency table.
//!
//! The writer owns the file-naming convention
//! `statistics_by_<attribute-lowercased>.xml` and emits
//! `<statistics><item><value>…</value><count>…</count></item>…</statistics>`
//! with two-space indentation, in the table's iteration order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeckstatError, Result};

/// Writes `stats` as XML into `out_dir` and returns the file path.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn write_statistics(
    stats: &[(String, usize)],
    attribute: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    let filename = format!("statistics_by_{}.xml", attribute.to_lowercase());
    let path = out_dir.join(filename);
    fs::write(&path, render(stats)).map_err(|e| DeckstatError::io(e, &path))?;
    Ok(path)
}

fn render(stats: &[(String, usize)]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<statistics>\n");
    for (value, count) in stats {
        xml.push_str("  <item>\n");
        xml.push_str(&format!("    <value>{}</value>\n", escape_xml(value)));
        xml.push_str(&format!("    <count>{count}</count>\n"));
        xml.push_str("  </item>\n");
    }
    xml.push_str("</statistics>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
