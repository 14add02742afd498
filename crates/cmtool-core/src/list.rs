use std::fmt::Write as _;
use std::path::Path;

use cmtool_error::{Result, ToolError};
use cmtool_utils::basename;
use serde::Serialize;

use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// `name:` padded to a common width, then the path.
    #[default]
    Table,
    Basename,
    Path,
    Json,
}

#[derive(Debug, Serialize)]
struct PackageEntry<'e> {
    name: &'e str,
    path: &'e str,
    exists: bool,
}

/// Render registry entries in `format`. Every line ends with a newline.
pub fn render(entries: &[String], format: ListFormat) -> Result<String> {
    let mut out = String::new();

    match format {
        ListFormat::Table => {
            let width = entries
                .iter()
                .map(|e| basename(e).len())
                .max()
                .unwrap_or(0)
                + 1;
            for entry in entries {
                let label = format!("{}:", basename(entry));
                let _ = writeln!(out, "{label:<width$} {entry}");
            }
        }
        ListFormat::Basename => {
            for entry in entries {
                let _ = writeln!(out, "{}", basename(entry));
            }
        }
        ListFormat::Path => {
            for entry in entries {
                let _ = writeln!(out, "{entry}");
            }
        }
        ListFormat::Json => {
            let rows: Vec<PackageEntry<'_>> = entries
                .iter()
                .map(|entry| PackageEntry {
                    name: basename(entry),
                    path: entry,
                    exists: Path::new(entry).exists(),
                })
                .collect();
            out = serde_json::to_string_pretty(&rows)
                .map_err(|e| ToolError::InvalidOperation(format!("Failed to encode list: {e}")))?;
            out.push('\n');
        }
    }

    Ok(out)
}

pub struct ListManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> ListManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    pub fn list(&self, format: ListFormat) -> Result<String> {
        let entries = self.ctx.store.load()?;
        self.ctx
            .debug(&format!("Listing {} registered packages", entries.len()));
        render(&entries, format)
    }
}
