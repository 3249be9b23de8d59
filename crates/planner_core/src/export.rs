//! Writing generated plans to disk.
//!
//! The generated text is written byte-for-byte; no reformatting happens on
//! the way out.

use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
}

impl ExportFormat {
    /// Infer the format from the output path extension. Anything that is
    /// not recognizably Markdown exports as plain text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("md") | Some("markdown") => ExportFormat::Markdown,
            _ => ExportFormat::Text,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(format!("unknown export format: {other} (expected md or txt)")),
        }
    }
}

/// Default export file name for a generated artifact (`lesson_plan` or `quiz`).
pub fn default_export_path(stem: &str, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!("{stem}.{}", format.extension()))
}

/// Write the generated content to `path` unmodified.
pub fn export_plan(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
