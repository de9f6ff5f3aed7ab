//! Diagnostics raised while converting a pack
//!
//! Nothing short of a broken archive stops a conversion. Everything else is
//! handed to a [`Reporter`] and the run carries on.

use std::path::{Path, PathBuf};

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A file or entry did not have the expected shape; it was skipped
    Structural,
    /// Neither the canonical path nor the fallback search found a texture
    MissingAsset,
    /// Loading or processing a whole definition file failed
    FileProcessing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(file: &Path, kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            file: file.to_path_buf(),
            kind,
            detail: detail.into(),
        }
    }
}

/// Sink for conversion diagnostics
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory
impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` and keeps per-kind counts
#[derive(Debug, Default)]
pub struct TracingReporter {
    pub structural: usize,
    pub missing_assets: usize,
    pub failed_files: usize,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.structural + self.missing_assets + self.failed_files
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        let file = diagnostic.file.display();
        match diagnostic.kind {
            DiagnosticKind::Structural => {
                self.structural += 1;
                tracing::warn!("Skipping invalid entry in {}: {}", file, diagnostic.detail);
            }
            DiagnosticKind::MissingAsset => {
                self.missing_assets += 1;
                tracing::warn!("Missing texture in {}: {}", file, diagnostic.detail);
            }
            DiagnosticKind::FileProcessing => {
                self.failed_files += 1;
                tracing::error!("Error processing file {}: {}", file, diagnostic.detail);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_reporter_counts() {
        let mut reporter = TracingReporter::new();
        let file = Path::new("items/armor.yml");

        reporter.report(Diagnostic::new(file, DiagnosticKind::Structural, "x"));
        reporter.report(Diagnostic::new(file, DiagnosticKind::MissingAsset, "y"));
        reporter.report(Diagnostic::new(file, DiagnosticKind::MissingAsset, "z"));
        reporter.report(Diagnostic::new(file, DiagnosticKind::FileProcessing, "w"));

        assert_eq!(reporter.structural, 1);
        assert_eq!(reporter.missing_assets, 2);
        assert_eq!(reporter.failed_files, 1);
        assert_eq!(reporter.total(), 4);
    }

    #[test]
    fn test_vec_reporter_collects() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        diagnostics.report(Diagnostic::new(
            Path::new("a.json"),
            DiagnosticKind::FileProcessing,
            "bad",
        ));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].file, PathBuf::from("a.json"));
    }
}
