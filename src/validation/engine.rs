//! Validation Engine
//!
//! Diagnostic accumulation, separated from parsing and schema concerns.

use std::fmt;
use std::path::{Path, PathBuf};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Marker printed in front of the offending path
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
        }
    }
}

/// A diagnostic message for a validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.severity.marker(),
            self.path.display(),
            self.message
        )
    }
}

/// Diagnostics accumulated over a run, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, path: &Path, message: impl Into<String>) {
        self.push(path, message.into(), Severity::Error);
    }

    pub fn add_warning(&mut self, path: &Path, message: impl Into<String>) {
        self.push(path, message.into(), Severity::Warning);
    }

    fn push(&mut self, path: &Path, message: String, severity: Severity) {
        log::debug!("{:?} for {}: {}", severity, path.display(), message);
        self.diagnostics.push(Diagnostic {
            path: path.to_path_buf(),
            message,
            severity,
        });
    }

    /// Error diagnostics in the order they were recorded
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    /// Warning diagnostics in the order they were recorded
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add_warning(Path::new("a.yml"), "Test warning");
        assert!(result.is_valid()); // Warnings don't make it invalid

        result.add_error(Path::new("a.yml"), "Test error");
        assert!(!result.is_valid()); // Errors make it invalid
    }

    #[test]
    fn test_counts_and_order() {
        let mut result = ValidationResult::new();
        result.add_error(Path::new("b.yml"), "first");
        result.add_warning(Path::new("b.yml"), "note");
        result.add_error(Path::new("a.yml"), "second");

        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 1);
        let messages: Vec<&str> = result.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_diagnostic_display() {
        let mut result = ValidationResult::new();
        result.add_error(Path::new("ci.yml"), "Missing required 'on' field");
        result.add_warning(Path::new("ci.yml"), "Missing 'name' field (recommended)");

        let lines: Vec<String> = result.diagnostics.iter().map(ToString::to_string).collect();
        assert_eq!(lines[0], "✗ ci.yml: Missing required 'on' field");
        assert_eq!(lines[1], "⚠ ci.yml: Missing 'name' field (recommended)");
    }
}
