//! Workflow Validator
//!
//! Run-wide state threaded through every check: the verbose flag, the trace
//! sink and the accumulated diagnostics. All failures are recorded as
//! diagnostics; nothing here aborts the run.

use std::io::{self, Write};
use std::path::Path;

use super::engine::ValidationResult;
use super::workflow::{check_workflow, SchemaIssue};
use crate::discovery::{find_workflow_files, has_workflow_extension};
use crate::parser::{load_document, LoadError};

/// Validator state for one run
pub struct Validator<W: Write = io::Stdout> {
    verbose: bool,
    trace: W,
    result: ValidationResult,
}

impl Validator<io::Stdout> {
    /// Validator whose verbose trace goes to standard output
    pub fn new(verbose: bool) -> Self {
        Self::with_writer(verbose, io::stdout())
    }
}

impl<W: Write> Validator<W> {
    pub fn with_writer(verbose: bool, trace: W) -> Self {
        Self {
            verbose,
            trace,
            result: ValidationResult::new(),
        }
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn into_result(self) -> ValidationResult {
        self.result
    }

    /// Consume the validator, returning the trace sink and diagnostics
    pub fn into_parts(self) -> (W, ValidationResult) {
        (self.trace, self.result)
    }

    fn log(&mut self, message: std::fmt::Arguments<'_>) {
        if !self.verbose {
            return;
        }
        if let Err(e) = writeln!(self.trace, "{}", message) {
            log::warn!("failed to write trace line: {}", e);
        }
    }

    /// Check that the file reads and parses as YAML
    pub fn check_syntax(&mut self, path: &Path) -> bool {
        match load_document(path) {
            Ok(_) => {
                self.log(format_args!("✓ {}: Valid YAML syntax", path.display()));
                true
            }
            Err(e) => {
                self.result.add_error(path, e.to_string());
                false
            }
        }
    }

    /// Re-read the file and check it against the workflow schema
    pub fn check_structure(&mut self, path: &Path) -> bool {
        let doc = match load_document(path) {
            Ok(doc) => doc,
            Err(LoadError::Syntax(e)) => {
                self.result
                    .add_error(path, format!("Error parsing YAML: {}", e));
                return false;
            }
            Err(e) => {
                self.result.add_error(path, e.to_string());
                return false;
            }
        };

        log::debug!("{}: top level is a {}", path.display(), doc.kind());

        let mut valid = true;
        for issue in check_workflow(&doc) {
            self.record(path, &issue);
            valid &= !issue.is_error();
        }

        if valid {
            self.log(format_args!("✓ {}: Valid workflow structure", path.display()));
        }
        valid
    }

    fn record(&mut self, path: &Path, issue: &SchemaIssue) {
        if issue.is_error() {
            self.result.add_error(path, issue.to_string());
        } else {
            self.result.add_warning(path, issue.to_string());
        }
    }

    /// Validate a single file end to end
    pub fn validate_file(&mut self, path: &Path) -> bool {
        self.log(format_args!("\nValidating {}...", path.display()));

        if let Err(e) = std::fs::metadata(path) {
            if e.kind() == io::ErrorKind::NotFound {
                self.result.add_error(path, "File does not exist");
                return false;
            }
            log::debug!("cannot stat {}: {}", path.display(), e);
        }

        if !has_workflow_extension(path) {
            self.result
                .add_warning(path, "File extension should be .yml or .yaml");
        }

        if !self.check_syntax(path) {
            return false;
        }

        self.check_structure(path)
    }

    /// Validate every workflow file below a directory.
    ///
    /// All discovered files are validated even after one fails.
    pub fn validate_directory(&mut self, dir: &Path) -> bool {
        if !dir.is_dir() {
            self.result.add_error(dir, "Not a directory");
            return false;
        }

        let files = match find_workflow_files(dir) {
            Ok(files) => files,
            Err(e) => {
                self.result
                    .add_error(dir, format!("Error reading directory: {}", e));
                return false;
            }
        };

        if files.is_empty() {
            self.result.add_warning(dir, "No workflow files found");
            return true;
        }

        let mut all_valid = true;
        for file in &files {
            all_valid &= self.validate_file(file);
        }
        all_valid
    }

    /// Validate one command-line argument, file or directory
    pub fn validate_path(&mut self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => self.validate_directory(path),
            Ok(_) => self.validate_file(path),
            Err(e) => {
                log::debug!("cannot stat {}: {}", path.display(), e);
                self.result.add_error(path, "Not found");
                false
            }
        }
    }

    /// Validate every input and return overall run validity
    pub fn run<P: AsRef<Path>>(&mut self, paths: &[P]) -> bool {
        let mut all_valid = true;
        for path in paths {
            all_valid &= self.validate_path(path.as_ref());
        }

        log::info!(
            "validated {} input(s): {} error(s), {} warning(s)",
            paths.len(),
            self.result.error_count(),
            self.result.warning_count()
        );

        all_valid && self.result.is_valid()
    }
}
