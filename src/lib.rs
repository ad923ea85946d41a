//! Workflow Validator
//!
//! Checks CI workflow definition files before they reach the automation
//! platform.
//!
//! This library provides:
//! - YAML parsing into an untyped document tree
//! - Workflow schema checks (top-level keys, jobs, steps)
//! - Recursive workflow file discovery
//! - Diagnostic aggregation and the summary report

pub mod config;
pub mod discovery;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{parse_document, Node};
pub use validation::{check_workflow, Diagnostic, ValidationResult, Validator};
