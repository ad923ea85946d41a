//! Validation Engine
//!
//! Syntax and structure checks for workflow files, and the run-wide state
//! that accumulates their diagnostics.

pub mod engine;
pub mod validator;
pub mod workflow;

pub use engine::{Diagnostic, Severity, ValidationResult};
pub use validator::Validator;
pub use workflow::{check_workflow, SchemaIssue};
