//! Workflow Schema Rules
//!
//! Structural checks of a parsed document against the workflow schema:
//! a top-level mapping with `on` and a non-empty `jobs` mapping whose
//! entries each carry `runs-on` and a `steps` list.
//!
//! Checking stops at the first error. In particular the first invalid job
//! hides every job after it; later jobs only get reported once the earlier
//! one is fixed.

use thiserror::Error;

use super::engine::Severity;
use crate::parser::Node;

/// A single schema finding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    #[error("Workflow must be a YAML mapping")]
    NotAMapping,
    #[error("Missing 'name' field (recommended)")]
    MissingName,
    #[error("Missing required 'on' field")]
    MissingOn,
    #[error("Missing required 'jobs' field")]
    MissingJobs,
    #[error("'jobs' must be a mapping")]
    JobsNotMapping,
    #[error("'jobs' must contain at least one job")]
    NoJobs,
    #[error("Job '{job}' must be a mapping")]
    JobNotMapping { job: String },
    #[error("Job '{job}' missing required 'runs-on' field")]
    JobMissingRunsOn { job: String },
    #[error("Job '{job}' missing required 'steps' field")]
    JobMissingSteps { job: String },
    #[error("Job '{job}' 'steps' must be a list")]
    StepsNotList { job: String },
    #[error("Job '{job}' has no steps")]
    NoSteps { job: String },
}

impl SchemaIssue {
    pub fn severity(&self) -> Severity {
        match self {
            SchemaIssue::MissingName | SchemaIssue::NoSteps { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

/// Check a document against the workflow schema.
///
/// Issues come back in the order they were found. If an error is present
/// it is always the last element.
pub fn check_workflow(doc: &Node) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Err(error) = check_into(doc, &mut issues) {
        issues.push(error);
    }
    issues
}

/// True when `issues` contains no error-severity entry
pub fn passes(issues: &[SchemaIssue]) -> bool {
    !issues.iter().any(SchemaIssue::is_error)
}

fn check_into(doc: &Node, warnings: &mut Vec<SchemaIssue>) -> Result<(), SchemaIssue> {
    if doc.as_mapping().is_none() {
        return Err(SchemaIssue::NotAMapping);
    }

    if doc.get("name").is_none() {
        warnings.push(SchemaIssue::MissingName);
    }

    doc.get("on").ok_or(SchemaIssue::MissingOn)?;

    let jobs = doc
        .get("jobs")
        .ok_or(SchemaIssue::MissingJobs)?
        .as_mapping()
        .ok_or(SchemaIssue::JobsNotMapping)?;

    if jobs.is_empty() {
        return Err(SchemaIssue::NoJobs);
    }

    for (name, body) in jobs {
        check_job(name, body, warnings)?;
    }

    Ok(())
}

fn check_job(name: &str, body: &Node, warnings: &mut Vec<SchemaIssue>) -> Result<(), SchemaIssue> {
    let job = || name.to_string();

    if body.as_mapping().is_none() {
        return Err(SchemaIssue::JobNotMapping { job: job() });
    }

    body.get("runs-on")
        .ok_or_else(|| SchemaIssue::JobMissingRunsOn { job: job() })?;

    let steps = body
        .get("steps")
        .ok_or_else(|| SchemaIssue::JobMissingSteps { job: job() })?
        .as_sequence()
        .ok_or_else(|| SchemaIssue::StepsNotList { job: job() })?;

    if steps.is_empty() {
        warnings.push(SchemaIssue::NoSteps { job: job() });
    }

    Ok(())
}
