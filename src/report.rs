//! Summary report printed at the end of a run.

use std::fmt::Write;

use crate::validation::{Diagnostic, ValidationResult};

const BANNER_WIDTH: usize = 70;

/// Render the summary for a finished run
pub fn render_summary(result: &ValidationResult) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&banner);
    out.push_str("\nValidation Summary\n");
    out.push_str(&banner);
    out.push('\n');

    let warnings: Vec<&Diagnostic> = result.warnings().collect();
    if !warnings.is_empty() {
        let _ = writeln!(out, "\n⚠ Warnings ({}):", warnings.len());
        for warning in warnings {
            let _ = writeln!(out, "  {}", warning);
        }
    }

    let errors: Vec<&Diagnostic> = result.errors().collect();
    if errors.is_empty() {
        out.push_str("\n✓ All validations passed!\n");
    } else {
        let _ = writeln!(out, "\n✗ Errors ({}):", errors.len());
        for error in errors {
            let _ = writeln!(out, "  {}", error);
        }
    }

    out.push_str(&banner);
    out.push('\n');
    out
}

/// Print the summary to standard output
pub fn print_summary(result: &ValidationResult) {
    print!("{}", render_summary(result));
}
