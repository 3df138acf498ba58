//! Run the validation rules over a topology file.

use anyhow::{bail, Result};
use colored::Colorize;
use serde_json::json;
use std::path::Path;
use topolab::prelude::*;

use super::{heading, load_graph, print_json, severity_tag};

pub fn run(file: &Path, json: bool) -> Result<()> {
    let doc = load_graph(file)?;
    let issues = validate(&doc.devices, &doc.connections);
    let summary = ValidationSummary::from_issues(&issues);

    if json {
        print_json(&json!({ "issues": issues, "summary": summary }))?;
    } else {
        heading("Validation");
        for issue in &issues {
            let device = issue
                .device_id
                .as_ref()
                .map(|id| format!(" ({})", id).dimmed().to_string())
                .unwrap_or_default();
            println!("  [{}] {}{}", severity_tag(issue.severity), issue.message, device);
        }
        if summary.is_clean() {
            println!("  {} no issues", "✓".green());
        }
        println!();
        println!(
            "{} errors, {} warnings, {} info",
            summary.errors.to_string().red(),
            summary.warnings.to_string().yellow(),
            summary.infos.to_string().blue()
        );
    }

    if summary.errors > 0 {
        bail!("{} validation error(s) in {}", summary.errors, file.display());
    }
    Ok(())
}
