//! CLI command implementations.

pub mod analyze;
pub mod cables;
pub mod classify;
pub mod compare;
pub mod init;
pub mod templates;
pub mod validate;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::path::Path;
use topolab::prelude::*;

/// Read an export or bare `{devices, connections}` document.
pub fn load_graph(path: &Path) -> Result<GraphDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    GraphDocument::from_json_str(&json)
        .with_context(|| format!("Failed to parse topology: {}", path.display()))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn heading(title: &str) {
    println!("{}", title.white().bold());
    println!("{}", "═".repeat(40).dimmed());
}

pub(crate) fn severity_tag(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
        Severity::Info => "info".blue(),
    }
}

pub(crate) fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}
