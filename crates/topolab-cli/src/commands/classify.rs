//! Name the shape of a topology file.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::Path;
use topolab::prelude::*;

use super::{load_graph, print_json};

pub fn run(file: &Path, json: bool) -> Result<()> {
    let doc = load_graph(file)?;
    let detected = classify(&doc.devices, &doc.connections);

    if json {
        return print_json(&json!({ "detectedType": detected }));
    }

    println!(
        "{} {} devices, {} connections: {}",
        "→".blue(),
        doc.devices.len(),
        doc.connections.len(),
        detected.to_string().cyan().bold()
    );
    Ok(())
}
