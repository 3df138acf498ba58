//! Estimate cabling for an archetype.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use topolab::prelude::*;

use super::print_json;
use crate::config::Config;

pub fn run(archetype: Archetype, nodes: u64, json: bool) -> Result<()> {
    let analyzer = Config::load()?.analyzer()?;
    let cables = analyzer.cables(archetype, nodes);
    let requirements = analyzer
        .catalog()
        .definition(archetype)
        .map(|d| &d.characteristics.cable_requirements);

    if json {
        return print_json(&json!({
            "topology": archetype,
            "nodes": nodes,
            "cables": cables,
            "formula": requirements.map(|r| r.formula.as_str()),
        }));
    }

    match cables {
        Some(count) => {
            println!(
                "{} {} with {} nodes needs {} cables",
                "→".blue(),
                archetype.to_string().white().bold(),
                nodes,
                count.to_string().cyan().bold()
            );
            if let Some(req) = requirements {
                println!("  Formula: {}", req.formula);
                println!("  Example: {}", req.example.dimmed());
            }
        }
        None => println!(
            "{} {} has no closed-form cable count; it depends on the topologies combined",
            "•".yellow(),
            archetype
        ),
    }
    Ok(())
}
