//! Compare archetypes from the catalog side by side.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use topolab::prelude::*;

use super::{heading, print_json};
use crate::config::Config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareOutput<'a> {
    selected: &'a [Archetype],
    metrics: Vec<ComparisonMetrics>,
    matrix: Vec<&'a ComparisonEntry>,
}

pub fn run(picks: &[Archetype], json: bool) -> Result<()> {
    let config = Config::load()?;
    let analyzer = config.analyzer()?;

    let selection = if picks.is_empty() {
        Selection::starter(analyzer.compare_config())
    } else {
        let mut selection = Selection::new(analyzer.compare_config());
        for archetype in picks {
            selection.toggle(*archetype);
        }
        selection
    };

    let catalog = analyzer.catalog();
    let output = CompareOutput {
        selected: selection.as_slice(),
        metrics: compare(&catalog.definitions, &selection),
        matrix: selection
            .as_slice()
            .iter()
            .filter_map(|a| catalog.comparison(*a))
            .collect(),
    };

    if json {
        return print_json(&output);
    }

    heading("Topology Comparison");
    if output.selected.is_empty() {
        println!("  Nothing selected.");
        return Ok(());
    }
    println!();

    if !output.metrics.is_empty() {
        println!("{}", "Scores (0-100)".blue().bold());
        print!("  {:<16}", "");
        for m in &output.metrics {
            print!("{:>16}", m.topology.to_string().cyan());
        }
        println!();
        if let Some(first) = output.metrics.first() {
            for (i, (axis, _)) in first.scores.axes().iter().enumerate() {
                print!("  {:<16}", axis);
                for m in &output.metrics {
                    print!("{:>16}", m.scores.axes()[i].1);
                }
                println!();
            }
        }
        print!("  {:<16}", "edges/node");
        for m in &output.metrics {
            print!("{:>16.2}", m.avg_path_length);
        }
        println!();
        println!();
    }

    for entry in &output.matrix {
        println!(
            "{} {}  cost {}/10  redundancy {}/10  scalability {}/10  complexity {}/10",
            "→".blue(),
            entry.topology.to_string().white().bold(),
            entry.cost_score,
            entry.redundancy_score,
            entry.scalability_score,
            entry.complexity
        );
        for pro in &entry.pros {
            println!("    {} {}", "+".green(), pro);
        }
        for con in &entry.cons {
            println!("    {} {}", "-".red(), con);
        }
    }

    Ok(())
}
