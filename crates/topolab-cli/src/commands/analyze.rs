//! Full analysis of a topology file.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use topolab::prelude::*;

use super::{heading, load_graph, money, print_json, severity_tag};
use crate::config::Config;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    let analyzer = config.analyzer()?;
    let doc = load_graph(file)?;
    let report = analyzer.analyze(&doc.devices, &doc.connections);

    if json {
        return print_json(&report);
    }

    let title = match &doc.name {
        Some(name) => format!("Topology Analysis: {}", name),
        None => "Topology Analysis".to_string(),
    };
    heading(&title);
    println!();

    println!("{}", "Structure".blue().bold());
    println!("  Detected type:     {}", report.detected_type.to_string().cyan().bold());
    println!("  Devices:           {}", report.device_count.to_string().cyan());
    println!("  Connections:       {}", report.connection_count.to_string().cyan());
    if report.skipped_connections > 0 {
        println!(
            "  Skipped:           {} (unknown endpoint)",
            report.skipped_connections.to_string().yellow()
        );
    }
    println!("  Components:        {}", report.component_count.to_string().cyan());
    println!();

    println!("{}", "Redundancy".blue().bold());
    let r = &report.redundancy;
    println!("  Path redundancy:   {}%", r.path_redundancy);
    println!("  Link redundancy:   {}%", r.link_redundancy);
    println!("  Overall:           {}%", r.overall_redundancy.to_string().green());
    for path in &r.critical_paths {
        println!("  {} {}", "!".yellow(), path);
    }
    println!();

    println!("{}", "Single Points of Failure".blue().bold());
    let spofs: Vec<_> = report.spof_devices().collect();
    if spofs.is_empty() {
        println!("  {} none", "✓".green());
    }
    for s in spofs {
        let affected: Vec<_> = s.affected_nodes.iter().map(|id| id.as_str()).collect();
        println!(
            "  {} {} ({:?}, affects {})",
            "✗".red(),
            s.label,
            s.impact,
            affected.join(", ")
        );
    }
    println!();

    println!("{}", "Validation".blue().bold());
    if report.issues.is_empty() {
        println!("  {} no issues", "✓".green());
    }
    for issue in &report.issues {
        println!("  [{}] {}", severity_tag(issue.severity), issue.message);
    }
    println!();

    println!("{}", "Cost".blue().bold());
    println!("  Devices:           {}", money(report.cost.devices));
    println!("  Connections:       {}", money(report.cost.connections));
    println!("  Total:             {}", money(report.cost.total).green().bold());
    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
