//! List builder templates and export one as a topology file.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::path::Path;
use topolab::prelude::*;

use super::{heading, money, print_json};
use crate::config::Config;

pub fn list(json: bool) -> Result<()> {
    let analyzer = Config::load()?.analyzer()?;
    let templates = &analyzer.catalog().templates;

    if json {
        return print_json(templates);
    }

    heading("Builder Templates");
    for t in templates {
        let cost = calculate_cost(&t.devices, &t.connections);
        println!(
            "  {:<14} {} ({} devices, {})",
            t.id.cyan(),
            t.name.white().bold(),
            t.devices.len(),
            money(cost.total)
        );
        println!("  {:<14} {}", "", t.description.dimmed());
    }
    Ok(())
}

/// Export template `id`, to `output` if given, otherwise to stdout.
pub fn export(id: &str, output: Option<&Path>) -> Result<()> {
    let analyzer = Config::load()?.analyzer()?;
    let export = template_export(analyzer.catalog(), id)?;
    let json = export.to_json_pretty()?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Exported {} ({}) to {}",
                "✓".green(),
                export.name,
                export.detected_type,
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn template_export(catalog: &Catalog, id: &str) -> Result<TopologyExport> {
    let template = catalog.template(id).ok_or_else(|| {
        let known: Vec<_> = catalog.templates.iter().map(|t| t.id.as_str()).collect();
        anyhow!("Unknown template '{}'. Available: {}", id, known.join(", "))
    })?;

    let mut draft = TopologyDraft::new(catalog.prices.clone());
    draft.load_template(template)?;
    Ok(draft.export(template.name.clone()))
}
