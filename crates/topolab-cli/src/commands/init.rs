//! Initialize a Topolab project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<&Path>) -> Result<()> {
    let base_path = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Topolab project...", "→".blue());
    let config_path = write_config(&base_path)?;
    match config_path {
        Some(p) => println!("  {} Created {}", "✓".green(), p.display()),
        None => println!(
            "  {} {} already exists",
            "•".yellow(),
            base_path.join(CONFIG_FILE).display()
        ),
    }

    println!();
    println!("Next steps:");
    println!("  {} topolab template small-office -o office.json", "1.".blue());
    println!("  {} topolab analyze office.json", "2.".blue());
    println!("  {} topolab compare star mesh three-tier", "3.".blue());

    Ok(())
}

/// Write the starter config unless one exists. Returns the path written.
fn write_config(base_path: &Path) -> Result<Option<PathBuf>> {
    std::fs::create_dir_all(base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;
    let config_path = base_path.join(CONFIG_FILE);
    if config_path.exists() {
        return Ok(None);
    }
    Config::starter().save(&config_path)?;
    Ok(Some(config_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_config(dir.path()).unwrap();
        assert_eq!(written, Some(dir.path().join(CONFIG_FILE)));

        std::fs::write(dir.path().join(CONFIG_FILE), "[compare]\nmax-selected = 2\n").unwrap();
        assert_eq!(write_config(dir.path()).unwrap(), None);

        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.compare.max_selected, 2);
    }
}
