//! Wipe command - remove a webes project tree

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Top-level directories owned by a webes project
const PROJECT_ROOTS: [&str; 2] = ["dist", "dev"];

/// Remove `dist/` and `dev/` under `root`, asking first unless `force` is set
pub fn execute(root: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let targets = wipe_targets(root);

    if targets.is_empty() {
        println!("Nothing to wipe in {}", root.display());
        return Ok(());
    }

    println!("Would delete:");
    for target in &targets {
        println!("  {}", target.display());
    }

    if !force {
        print!("\nDelete these directories? [y/N] ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    for target in &targets {
        std::fs::remove_dir_all(target)?;
        tracing::info!("Removed {}", target.display());
    }
    println!("Removed {} directories.", targets.len());
    Ok(())
}

/// Project directories that currently exist under `root`
fn wipe_targets(root: &Path) -> Vec<PathBuf> {
    PROJECT_ROOTS
        .iter()
        .map(|name| root.join(name))
        .filter(|path| path.is_dir())
        .collect()
}
