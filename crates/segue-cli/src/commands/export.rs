//! Export command: write the longest path and its notes to a text file.

use std::path::Path;

use anyhow::{Context, Result};

use segue_engine::{render_longest_path, SegueEngine};

/// Execute the export command.
pub fn execute(engine: &SegueEngine, output: &Path) -> Result<()> {
    let path = engine.longest_path();
    let text = match render_longest_path(engine.graph(), &path) {
        Some(text) => text,
        None => anyhow::bail!("No path found to export."),
    };

    std::fs::write(output, text)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("💾 Saved longest path to: {}", output.display());
    Ok(())
}
