//! Components command: show weakly-connected groups of the graph.

use anyhow::Result;

use segue_engine::SegueEngine;

/// Execute the components command.
pub fn execute(engine: &SegueEngine) -> Result<()> {
    let groups = engine.weak_components();

    if groups.is_empty() {
        println!("Graph is empty.");
        return Ok(());
    }

    println!("🧩 {} component(s)", groups.len());
    for (i, group) in groups.iter().enumerate() {
        println!();
        println!("Component {} ({} song(s)):", i + 1, group.len());
        for song in group {
            println!("   {}", song);
        }
    }
    Ok(())
}
