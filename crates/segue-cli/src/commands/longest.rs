//! Longest command: find and print the longest simple path.

use anyhow::Result;

use segue_core::SearchBudget;
use segue_engine::{render_longest_path, SegueEngine};

/// Execute the longest command.
///
/// `max_paths` caps the exhaustive search; when the cap is hit the result
/// is best-effort and flagged as such.
pub fn execute(engine: &SegueEngine, max_paths: Option<usize>) -> Result<()> {
    let budget = match max_paths {
        Some(limit) => SearchBudget::max_paths(limit),
        None => SearchBudget::unlimited(),
    };
    let outcome = engine.longest_path_bounded(budget);

    match render_longest_path(engine.graph(), &outcome.path) {
        Some(text) => {
            if outcome.exhausted {
                println!("⚠️  Search budget exhausted; showing best path found so far.");
                println!();
            }
            println!("{}", text);
        }
        None => println!("No path available."),
    }
    Ok(())
}
