//! Add command: record one transition.

use anyhow::Result;

use segue_core::Song;
use segue_engine::SegueEngine;

/// Validate the song fields, then append the transition.
///
/// Validation lives here, not in the engine: the core accepts any strings,
/// the boundary rejects blank artist/title before they reach it.
pub fn execute(
    engine: &mut SegueEngine,
    from_artist: &str,
    from_title: &str,
    to_artist: &str,
    to_title: &str,
    note: Option<&str>,
) -> Result<()> {
    let from = Song::new(from_artist.trim(), from_title.trim());
    let to = Song::new(to_artist.trim(), to_title.trim());

    if from.artist.is_empty() || from.title.is_empty() || to.artist.is_empty() || to.title.is_empty()
    {
        anyhow::bail!("Artist and Title are required for both songs.");
    }

    let note = note.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
    let id = engine.add_transition(from.clone(), to.clone(), note)?;

    println!("✅ Recorded transition #{}: {} → {}", id, from, to);
    Ok(())
}
