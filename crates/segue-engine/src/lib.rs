//! Orchestrator that wires the transition log and the in-memory graph
//! together.
//!
//! The log is the source of truth: [`SegueEngine::open`] replays it once
//! into a fresh graph, and every later [`SegueEngine::add_transition`]
//! commits to the log before the graph is touched. The two analyses are
//! pure queries over the graph's current state, recomputed on demand.
//!
//! Single-threaded by design: the engine is not reentrant-safe, and callers
//! that need concurrent access must serialize all calls through one owner.

mod export;

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use segue_core::{SearchBudget, SearchOutcome, Song, TransitionGraph, TransitionRecord};
use segue_store::TransitionLog;

pub use export::render_longest_path;

/// Coordinates the durable log and the canonical in-memory graph.
pub struct SegueEngine {
    log: TransitionLog,
    graph: TransitionGraph,
}

impl SegueEngine {
    /// Open the log at `path` and replay it into a fresh graph.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_log(TransitionLog::open(path)?)
    }

    /// In-memory engine (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Self::from_log(TransitionLog::open_in_memory()?)
    }

    fn from_log(log: TransitionLog) -> Result<Self> {
        let records = log.list_all()?;
        let mut graph = TransitionGraph::new();
        graph.load_all(&records);
        debug!(
            records = records.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Replayed transition log"
        );
        Ok(Self { log, graph })
    }

    /// Record a transition: append to the log, then apply the same upsert
    /// to the graph. Returns the log-assigned id.
    ///
    /// The append is the commit point; if it fails the graph is untouched
    /// and the error propagates unchanged.
    pub fn add_transition(&mut self, from: Song, to: Song, note: Option<String>) -> Result<i64> {
        let id = self.log.append(&from, &to, note.as_deref())?;
        self.graph.add_transition(from, to, note);
        info!(id, "Recorded transition");
        Ok(id)
    }

    /// The canonical in-memory graph.
    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    /// Every raw log record in ascending id order, duplicates included.
    pub fn records(&self) -> Result<Vec<TransitionRecord>> {
        Ok(self.log.list_all()?)
    }

    /// Weakly-connected components of the current graph.
    pub fn weak_components(&self) -> Vec<Vec<Song>> {
        segue_core::weak_components(&self.graph)
    }

    /// Globally longest simple path. Exponential worst case; see
    /// [`longest_path_bounded`](Self::longest_path_bounded) for a capped
    /// variant.
    pub fn longest_path(&self) -> Vec<Song> {
        segue_core::longest_path(&self.graph)
    }

    /// Longest simple path under an explicit search budget.
    pub fn longest_path_bounded(&self, budget: SearchBudget) -> SearchOutcome {
        segue_core::longest_path_bounded(&self.graph, budget)
    }
}
