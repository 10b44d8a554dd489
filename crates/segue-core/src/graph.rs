//! The canonical in-memory transition graph.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::record::TransitionRecord;
use crate::song::Song;

/// Directed graph of song transitions, replayed from the log and kept in
/// sync incrementally.
///
/// One node per distinct song identity, at most one edge per ordered
/// (from, to) pair. Re-inserting an existing pair overwrites the edge note
/// rather than creating a parallel edge; the append-only log underneath
/// retains every raw record regardless.
///
/// Nodes and edges are never removed, so node and edge indices ascend in
/// insertion order. The analyses rely on that order for deterministic
/// results.
#[derive(Debug, Default)]
pub struct TransitionGraph {
    graph: StableDiGraph<Song, Option<String>>,
    index: HashMap<Song, NodeIndex>,
}

impl TransitionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the graph and apply every record in ascending id order.
    ///
    /// Uses the same edge-upsert rule as [`add_transition`](Self::add_transition),
    /// so replaying the log reproduces the exact live graph.
    pub fn load_all(&mut self, records: &[TransitionRecord]) {
        self.graph.clear();
        self.index.clear();
        for record in records {
            self.add_transition(record.from.clone(), record.to.clone(), record.note.clone());
        }
    }

    /// Insert or overwrite the (from, to) edge with the given note.
    ///
    /// Endpoint nodes are created lazily on first sight. No validation is
    /// performed; callers reject empty artist/title fields before getting
    /// here. Purely in-memory, infallible.
    pub fn add_transition(&mut self, from: Song, to: Song, note: Option<String>) {
        let a = self.intern(from);
        let b = self.intern(to);
        match self.graph.find_edge(a, b) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    *weight = note;
                }
            }
            None => {
                self.graph.add_edge(a, b, note);
            }
        }
    }

    /// Snapshot of all songs in node insertion order.
    pub fn songs(&self) -> Vec<Song> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].clone())
            .collect()
    }

    /// Snapshot of all edges as (from, to, note) triples in edge insertion
    /// order.
    pub fn transitions(&self) -> Vec<(Song, Song, Option<String>)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].clone(),
                    self.graph[edge.target()].clone(),
                    edge.weight().clone(),
                )
            })
            .collect()
    }

    /// Current note of the (from, to) edge.
    ///
    /// `None` when no such edge exists; `Some(None)` when the edge exists
    /// but carries no note.
    pub fn note(&self, from: &Song, to: &Song) -> Option<Option<&str>> {
        let a = *self.index.get(from)?;
        let b = *self.index.get(to)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).map(|w| w.as_deref())
    }

    /// Whether the song appears as an endpoint of any recorded transition.
    pub fn contains(&self, song: &Song) -> bool {
        self.index.contains_key(song)
    }

    /// Number of distinct songs.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct (from, to) pairs.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True when no transition has ever been applied.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    fn intern(&mut self, song: Song) -> NodeIndex {
        if let Some(&idx) = self.index.get(&song) {
            return idx;
        }
        let idx = self.graph.add_node(song.clone());
        self.index.insert(song, idx);
        idx
    }

    /// Node indices in insertion order.
    pub(crate) fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Song stored at a node index.
    pub(crate) fn song_at(&self, idx: NodeIndex) -> &Song {
        &self.graph[idx]
    }

    /// Direct successors of a node in outgoing-edge insertion order.
    ///
    /// petgraph walks adjacency lists newest-edge-first; reversing restores
    /// insertion order, which the longest-path tie-break depends on.
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        out.reverse();
        out
    }

    /// Endpoint index pairs of every edge, in edge insertion order.
    pub(crate) fn edge_endpoints(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target()))
    }
}
