//! Weak-connectivity partitioning.

use std::collections::HashMap;

use petgraph::unionfind::UnionFind;

use crate::graph::TransitionGraph;
use crate::song::Song;

/// Partition the node set into weakly-connected components.
///
/// Two songs land in the same group iff an undirected path connects them,
/// i.e. edge direction is ignored. Every song appears in exactly one group.
/// Returns an empty vector for an empty graph.
///
/// Groups are ordered by their first-inserted member and each group lists
/// its members in node insertion order, so output is stable for an
/// unchanged graph.
pub fn weak_components(graph: &TransitionGraph) -> Vec<Vec<Song>> {
    if graph.is_empty() {
        return Vec::new();
    }

    // Nodes are never removed, so stable indices are contiguous from zero.
    let mut sets: UnionFind<usize> = UnionFind::new(graph.node_count());
    for (a, b) in graph.edge_endpoints() {
        sets.union(a.index(), b.index());
    }

    let mut groups: Vec<Vec<Song>> = Vec::new();
    let mut root_to_group: HashMap<usize, usize> = HashMap::new();
    for idx in graph.indices() {
        let root = sets.find(idx.index());
        let slot = *root_to_group.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(graph.song_at(idx).clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(artist: &str, title: &str) -> Song {
        Song::new(artist, title)
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph = TransitionGraph::new();
        assert!(weak_components(&graph).is_empty());
    }

    #[test]
    fn test_disjoint_edges_form_two_components() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("C", "3"), song("D", "4"), None);

        let groups = weak_components(&graph);
        assert_eq!(
            groups,
            vec![
                vec![song("A", "1"), song("B", "2")],
                vec![song("C", "3"), song("D", "4")],
            ]
        );
    }

    #[test]
    fn test_direction_is_ignored() {
        // A -> B and C -> B: no directed path between A and C, but they are
        // weakly connected through B.
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("C", "3"), song("B", "2"), None);

        let groups = weak_components(&graph);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn test_partition_covers_every_node_exactly_once() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("B", "2"), song("C", "3"), None);
        graph.add_transition(song("D", "4"), song("E", "5"), None);
        graph.add_transition(song("F", "6"), song("F", "7"), None);

        let groups = weak_components(&graph);
        let mut all: Vec<Song> = groups.into_iter().flatten().collect();
        let mut expected = graph.songs();
        all.sort_by(|a, b| a.label().cmp(&b.label()));
        expected.sort_by(|a, b| a.label().cmp(&b.label()));
        assert_eq!(all, expected);
    }
}
