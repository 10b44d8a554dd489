//! Longest-simple-path discovery.
//!
//! Exhaustive search over all simple directed paths between all ordered node
//! pairs. Worst-case exponential in the number of nodes (the problem is
//! NP-hard in general digraphs); acceptable for small, human-curated graphs.
//! [`longest_path_bounded`] caps the number of complete paths enumerated and
//! reports best-so-far when the budget runs out.

use petgraph::stable_graph::NodeIndex;

use crate::graph::TransitionGraph;
use crate::song::Song;

/// Budget for the exhaustive search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBudget {
    /// Maximum number of complete simple paths to enumerate across all
    /// (source, target) pairs. `None` means unbounded.
    pub max_paths: Option<usize>,
}

impl SearchBudget {
    /// Unbounded search.
    pub fn unlimited() -> Self {
        Self { max_paths: None }
    }

    /// Cap the number of enumerated paths.
    pub fn max_paths(limit: usize) -> Self {
        Self {
            max_paths: Some(limit),
        }
    }
}

/// Result of a bounded longest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Longest simple path found, in traversal order. Empty when the graph
    /// has fewer than 2 nodes or no edges.
    pub path: Vec<Song>,
    /// True when the budget ran out before the search space was exhausted,
    /// in which case `path` is best-effort rather than provably maximal.
    pub exhausted: bool,
}

/// Find the simple path with the greatest number of nodes anywhere in the
/// graph.
///
/// Deterministic: sources and targets are enumerated in node insertion
/// order, successors in outgoing-edge insertion order, and the first path
/// found at the maximum length wins. Repeated calls on an unchanged graph
/// return identical sequences.
pub fn longest_path(graph: &TransitionGraph) -> Vec<Song> {
    longest_path_bounded(graph, SearchBudget::unlimited()).path
}

/// [`longest_path`] with an explicit search budget.
pub fn longest_path_bounded(graph: &TransitionGraph, budget: SearchBudget) -> SearchOutcome {
    if graph.node_count() < 2 || graph.edge_count() == 0 {
        return SearchOutcome {
            path: Vec::new(),
            exhausted: false,
        };
    }

    let mut search = PathSearch {
        graph,
        on_path: vec![false; graph.node_count()],
        path: Vec::new(),
        best: Vec::new(),
        // A zero budget would stop before the first path; clamp to one.
        remaining: budget.max_paths.unwrap_or(usize::MAX).max(1),
        exhausted: false,
    };
    search.run();

    SearchOutcome {
        path: search
            .best
            .iter()
            .map(|&idx| graph.song_at(idx).clone())
            .collect(),
        exhausted: search.exhausted,
    }
}

struct PathSearch<'a> {
    graph: &'a TransitionGraph,
    /// Membership flags for the current DFS path, indexed by node index.
    /// Scoped to the path, not the whole search, so cycles are excluded
    /// without a separate detection pass.
    on_path: Vec<bool>,
    path: Vec<NodeIndex>,
    best: Vec<NodeIndex>,
    remaining: usize,
    exhausted: bool,
}

impl PathSearch<'_> {
    fn run(&mut self) {
        let nodes: Vec<NodeIndex> = self.graph.indices().collect();
        let total = nodes.len();
        for &source in &nodes {
            for &target in &nodes {
                if source == target {
                    continue;
                }
                self.path.clear();
                self.path.push(source);
                self.on_path.fill(false);
                self.on_path[source.index()] = true;
                if !self.dfs(source, target) {
                    self.exhausted = true;
                    return;
                }
                // A path visiting every node cannot be beaten.
                if self.best.len() == total {
                    return;
                }
            }
        }
    }

    /// Extend the current path from `node` toward `target`, recording every
    /// complete simple path. Returns false when the budget is spent.
    fn dfs(&mut self, node: NodeIndex, target: NodeIndex) -> bool {
        for succ in self.graph.successors(node) {
            if self.on_path[succ.index()] {
                continue;
            }
            self.path.push(succ);
            if succ == target {
                // Stop on the path after the budget, not the last budgeted
                // one, so a search space of exactly `max_paths` paths still
                // counts as fully explored.
                if self.remaining == 0 {
                    self.path.pop();
                    return false;
                }
                self.remaining -= 1;
                // Strict comparison keeps the first path found at the
                // maximum length, making the tie-break reproducible.
                if self.path.len() > self.best.len() {
                    self.best = self.path.clone();
                }
                self.path.pop();
                continue;
            }
            self.on_path[succ.index()] = true;
            let within_budget = self.dfs(succ, target);
            self.on_path[succ.index()] = false;
            self.path.pop();
            if !within_budget {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(artist: &str, title: &str) -> Song {
        Song::new(artist, title)
    }

    fn labels(path: &[Song]) -> Vec<String> {
        path.iter().map(Song::label).collect()
    }

    #[test]
    fn test_empty_graph_yields_empty_path() {
        let graph = TransitionGraph::new();
        assert!(longest_path(&graph).is_empty());
    }

    #[test]
    fn test_single_edge() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        assert_eq!(longest_path(&graph), vec![song("A", "1"), song("B", "2")]);
    }

    #[test]
    fn test_linear_chain() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("B", "2"), song("C", "3"), None);
        graph.add_transition(song("C", "3"), song("D", "4"), None);

        assert_eq!(
            labels(&longest_path(&graph)),
            vec!["A – 1", "B – 2", "C – 3", "D – 4"]
        );
    }

    #[test]
    fn test_cycle_yields_simple_path() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("B", "2"), song("C", "3"), None);
        graph.add_transition(song("C", "3"), song("A", "1"), None);

        let path = longest_path(&graph);
        assert_eq!(path.len(), 3);
        // No node may repeat despite the cycle.
        for (i, a) in path.iter().enumerate() {
            for b in &path[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_disjoint_edges_pick_first_pair_in_insertion_order() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("C", "3"), song("D", "4"), None);

        assert_eq!(longest_path(&graph), vec![song("A", "1"), song("B", "2")]);
    }

    #[test]
    fn test_branching_takes_longer_branch() {
        // A -> B -> C and A -> D: the three-node branch wins.
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("D", "4"), None);
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("B", "2"), song("C", "3"), None);

        assert_eq!(
            labels(&longest_path(&graph)),
            vec!["A – 1", "B – 2", "C – 3"]
        );
    }

    #[test]
    fn test_equal_length_tie_goes_to_earlier_inserted_edge() {
        // A -> B and A -> C are both two-node paths; the edge inserted
        // first must win, and keep winning on repeated calls.
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("A", "1"), song("C", "3"), None);

        let path = longest_path(&graph);
        assert_eq!(path, vec![song("A", "1"), song("B", "2")]);
        assert_eq!(longest_path(&graph), path);
    }

    #[test]
    fn test_deterministic_across_repeated_calls() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("B", "2"), song("C", "3"), None);
        graph.add_transition(song("C", "3"), song("A", "1"), None);
        graph.add_transition(song("B", "2"), song("D", "4"), None);

        let first = longest_path(&graph);
        let second = longest_path(&graph);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_longer_simple_path_exists() {
        // Diamond plus a tail; the returned path must dominate a brute
        // check over edges.
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("A", "1"), song("C", "3"), None);
        graph.add_transition(song("B", "2"), song("D", "4"), None);
        graph.add_transition(song("C", "3"), song("D", "4"), None);
        graph.add_transition(song("D", "4"), song("E", "5"), None);

        let path = longest_path(&graph);
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), Some(&song("A", "1")));
        assert_eq!(path.last(), Some(&song("E", "5")));
    }

    #[test]
    fn test_budget_returns_best_so_far() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("B", "2"), song("C", "3"), None);
        graph.add_transition(song("C", "3"), song("D", "4"), None);

        let outcome = longest_path_bounded(&graph, SearchBudget::max_paths(1));
        assert!(outcome.exhausted);
        // The very first enumerated pair is (A, B).
        assert_eq!(outcome.path, vec![song("A", "1"), song("B", "2")]);

        let full = longest_path_bounded(&graph, SearchBudget::max_paths(1_000));
        assert!(!full.exhausted);
        assert_eq!(full.path.len(), 4);
    }

    #[test]
    fn test_budget_matching_search_space_is_not_exhausted() {
        // Disjoint edges hold exactly two simple paths, one per edge. A
        // budget of two covers the whole search space and must not be
        // reported as exhausted; one less must be.
        let mut graph = TransitionGraph::new();
        graph.add_transition(song("A", "1"), song("B", "2"), None);
        graph.add_transition(song("C", "3"), song("D", "4"), None);

        let exact = longest_path_bounded(&graph, SearchBudget::max_paths(2));
        assert!(!exact.exhausted);
        assert_eq!(exact.path, vec![song("A", "1"), song("B", "2")]);

        let short = longest_path_bounded(&graph, SearchBudget::max_paths(1));
        assert!(short.exhausted);
    }
}
