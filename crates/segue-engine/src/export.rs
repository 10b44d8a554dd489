//! Text rendering of a longest path together with its edge notes.

use segue_core::{Song, TransitionGraph};

/// Placeholder printed for edges without a note.
const NO_NOTE: &str = "(no note)";

/// Render a path as the export text:
///
/// ```text
/// <label_1> → <label_2> → … → <label_n>
///
/// Notes:
/// <label_1> → <label_2>: <note or "(no note)">
/// …
/// ```
///
/// Returns `None` for an empty path; callers signal "no path available"
/// themselves instead of emitting the template.
pub fn render_longest_path(graph: &TransitionGraph, path: &[Song]) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    let labels: Vec<String> = path.iter().map(Song::label).collect();
    let mut lines = vec![labels.join(" → "), String::new(), "Notes:".to_string()];
    for pair in path.windows(2) {
        let note = graph
            .note(&pair[0], &pair[1])
            .flatten()
            .unwrap_or(NO_NOTE)
            .to_string();
        lines.push(format!("{} → {}: {}", pair[0].label(), pair[1].label(), note));
    }
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_renders_nothing() {
        let graph = TransitionGraph::new();
        assert_eq!(render_longest_path(&graph, &[]), None);
    }

    #[test]
    fn test_renders_labels_and_notes() {
        let mut graph = TransitionGraph::new();
        graph.add_transition(
            Song::new("A", "1"),
            Song::new("B", "2"),
            Some("tempo match".into()),
        );
        graph.add_transition(Song::new("B", "2"), Song::new("C", "3"), None);

        let path = vec![Song::new("A", "1"), Song::new("B", "2"), Song::new("C", "3")];
        let text = render_longest_path(&graph, &path).unwrap();
        assert_eq!(
            text,
            "A – 1 → B – 2 → C – 3\n\
             \n\
             Notes:\n\
             A – 1 → B – 2: tempo match\n\
             B – 2 → C – 3: (no note)"
        );
    }
}
