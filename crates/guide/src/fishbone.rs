//! Ishikawa (fishbone) diagram builder.
//!
//! A diagram is a problem node, six fixed category nodes and any number
//! of free-text cause nodes per category. The graph is emitted as
//! Graphviz DOT; layout is left to Graphviz.

use std::fmt::Write as _;

use serde::Serialize;

pub const DEFAULT_PROBLEM: &str = "High Bearing Temperature";
pub const PROBLEM_NODE: &str = "Problem";

categorical! {
    /// The six M's of cause classification.
    pub enum Category {
        Human => "Human",
        Machine => "Machine",
        Method => "Method",
        Material => "Material",
        Environment => "Environment",
        Measurement => "Measurement",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Problem,
    Category,
    Cause,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

/// Directed edge `from -> to`; causes point at their category and
/// categories point at the problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fishbone {
    problem: String,
    causes: Vec<(Category, Vec<String>)>,
}

impl Default for Fishbone {
    fn default() -> Self {
        Fishbone::new(DEFAULT_PROBLEM)
    }
}

impl Fishbone {
    pub fn new(problem: impl Into<String>) -> Self {
        Fishbone {
            problem: problem.into(),
            causes: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// Add causes from free text, one per line. Lines are trimmed and
    /// blank lines dropped.
    pub fn add_causes(&mut self, category: Category, text: &str) {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        if let Some((_, list)) = self.causes.iter_mut().find(|(c, _)| *c == category) {
            list.extend(lines);
        }
    }

    pub fn with_causes(mut self, category: Category, text: &str) -> Self {
        self.add_causes(category, text);
        self
    }

    pub fn causes(&self, category: Category) -> &[String] {
        self.causes
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes = vec![Node {
            id: PROBLEM_NODE.to_string(),
            label: self.problem.clone(),
            kind: NodeKind::Problem,
        }];
        for (category, causes) in &self.causes {
            nodes.push(Node {
                id: category.as_str().to_string(),
                label: category.as_str().to_string(),
                kind: NodeKind::Category,
            });
            for (idx, cause) in causes.iter().enumerate() {
                nodes.push(Node {
                    id: cause_id(*category, idx),
                    label: cause.clone(),
                    kind: NodeKind::Cause,
                });
            }
        }
        nodes
    }

    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (category, causes) in &self.causes {
            edges.push(Edge {
                from: category.as_str().to_string(),
                to: PROBLEM_NODE.to_string(),
            });
            for idx in 0..causes.len() {
                edges.push(Edge {
                    from: cause_id(*category, idx),
                    to: category.as_str().to_string(),
                });
            }
        }
        edges
    }

    /// Render as a Graphviz digraph.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_dot(&mut out);
        out
    }

    fn write_dot(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "digraph {{")?;
        writeln!(out, "    rankdir=LR;")?;
        writeln!(out, "    size=\"8\";")?;
        for node in self.nodes() {
            let style = match node.kind {
                NodeKind::Problem => "shape=ellipse, style=filled, fillcolor=lightcoral",
                NodeKind::Category => "shape=box, style=filled, fillcolor=lightblue",
                NodeKind::Cause => "shape=note",
            };
            writeln!(
                out,
                "    \"{}\" [label=\"{}\", {}];",
                escape(&node.id),
                escape(&node.label),
                style
            )?;
        }
        for edge in self.edges() {
            writeln!(
                out,
                "    \"{}\" -> \"{}\";",
                escape(&edge.from),
                escape(&edge.to)
            )?;
        }
        writeln!(out, "}}")
    }
}

fn cause_id(category: Category, idx: usize) -> String {
    format!("{}_{}", category.as_str(), idx)
}

/// Escape a string for use inside a double-quoted DOT id.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_diagram_has_problem_and_six_categories() {
        let fb = Fishbone::default();
        assert_eq!(fb.problem(), DEFAULT_PROBLEM);
        let nodes = fb.nodes();
        assert_eq!(nodes.len(), 7);
        assert_eq!(nodes[0].kind, NodeKind::Problem);
        assert_eq!(fb.edges().len(), 6);
        assert!(fb.edges().iter().all(|e| e.to == PROBLEM_NODE));
    }

    #[test]
    fn causes_are_trimmed_and_blank_lines_dropped() {
        let fb = Fishbone::new("Pump trip").with_causes(
            Category::Machine,
            "  worn impeller \n\n   \nseal leak\n",
        );
        assert_eq!(fb.causes(Category::Machine), ["worn impeller", "seal leak"]);
        assert!(fb.causes(Category::Human).is_empty());
    }

    #[test]
    fn cause_nodes_are_indexed_per_category() {
        let fb = Fishbone::new("x")
            .with_causes(Category::Human, "fatigue\nno training")
            .with_causes(Category::Measurement, "bad gauge");
        let ids: Vec<String> = fb
            .nodes()
            .into_iter()
            .filter(|n| n.kind == NodeKind::Cause)
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["Human_0", "Human_1", "Measurement_0"]);
        assert!(fb.edges().contains(&Edge {
            from: "Human_1".to_string(),
            to: "Human".to_string(),
        }));
    }

    #[test]
    fn add_causes_appends() {
        let mut fb = Fishbone::new("x");
        fb.add_causes(Category::Method, "a");
        fb.add_causes(Category::Method, "b");
        assert_eq!(fb.causes(Category::Method), ["a", "b"]);
    }

    #[test]
    fn dot_output_layout() {
        let dot = Fishbone::new("High Bearing Temperature")
            .with_causes(Category::Material, "wrong grease")
            .to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("size=\"8\";"));
        assert!(dot.contains(
            "\"Problem\" [label=\"High Bearing Temperature\", shape=ellipse, style=filled, fillcolor=lightcoral];"
        ));
        assert!(dot.contains(
            "\"Material\" [label=\"Material\", shape=box, style=filled, fillcolor=lightblue];"
        ));
        assert!(dot.contains("\"Material_0\" [label=\"wrong grease\", shape=note];"));
        assert!(dot.contains("\"Material_0\" -> \"Material\";"));
        assert!(dot.contains("\"Material\" -> \"Problem\";"));
    }

    #[test]
    fn labels_are_escaped() {
        let dot = Fishbone::new("say \"hi\" \\ bye").to_dot();
        assert!(dot.contains("label=\"say \\\"hi\\\" \\\\ bye\""));
    }
}
