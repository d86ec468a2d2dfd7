use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use super::types::DependencyGraph;
use crate::cli::GraphFormat;
use crate::constants::output::GENERATOR;
use crate::error::SlnGraphError;

const INDENT: &str = "    ";

#[derive(Serialize)]
struct JsonGraph<'a> {
    solution: &'a str,
    generator: &'a str,
    nodes: Vec<&'a str>,
    edges: Vec<JsonEdge<'a>>,
    dependencies: BTreeMap<&'a str, Vec<&'a str>>,
}

#[derive(Serialize)]
struct JsonEdge<'a> {
    from: &'a str,
    to: &'a str,
}

/// Renders a [`DependencyGraph`] as text
///
/// Every format lists nodes sorted by name and edges sorted by source, then
/// target, so the output only changes when the graph does.
pub struct GraphRenderer {
    solution_name: String,
    generator: String,
}

impl GraphRenderer {
    pub fn new(solution_name: impl Into<String>) -> Self {
        Self {
            solution_name: solution_name.into(),
            generator: GENERATOR.to_string(),
        }
    }

    /// Override the tool name written into diagram headers
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    pub fn mermaid(&self, graph: &DependencyGraph) -> String {
        let mut lines = vec![
            format!("%% Dependencies diagram for solution: {}", self.solution_name),
            format!("%% Generated by {}", self.generator),
            String::new(),
            "graph TD".to_string(),
        ];

        for node in graph.nodes() {
            lines.push(format!("{INDENT}{node}[\"{}\"]", escape_label(node)));
        }

        lines.push(String::new());

        for (source, target) in graph.edges() {
            lines.push(format!("{INDENT}{source} --> {target}"));
        }

        finish(lines)
    }

    pub fn dot(&self, graph: &DependencyGraph) -> String {
        let mut lines = vec![
            format!("// Dependencies diagram for solution: {}", self.solution_name),
            format!("// Generated by {}", self.generator),
            format!("digraph {} {{", dot_quote(&self.solution_name)),
            format!("{INDENT}rankdir=TB;"),
            format!("{INDENT}node [shape=box, style=rounded];"),
            String::new(),
        ];

        for node in graph.nodes() {
            let id = dot_quote(node);
            lines.push(format!("{INDENT}{id} [label={id}];"));
        }

        lines.push(String::new());

        for (source, target) in graph.edges() {
            lines.push(format!(
                "{INDENT}{} -> {};",
                dot_quote(source),
                dot_quote(target)
            ));
        }

        lines.push("}".to_string());
        finish(lines)
    }

    pub fn json(&self, graph: &DependencyGraph) -> Result<String, SlnGraphError> {
        let edges = graph.edges();
        let mut dependencies: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (source, target) in &edges {
            dependencies.entry(*source).or_default().push(*target);
        }

        let document = JsonGraph {
            solution: &self.solution_name,
            generator: &self.generator,
            nodes: graph.nodes().into_iter().collect(),
            edges: edges
                .iter()
                .map(|&(from, to)| JsonEdge { from, to })
                .collect(),
            dependencies,
        };

        let mut text = serde_json::to_string_pretty(&document)?;
        text.push('\n');
        Ok(text)
    }

    pub fn render(
        &self,
        graph: &DependencyGraph,
        format: GraphFormat,
    ) -> Result<String, SlnGraphError> {
        match format {
            GraphFormat::Mermaid => Ok(self.mermaid(graph)),
            GraphFormat::Dot => Ok(self.dot(graph)),
            GraphFormat::Json => self.json(graph),
        }
    }

    /// Render `graph` and write it to `output`; I/O failures become
    /// [`SlnGraphError::OutputWrite`]
    pub fn write(
        &self,
        graph: &DependencyGraph,
        format: GraphFormat,
        output: &mut dyn Write,
    ) -> Result<(), SlnGraphError> {
        let text = self.render(graph, format)?;

        output.write_all(text.as_bytes())?;
        output.flush()?;
        Ok(())
    }
}

/// Mermaid diagram of `graph` with default settings
pub fn render(graph: &DependencyGraph, solution_name: &str) -> String {
    GraphRenderer::new(solution_name).mermaid(graph)
}

/// Escape quote characters for use inside a Mermaid node label
pub fn escape_label(name: &str) -> String {
    name.replace('"', "\\\"").replace('\'', "\\'")
}

fn dot_quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn graph(edges: &[(&str, &str)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for (source, target) in edges {
            graph.add_dependency(source, target);
        }
        graph
    }

    #[test]
    fn test_mermaid_layout() {
        let graph = graph(&[("Web", "Core"), ("Api", "Data"), ("Api", "Core")]);

        let output = GraphRenderer::new("Shop").mermaid(&graph);

        assert_eq!(
            output,
            "%% Dependencies diagram for solution: Shop\n\
             %% Generated by sln-graph\n\
             \n\
             graph TD\n    \
             Api[\"Api\"]\n    \
             Core[\"Core\"]\n    \
             Data[\"Data\"]\n    \
             Web[\"Web\"]\n\
             \n    \
             Api --> Core\n    \
             Api --> Data\n    \
             Web --> Core\n"
        );
    }

    #[test]
    fn test_quotes_are_escaped_in_labels_only() {
        let graph = graph(&[("Weird\"Name", "It's")]);

        let output = render(&graph, "Odd");

        assert!(output.contains("    Weird\"Name[\"Weird\\\"Name\"]\n"));
        assert!(output.contains("    It's[\"It\\'s\"]\n"));
        assert!(output.contains("    Weird\"Name --> It's\n"));
    }

    #[test]
    fn test_empty_graph_keeps_header() {
        let output = render(&DependencyGraph::new(), "Empty");

        assert_eq!(
            output,
            "%% Dependencies diagram for solution: Empty\n%% Generated by sln-graph\n\ngraph TD\n\n"
        );
    }

    #[test]
    fn test_custom_generator() {
        let output = GraphRenderer::new("Shop")
            .with_generator("print-modules-graph")
            .mermaid(&DependencyGraph::new());

        assert!(output.starts_with(
            "%% Dependencies diagram for solution: Shop\n%% Generated by print-modules-graph\n"
        ));
    }

    #[test]
    fn test_dot_output() {
        let graph = graph(&[("Api", "Core")]);

        let output = GraphRenderer::new("Shop").dot(&graph);

        assert_eq!(
            output,
            "// Dependencies diagram for solution: Shop\n\
             // Generated by sln-graph\n\
             digraph \"Shop\" {\n    \
             rankdir=TB;\n    \
             node [shape=box, style=rounded];\n\
             \n    \
             \"Api\" [label=\"Api\"];\n    \
             \"Core\" [label=\"Core\"];\n\
             \n    \
             \"Api\" -> \"Core\";\n\
             }\n"
        );
    }

    #[test]
    fn test_json_output() {
        let graph = graph(&[("Api", "Data"), ("Api", "Core")]);

        let output = GraphRenderer::new("Shop").json(&graph).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["solution"], "Shop");
        assert_eq!(value["nodes"], serde_json::json!(["Api", "Core", "Data"]));
        assert_eq!(value["edges"][0], serde_json::json!({"from": "Api", "to": "Core"}));
        assert_eq!(value["dependencies"]["Api"], serde_json::json!(["Core", "Data"]));
    }

    #[test]
    fn test_write_dispatches_on_format() {
        let graph = graph(&[("Api", "Core")]);
        let renderer = GraphRenderer::new("Shop");
        let mut output = Vec::new();

        renderer
            .write(&graph, GraphFormat::Dot, &mut output)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), renderer.dot(&graph));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let graph = graph(&[("Api", "Core")]);

        let err = GraphRenderer::new("Shop")
            .write(&graph, GraphFormat::Mermaid, &mut ClosedPipe)
            .unwrap_err();

        assert!(matches!(err, SlnGraphError::OutputWrite(_)));
    }
}
