//! Graphviz export.
//!
//! [`to_graph`] converts a [`Diagram`] into a `dot_structures` digraph, which
//! is printed to DOT text and, for image formats, piped through the `dot`
//! executable by `graphviz-rust`.

use std::{
    io,
    process::{Command, ExitStatus},
};

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec_dot,
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info, trace};

use cloudsketch_core::diagram::{Attributes, Diagram, Edge, Node, Scope};

use super::{Error, Exporter, OutputFormat};

const DOT_EXECUTABLE: &str = "dot";

const FONT_NAME: &str = "Sans-Serif";
const FONT_COLOR: &str = "#2D3436";
const EDGE_COLOR: &str = "#7B8894";
const CLUSTER_PEN_COLOR: &str = "#AEB6BE";

/// Cluster backgrounds, cycled by nesting depth.
const CLUSTER_BACKGROUNDS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

/// Renders diagrams to PNG or SVG through the Graphviz `dot` executable.
#[derive(Debug, Clone)]
pub struct GraphvizExporter {
    format: OutputFormat,
    dpi: Option<u32>,
}

impl GraphvizExporter {
    /// Creates an exporter for `format`.
    ///
    /// [`OutputFormat::Dot`] is accepted and yields Graphviz's canonical DOT
    /// output; use [`DotExporter`] to skip the backend entirely.
    pub fn new(format: OutputFormat, dpi: Option<u32>) -> Self {
        Self { format, dpi }
    }

    fn command_format(&self) -> Format {
        match self.format {
            OutputFormat::Png => Format::Png,
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Dot => Format::Dot,
        }
    }
}

impl Exporter for GraphvizExporter {
    fn format(&self) -> OutputFormat {
        self.format
    }

    fn check_available(&self) -> Result<(), Error> {
        debug!(executable = DOT_EXECUTABLE; "Checking Graphviz backend");
        let output = Command::new(DOT_EXECUTABLE)
            .arg("-V")
            .output()
            .map_err(classify_spawn_error)?;
        check_version_status(output.status, &output.stderr)
    }

    fn export(&self, diagram: &Diagram) -> Result<Vec<u8>, Error> {
        let dot = to_dot(diagram, self.dpi);
        info!(diagram = diagram.name(), format:% = self.format; "Running Graphviz");

        let bytes = exec_dot(dot, vec![CommandArg::Format(self.command_format())])
            .map_err(classify_export_error)?;

        if bytes.is_empty() {
            return Err(Error::Render(format!(
                "Graphviz produced no output for diagram `{}`",
                diagram.name()
            )));
        }
        Ok(bytes)
    }
}

/// Writes the DOT description itself; needs no backend.
#[derive(Debug, Clone, Default)]
pub struct DotExporter {
    dpi: Option<u32>,
}

impl DotExporter {
    /// Creates a DOT exporter; `dpi` is written as a graph attribute.
    pub fn new(dpi: Option<u32>) -> Self {
        Self { dpi }
    }
}

impl Exporter for DotExporter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Dot
    }

    fn export(&self, diagram: &Diagram) -> Result<Vec<u8>, Error> {
        Ok(to_dot(diagram, self.dpi).into_bytes())
    }
}

/// Spawning `dot` fails with `NotFound` only when the executable is absent.
fn classify_spawn_error(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::MissingBackend(err)
    } else {
        Error::Render(format!("cannot start Graphviz `{DOT_EXECUTABLE}`: {err}"))
    }
}

/// `dot -V` prints its version to stderr and exits with success.
fn check_version_status(status: ExitStatus, stderr: &[u8]) -> Result<(), Error> {
    let message = String::from_utf8_lossy(stderr);
    if status.success() {
        debug!(version = message.trim(); "Graphviz backend available");
        Ok(())
    } else {
        Err(Error::Render(format!(
            "`{DOT_EXECUTABLE} -V` failed with {status}: {}",
            message.trim()
        )))
    }
}

/// `exec_dot` reports a non-zero `dot` exit as `ErrorKind::Other` carrying
/// Graphviz's stderr; every other kind comes from temp files or pipes.
fn classify_export_error(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::Other {
        Error::Render(err.to_string())
    } else {
        Error::Io(err)
    }
}

/// Prints `diagram` as DOT text.
pub fn to_dot(diagram: &Diagram, dpi: Option<u32>) -> String {
    let dot = to_graph(diagram, dpi).print(&mut PrinterContext::default());
    trace!(diagram = diagram.name(), dot = dot.as_str(); "DOT source");
    dot
}

/// Converts `diagram` into a Graphviz digraph.
///
/// Exporter defaults are applied first and the diagram's own graph, node and
/// edge attributes override them key by key.
pub fn to_graph(diagram: &Diagram, dpi: Option<u32>) -> Graph {
    let mut builder = GraphBuilder::default();
    let mut stmts = vec![
        Stmt::GAttribute(GraphAttributes::Graph(attributes(&graph_defaults(diagram, dpi)))),
        Stmt::GAttribute(GraphAttributes::Node(attributes(&merged(
            node_defaults(),
            diagram.node_attributes(),
        )))),
        Stmt::GAttribute(GraphAttributes::Edge(attributes(&merged(
            edge_defaults(),
            diagram.edge_attributes(),
        )))),
    ];

    builder.push_scope(diagram.root(), 0, &mut stmts);
    stmts.extend(diagram.edges().iter().map(edge_stmt));

    debug!(
        diagram = diagram.name(),
        direction:% = diagram.direction(),
        clusters = builder.clusters,
        statements = stmts.len();
        "Graphviz graph built"
    );

    Graph::DiGraph {
        id: DotId::Plain(graph_id(diagram.name())),
        strict: false,
        stmts,
    }
}

#[derive(Default)]
struct GraphBuilder {
    clusters: usize,
}

impl GraphBuilder {
    fn push_scope(&mut self, scope: &Scope, depth: usize, stmts: &mut Vec<Stmt>) {
        stmts.extend(scope.nodes().iter().map(node_stmt));

        for cluster in scope.clusters() {
            let id = format!("cluster_{}", self.clusters);
            self.clusters += 1;

            let background = CLUSTER_BACKGROUNDS[depth % CLUSTER_BACKGROUNDS.len()];
            let mut cluster_stmts: Vec<Stmt> = [
                ("label", cluster.label().unwrap_or_default()),
                ("style", "rounded"),
                ("labeljust", "l"),
                ("pencolor", CLUSTER_PEN_COLOR),
                ("bgcolor", background),
                ("fontname", FONT_NAME),
                ("fontsize", "12"),
            ]
            .into_iter()
            .map(|(key, value)| Stmt::Attribute(attribute(key, value)))
            .collect();

            self.push_scope(cluster, depth + 1, &mut cluster_stmts);

            stmts.push(Stmt::Subgraph(Subgraph {
                id: DotId::Plain(id),
                stmts: cluster_stmts,
            }));
        }
    }
}

fn node_stmt(node: &Node) -> Stmt {
    let category = node.kind().category();
    let tooltip = node.kind().to_string();
    Stmt::Node(DotNode {
        id: node_id(&node.id().as_string()),
        attributes: vec![
            attribute("label", node.label()),
            attribute("shape", category.shape()),
            attribute("fillcolor", category.fill_color()),
            attribute("fontcolor", category.font_color()),
            attribute("tooltip", &tooltip),
        ],
    })
}

fn edge_stmt(edge: &Edge) -> Stmt {
    let connector = edge.connector();
    let mut attrs = Vec::new();
    if let Some(label) = connector.label() {
        attrs.push(attribute("label", label));
    }
    if let Some(style) = connector.style().to_dot_value() {
        attrs.push(attribute("style", style));
    }
    if let Some(color) = connector.color() {
        attrs.push(attribute("color", &color.to_hex()));
    }

    Stmt::Edge(DotEdge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id(&edge.source().as_string())),
            Vertex::N(node_id(&edge.target().as_string())),
        ),
        attributes: attrs,
    })
}

fn graph_defaults(diagram: &Diagram, dpi: Option<u32>) -> Attributes {
    let mut defaults: Attributes = [
        ("label", diagram.title()),
        ("labelloc", "t"),
        ("rankdir", diagram.direction().to_dot_value()),
        ("pad", "2.0"),
        ("splines", "ortho"),
        ("nodesep", "0.60"),
        ("ranksep", "0.75"),
        ("fontname", FONT_NAME),
        ("fontsize", "15"),
        ("fontcolor", FONT_COLOR),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    if let Some(dpi) = dpi {
        defaults.insert("dpi".to_string(), dpi.to_string());
    }

    merged(defaults, diagram.graph_attributes())
}

fn node_defaults() -> Attributes {
    [
        ("shape", "box"),
        ("style", "rounded,filled"),
        ("margin", "0.2,0.1"),
        ("fontname", FONT_NAME),
        ("fontsize", "13"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

fn edge_defaults() -> Attributes {
    [
        ("color", EDGE_COLOR),
        ("dir", "forward"),
        ("fontname", FONT_NAME),
        ("fontsize", "13"),
        ("fontcolor", FONT_COLOR),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

fn merged(mut base: Attributes, overrides: &Attributes) -> Attributes {
    for (key, value) in overrides {
        base.insert(key.clone(), value.clone());
    }
    base
}

fn attributes(attrs: &Attributes) -> Vec<Attribute> {
    attrs
        .iter()
        .map(|(key, value)| attribute(key, value))
        .collect()
}

fn attribute(key: &str, value: &str) -> Attribute {
    Attribute(DotId::Plain(key.to_string()), quoted(value))
}

fn node_id(name: &str) -> NodeId {
    NodeId(quoted(name), None)
}

/// Keeps ASCII alphanumerics and underscores so the name is a bare DOT id.
fn graph_id(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        format!("g_{id}")
    } else {
        id
    }
}

fn quoted(value: &str) -> DotId {
    DotId::Escaped(format!("\"{}\"", escape(value)))
}

/// Escapes a value for a double-quoted DOT string; newlines become `\n`
/// line breaks.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            c => escaped.push(c),
        }
    }
    escaped
}
