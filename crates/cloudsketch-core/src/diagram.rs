//! Diagram description model.
//!
//! A [`Diagram`] is a write-once description handed to an exporter: a tree of
//! [`Scope`]s (the unnamed root plus nested, labelled clusters) holding
//! [`Node`]s, and a flat list of [`Edge`]s between node identifiers.
//!
//! # Example
//!
//! ```
//! use cloudsketch_core::{
//!     diagram::{Connector, Diagram},
//!     kind::NodeKind,
//!     style::{Direction, LineStyle},
//! };
//!
//! let mut diagram = Diagram::new("example", "Example").with_direction(Direction::LeftRight);
//! let users = diagram.node("users", NodeKind::Users, "End Users");
//! let site = diagram.cluster("Frontend Hosting", |scope| {
//!     scope.node("site", NodeKind::S3, "S3 Static Website")
//! });
//! diagram.connect(users, site, Connector::labeled("HTTPS").with_style(LineStyle::Bold));
//!
//! assert!(diagram.validate().is_ok());
//! assert_eq!(diagram.node_count(), 2);
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use crate::{
    color::Color,
    error::DiagramError,
    identifier::Id,
    kind::NodeKind,
    style::{Direction, LineStyle},
};

/// Ordered set of raw Graphviz attributes.
pub type Attributes = IndexMap<String, String>;

/// A labelled node drawn with the icon of its [`NodeKind`].
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    kind: NodeKind,
    label: String,
}

impl Node {
    /// Identifier used by edges to reference this node.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Service the node depicts; selects its shape and colors.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Text drawn on the node. May contain `\n` line breaks.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A grouping of nodes and nested clusters.
///
/// The root scope of a diagram has no label; every cluster below it does.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    label: Option<String>,
    nodes: Vec<Node>,
    clusters: Vec<Scope>,
}

impl Scope {
    fn labeled(label: String) -> Self {
        Self {
            label: Some(label),
            ..Self::default()
        }
    }

    /// Declares a node in this scope and returns its identifier.
    pub fn node(&mut self, id: impl Into<Id>, kind: NodeKind, label: impl Into<String>) -> Id {
        let id = id.into();
        self.nodes.push(Node {
            id,
            kind,
            label: label.into(),
        });
        id
    }

    /// Declares a nested cluster populated by `build`.
    ///
    /// Whatever `build` returns is handed back to the caller, which is how
    /// the identifiers of nodes declared inside a cluster escape it.
    pub fn cluster<R>(
        &mut self,
        label: impl Into<String>,
        build: impl FnOnce(&mut Scope) -> R,
    ) -> R {
        let mut cluster = Scope::labeled(label.into());
        let result = build(&mut cluster);
        self.clusters.push(cluster);
        result
    }

    /// Cluster caption; `None` for the root scope.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Nodes declared directly in this scope.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Clusters nested directly in this scope.
    pub fn clusters(&self) -> &[Scope] {
        &self.clusters
    }

    fn collect_nodes<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.extend(self.nodes.iter());
        for cluster in &self.clusters {
            cluster.collect_nodes(out);
        }
    }
}

/// Appearance of an edge: optional label, line style and color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connector {
    label: Option<String>,
    style: LineStyle,
    color: Option<Color>,
}

impl Connector {
    /// An unlabelled, solid, default-colored connector.
    pub fn new() -> Self {
        Self::default()
    }

    /// A solid connector carrying `label`.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new().with_label(label)
    }

    /// Sets the text drawn along the edge.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the line pattern.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Overrides the exporter's default edge color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Text drawn along the edge, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Line pattern of the edge.
    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// Explicit edge color, or `None` for the exporter default.
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// A directed edge between two declared nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    from: Id,
    to: Id,
    connector: Connector,
}

impl Edge {
    /// Node the edge starts from.
    pub fn source(&self) -> Id {
        self.from
    }

    /// Node the edge points to.
    pub fn target(&self) -> Id {
        self.to
    }

    /// Label, style and color of the edge.
    pub fn connector(&self) -> &Connector {
        &self.connector
    }
}

/// A complete diagram description.
#[derive(Debug, Clone)]
pub struct Diagram {
    name: String,
    title: String,
    direction: Direction,
    graph_attributes: Attributes,
    node_attributes: Attributes,
    edge_attributes: Attributes,
    root: Scope,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram.
    ///
    /// # Arguments
    ///
    /// * `name` - File stem of the rendered output, e.g. `deployment_flow`
    /// * `title` - Caption drawn above the diagram
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            direction: Direction::default(),
            graph_attributes: Attributes::new(),
            node_attributes: Attributes::new(),
            edge_attributes: Attributes::new(),
            root: Scope::default(),
            edges: Vec::new(),
        }
    }

    /// Sets the rank direction; top to bottom by default.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Adds a graph-level Graphviz attribute, overriding exporter defaults.
    pub fn with_graph_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.graph_attributes.insert(key.into(), value.into());
        self
    }

    /// Adds a Graphviz attribute applied to every node.
    pub fn with_node_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.node_attributes.insert(key.into(), value.into());
        self
    }

    /// Adds a Graphviz attribute applied to every edge.
    pub fn with_edge_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.edge_attributes.insert(key.into(), value.into());
        self
    }

    /// Declares a node outside of any cluster.
    pub fn node(&mut self, id: impl Into<Id>, kind: NodeKind, label: impl Into<String>) -> Id {
        self.root.node(id, kind, label)
    }

    /// Declares a top-level cluster. See [`Scope::cluster`].
    pub fn cluster<R>(
        &mut self,
        label: impl Into<String>,
        build: impl FnOnce(&mut Scope) -> R,
    ) -> R {
        self.root.cluster(label, build)
    }

    /// Declares an edge from `from` to `to`.
    pub fn connect(&mut self, from: Id, to: Id, connector: Connector) -> &mut Self {
        self.edges.push(Edge {
            from,
            to,
            connector,
        });
        self
    }

    /// Declares unlabelled edges between each consecutive pair of `ids`.
    pub fn chain(&mut self, ids: &[Id]) -> &mut Self {
        for pair in ids.windows(2) {
            self.connect(pair[0], pair[1], Connector::new());
        }
        self
    }

    /// Checks that node identifiers are unique and that every edge
    /// references a declared node.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DuplicateNode`] or [`DiagramError::UnknownNode`].
    pub fn validate(&self) -> Result<(), DiagramError> {
        let mut declared = HashSet::new();
        for node in self.nodes() {
            if !declared.insert(node.id()) {
                return Err(DiagramError::DuplicateNode {
                    diagram: self.name.clone(),
                    id: node.id(),
                });
            }
        }

        for edge in &self.edges {
            for id in [edge.from, edge.to] {
                if !declared.contains(&id) {
                    return Err(DiagramError::UnknownNode {
                        diagram: self.name.clone(),
                        id,
                    });
                }
            }
        }

        debug!(
            diagram = self.name,
            nodes = declared.len(),
            edges = self.edges.len();
            "Diagram validated"
        );
        Ok(())
    }

    /// File stem of the rendered output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Caption drawn above the diagram.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rank direction of the layout.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Graph-level attribute overrides, in insertion order.
    pub fn graph_attributes(&self) -> &Attributes {
        &self.graph_attributes
    }

    /// Attributes applied to every node.
    pub fn node_attributes(&self) -> &Attributes {
        &self.node_attributes
    }

    /// Attributes applied to every edge.
    pub fn edge_attributes(&self) -> &Attributes {
        &self.edge_attributes
    }

    /// The unnamed top-level scope.
    pub fn root(&self) -> &Scope {
        &self.root
    }

    /// Edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All nodes, depth-first in declaration order.
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes = Vec::new();
        self.root.collect_nodes(&mut nodes);
        nodes
    }

    /// Number of nodes across all scopes.
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Looks up a node by identifier.
    pub fn find_node(&self, id: Id) -> Option<&Node> {
        self.nodes().into_iter().find(|node| node.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagram {
        let mut diagram = Diagram::new("sample", "Sample");
        let repo = diagram.node("repo", NodeKind::Github, "Repo");
        let (build, deploy) = diagram.cluster("Pipeline", |pipeline| {
            pipeline.cluster("Phases", |phases| {
                (
                    phases.node("build", NodeKind::GithubActions, "Build"),
                    phases.node("deploy", NodeKind::GithubActions, "Deploy"),
                )
            })
        });
        diagram.chain(&[repo, build, deploy]);
        diagram
    }

    #[test]
    fn test_nested_clusters_are_recorded() {
        let diagram = sample();
        let root = diagram.root();

        assert_eq!(root.label(), None);
        assert_eq!(root.nodes().len(), 1);
        assert_eq!(root.clusters().len(), 1);

        let pipeline = &root.clusters()[0];
        assert_eq!(pipeline.label(), Some("Pipeline"));
        assert!(pipeline.nodes().is_empty());
        assert_eq!(pipeline.clusters()[0].label(), Some("Phases"));
        assert_eq!(pipeline.clusters()[0].nodes().len(), 2);
    }

    #[test]
    fn test_nodes_are_depth_first_in_declaration_order() {
        let diagram = sample();
        let ids: Vec<String> = diagram.nodes().iter().map(|n| n.id().as_string()).collect();
        assert_eq!(ids, ["repo", "build", "deploy"]);
    }

    #[test]
    fn test_chain_connects_consecutive_pairs() {
        let diagram = sample();
        let edges = diagram.edges();

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source(), "repo");
        assert_eq!(edges[0].target(), "build");
        assert_eq!(edges[1].source(), "build");
        assert_eq!(edges[1].target(), "deploy");
        assert_eq!(edges[1].connector(), &Connector::new());
    }

    #[test]
    fn test_chain_with_single_node_adds_nothing() {
        let mut diagram = Diagram::new("single", "Single");
        let only = diagram.node("only_node", NodeKind::Users, "Only");
        diagram.chain(&[only]);
        assert!(diagram.edges().is_empty());
    }

    #[test]
    fn test_validate_accepts_well_formed_diagram() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate_node() {
        let mut diagram = sample();
        diagram.cluster("Other", |scope| {
            scope.node("repo", NodeKind::Github, "Repo again");
        });

        assert_eq!(
            diagram.validate(),
            Err(DiagramError::DuplicateNode {
                diagram: "sample".to_string(),
                id: Id::new("repo"),
            })
        );
    }

    #[test]
    fn test_validate_rejects_edge_to_undeclared_node() {
        let mut diagram = sample();
        let repo = Id::new("repo");
        diagram.connect(repo, Id::new("nowhere"), Connector::labeled("lost"));

        let err = diagram.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "edge in diagram `sample` references undeclared node `nowhere`"
        );
    }

    #[test]
    fn test_connector_builder() {
        let color = Color::new("purple").unwrap();
        let connector = Connector::labeled("Provisions")
            .with_style(LineStyle::Dashed)
            .with_color(color);

        assert_eq!(connector.label(), Some("Provisions"));
        assert_eq!(connector.style(), LineStyle::Dashed);
        assert_eq!(connector.color(), Some(color));
    }

    #[test]
    fn test_attributes_keep_insertion_order_and_override() {
        let diagram = Diagram::new("attrs", "Attrs")
            .with_graph_attr("splines", "ortho")
            .with_graph_attr("fontsize", "20")
            .with_graph_attr("splines", "curved");

        let keys: Vec<_> = diagram.graph_attributes().keys().cloned().collect();
        assert_eq!(keys, ["splines", "fontsize"]);
        assert_eq!(diagram.graph_attributes()["splines"], "curved");
    }

    proptest::proptest! {
        #[test]
        fn prop_chain_yields_valid_linear_diagram(len in 1usize..24) {
            let mut diagram = Diagram::new("chain", "Chain");
            let ids: Vec<Id> = (0..len)
                .map(|i| {
                    let id = format!("step_{i}");
                    diagram.node(id.as_str(), NodeKind::GithubActions, format!("{i}"))
                })
                .collect();
            diagram.chain(&ids);

            proptest::prop_assert_eq!(diagram.edges().len(), len - 1);
            proptest::prop_assert!(diagram.validate().is_ok());
        }
    }

    #[test]
    fn test_find_node() {
        let diagram = sample();
        let node = diagram.find_node(Id::new("deploy")).unwrap();
        assert_eq!(node.label(), "Deploy");
        assert_eq!(node.kind(), NodeKind::GithubActions);
        assert!(diagram.find_node(Id::new("absent")).is_none());
    }
}
