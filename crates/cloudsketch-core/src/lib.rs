//! Cloudsketch Core Types and Definitions
//!
//! This crate provides the declarative vocabulary used to describe cloud
//! architecture diagrams. It includes:
//!
//! - **Identifiers**: Interned node identifiers ([`identifier::Id`])
//! - **Colors**: CSS color parsing rendered for Graphviz ([`color::Color`])
//! - **Styles**: Edge line styles and flow direction ([`style`] module)
//! - **Taxonomy**: The fixed set of node kinds ([`kind`] module)
//! - **Diagram**: Nodes, clusters, edges and validation ([`diagram`] module)

pub mod color;
pub mod diagram;
pub mod identifier;
pub mod kind;
pub mod style;

mod error;

pub use error::DiagramError;
