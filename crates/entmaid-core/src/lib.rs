#![forbid(unsafe_code)]

//! Mermaid ER diagrams for ent-style schema graphs.
//!
//! The pipeline has two halves:
//! - [`render_er_diagram`] projects a [`SchemaGraph`] to `erDiagram` text (pure)
//! - [`splice_file`] writes that text between two marker comments of an existing document
//!
//! [`generate_diagram`] runs both with an [`OutputKind`] wrapper in between.

pub mod config;
pub mod erd;
pub mod error;
pub mod graph;
pub mod output;
pub mod splice;

pub use config::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, GenerateOptions};
pub use erd::render_er_diagram;
pub use error::{Error, Result};
pub use graph::{Cardinality, Edge, Field, FieldType, ForeignKey, JoinTable, Node, SchemaGraph};
pub use output::OutputKind;
pub use splice::{MissingMarkers, splice_file, splice_markers};

use std::path::Path;

/// Renders `graph` and splices the wrapped diagram into the document at `target`.
pub fn generate_diagram(
    graph: &SchemaGraph,
    target: impl AsRef<Path>,
    options: &GenerateOptions,
) -> Result<()> {
    let target = target.as_ref();
    let diagram = render_er_diagram(graph)?;
    let text = options.output.wrap(&diagram);

    splice_file(target, &text, &options.start_marker, &options.end_marker)?;
    tracing::info!(
        target = %target.display(),
        output = %options.output,
        entities = graph.nodes.len(),
        "Mermaid diagram written"
    );
    Ok(())
}

#[cfg(test)]
mod tests;
