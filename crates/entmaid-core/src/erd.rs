//! Mermaid `erDiagram` emission for a [`SchemaGraph`].
//!
//! Output order follows the graph's node and edge order; nothing is sorted here.

use crate::graph::{Edge, Field, JoinTable, Node, SchemaGraph};
use crate::{Error, Result};
use std::fmt::Write;

/// Renders `graph` as Mermaid `erDiagram` text.
///
/// Entity blocks (each followed by the join tables its forward many-to-many edges own) come
/// first, then one relationship line per rendered edge.
pub fn render_er_diagram(graph: &SchemaGraph) -> Result<String> {
    let mut out = String::new();
    out.push_str("erDiagram\n");

    for node in &graph.nodes {
        write_entity(&mut out, node)?;

        // Both legs of a many-to-many pair carry the same join table; only the forward leg
        // emits it.
        for edge in node.edges.iter().filter(|e| e.is_many_to_many() && !e.inverse) {
            write_join_table(&mut out, join_table(node, edge)?)?;
        }
    }

    for node in &graph.nodes {
        for edge in &node.edges {
            write_relationship(&mut out, node, edge)?;
        }
    }

    tracing::debug!(
        entities = graph.nodes.len(),
        bytes = out.len(),
        "rendered ER diagram"
    );
    Ok(out)
}

fn write_entity(out: &mut String, node: &Node) -> Result<()> {
    writeln!(out, " {} {{", node.name)?;

    if let Some(id) = &node.id {
        write_attribute(out, id, Some("PK"))?;
    }

    for field in &node.fields {
        write_attribute(out, field, None)?;
    }

    // User-defined foreign keys are not rendered yet; only the generated ones are.
    for fk in node.foreign_keys.iter().filter(|fk| !fk.user_defined) {
        write_attribute(out, &fk.field, Some("FK"))?;
    }

    out.push_str(" }\n\n");
    Ok(())
}

fn write_attribute(out: &mut String, field: &Field, key: Option<&str>) -> Result<()> {
    write!(out, "  {} {}", field.ty.diagram_token(), field.name)?;
    if let Some(key) = key {
        write!(out, " {key}")?;
    }
    out.push('\n');
    Ok(())
}

fn write_join_table(out: &mut String, join_table: &JoinTable) -> Result<()> {
    writeln!(out, " {} {{", join_table.table)?;
    for column in &join_table.columns {
        writeln!(out, "  int {column} PK,FK")?;
    }
    out.push_str(" }\n\n");
    Ok(())
}

fn write_relationship(out: &mut String, node: &Node, edge: &Edge) -> Result<()> {
    // Many-to-many edges point at their join table from both sides, inverse or not.
    if edge.is_many_to_many() {
        let table = &join_table(node, edge)?.table;
        writeln!(
            out,
            " {} |o--o{{ {} : {}{}",
            node.name,
            table,
            edge.name,
            ref_suffix(edge)
        )?;
        return Ok(());
    }

    if edge.inverse {
        return Ok(());
    }

    writeln!(
        out,
        " {} {} {} : {}{}",
        node.name,
        edge.cardinality.relationship_symbol(),
        edge.target,
        edge.name,
        ref_suffix(edge)
    )?;
    Ok(())
}

fn join_table<'a>(node: &Node, edge: &'a Edge) -> Result<&'a JoinTable> {
    edge.through.as_ref().ok_or_else(|| Error::MissingJoinTable {
        entity: node.name.clone(),
        edge: edge.name.clone(),
    })
}

fn ref_suffix(edge: &Edge) -> String {
    match &edge.ref_name {
        Some(name) => format!("-{name}"),
        None => String::new(),
    }
}
