//! Read-only schema graph consumed by the diagram builder.
//!
//! The graph is produced by an external schema-introspection step; here it is modelled as plain
//! data so it can be built in code or deserialized from a JSON snapshot of that step's output.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl SchemaGraph {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Loads a JSON graph snapshot from `path`.
    ///
    /// Read and decode failures are both reported as [`Error::SchemaLoad`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let schema_load = |message: String| Error::SchemaLoad {
            path: path.to_path_buf(),
            message,
        };

        let text = std::fs::read_to_string(path).map_err(|e| schema_load(e.to_string()))?;
        let graph = Self::from_json_str(&text).map_err(|e| schema_load(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            nodes = graph.nodes.len(),
            "loaded schema graph"
        );
        Ok(graph)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// Single-field identifier. `None` for composite or missing identifiers.
    #[serde(default)]
    pub id: Option<Field>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(rename = "foreignKeys")]
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            fields: Vec::new(),
            foreign_keys: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: Field) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// The semantic type of a field, keyed by its textual spelling in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Time,
    JsonMap,
    Other(String),
}

impl FieldType {
    /// Type token used inside an erDiagram attribute line.
    ///
    /// `.` is not valid inside the token, so qualified names are flattened with `-`.
    pub fn diagram_token(&self) -> Cow<'_, str> {
        match self {
            Self::Time => Cow::Borrowed("timestamp"),
            Self::JsonMap => Cow::Borrowed("jsonb"),
            Self::Other(name) if name.contains('.') => Cow::Owned(name.replace('.', "-")),
            Self::Other(name) => Cow::Borrowed(name),
        }
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        match value {
            "time.Time" => Self::Time,
            "map[string]interface {}" | "map[string]interface{}" | "map[string]any" => {
                Self::JsonMap
            }
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Other(name) => name,
            known => known.to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => f.write_str("time.Time"),
            Self::JsonMap => f.write_str("map[string]interface {}"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub field: Field,
    /// Declared by the schema author rather than generated from an edge.
    #[serde(rename = "userDefined")]
    #[serde(default)]
    pub user_defined: bool,
}

impl ForeignKey {
    pub fn generated(field: Field) -> Self {
        Self {
            field,
            user_defined: false,
        }
    }

    pub fn user_defined(field: Field) -> Self {
        Self {
            field,
            user_defined: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cardinality {
    #[serde(alias = "O2O")]
    OneToOne,
    #[serde(alias = "O2M")]
    OneToMany,
    #[serde(alias = "M2O")]
    ManyToOne,
    #[serde(alias = "M2M")]
    ManyToMany,
}

impl Cardinality {
    /// Crow's-foot connector drawn between two entities.
    pub fn relationship_symbol(self) -> &'static str {
        match self {
            Self::OneToMany => "|o--o{",
            Self::ManyToOne => "}o--o|",
            Self::ManyToMany => "}o--o{",
            Self::OneToOne => "|o--o|",
        }
    }
}

/// Implicit association table backing a many-to-many edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinTable {
    pub table: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl JoinTable {
    pub fn new<I, S>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub name: String,
    pub cardinality: Cardinality,
    /// Name of the node this edge points at.
    pub target: String,
    #[serde(default)]
    pub inverse: bool,
    /// Name of the counterpart edge declared on the other side of the relationship.
    #[serde(rename = "ref")]
    #[serde(default)]
    pub ref_name: Option<String>,
    #[serde(default)]
    pub through: Option<JoinTable>,
}

impl Edge {
    pub fn new(
        name: impl Into<String>,
        cardinality: Cardinality,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cardinality,
            target: target.into(),
            inverse: false,
            ref_name: None,
            through: None,
        }
    }

    pub fn as_inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    pub fn with_ref(mut self, ref_name: impl Into<String>) -> Self {
        self.ref_name = Some(ref_name.into());
        self
    }

    pub fn with_join_table(mut self, join_table: JoinTable) -> Self {
        self.through = Some(join_table);
        self
    }

    pub fn is_many_to_many(&self) -> bool {
        self.cardinality == Cardinality::ManyToMany
    }
}
