use crate::OutputKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_START_MARKER: &str = "<!-- #start:entmaid -->";
pub const DEFAULT_END_MARKER: &str = "<!-- #end:entmaid -->";

/// Settings for [`crate::generate_diagram`].
///
/// Deserializes from a partial JSON object; absent keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    pub output: OutputKind,
    pub start_marker: String,
    pub end_marker: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: OutputKind::Markdown,
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl GenerateOptions {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn with_output(mut self, output: OutputKind) -> Self {
        self.output = output;
        self
    }

    pub fn with_markers(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_marker = start.into();
        self.end_marker = end.into();
        self
    }
}
