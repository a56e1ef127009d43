use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How diagram text is wrapped before it is written into a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Fenced ```` ```mermaid ```` code block.
    #[default]
    Markdown,
    /// Bare diagram text.
    Plain,
}

impl OutputKind {
    pub fn wrap(self, diagram: &str) -> String {
        match self {
            Self::Markdown => format!("```mermaid\n{diagram}\n```"),
            Self::Plain => diagram.to_string(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Plain => "plain",
        }
    }
}

/// Unknown kinds fall back to [`OutputKind::Plain`].
impl FromStr for OutputKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Self::Markdown,
            _ => Self::Plain,
        })
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
