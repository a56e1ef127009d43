use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load schema graph from the path {}: {message}", .path.display())]
    SchemaLoad { path: PathBuf, message: String },

    /// Appending to the in-memory diagram buffer failed.
    #[error("failed to write diagram text: {0}")]
    Emit(#[from] std::fmt::Error),

    #[error("many-to-many edge {entity}.{edge} has no join table")]
    MissingJoinTable { entity: String, edge: String },

    #[error(
        "marker(s) {} not found in the file {}",
        .missing.join(", "),
        .path.display()
    )]
    MarkerNotFound { path: PathBuf, missing: Vec<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
