//! Replaces the region between two literal markers in a text document.
//!
//! The document is treated as opaque text. The first occurrence of each marker is used, and the
//! single character right after the start marker (normally its line break) is kept.

use crate::{Error, Result};
use std::path::Path;

/// Markers that could not be located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMarkers(pub Vec<String>);

/// Splices `insert` into `content` and returns the new text.
///
/// The result is `content[..after_start] + insert + "\n" + content[end..]`, where `after_start`
/// is one character past the end of the start marker and `end` is the start of the end marker.
/// Marker order is not checked.
pub fn splice_markers(
    content: &str,
    insert: &str,
    start_marker: &str,
    end_marker: &str,
) -> std::result::Result<String, MissingMarkers> {
    let start = content.find(start_marker);
    let end = content.find(end_marker);

    let (Some(start), Some(end)) = (start, end) else {
        let mut missing = Vec::new();
        if start.is_none() {
            missing.push(start_marker.to_string());
        }
        if end.is_none() {
            missing.push(end_marker.to_string());
        }
        return Err(MissingMarkers(missing));
    };

    let marker_end = start + start_marker.len();
    let keep = content[marker_end..]
        .chars()
        .next()
        .map_or(marker_end, |c| marker_end + c.len_utf8());

    let mut out = String::with_capacity(keep + insert.len() + 1 + (content.len() - end));
    out.push_str(&content[..keep]);
    out.push_str(insert);
    out.push('\n');
    out.push_str(&content[end..]);
    Ok(out)
}

/// Rewrites the file at `path` with `insert` spliced between the markers.
///
/// The whole file is read, spliced in memory, then written back in place. Nothing is written when
/// a marker is missing.
pub fn splice_file(
    path: impl AsRef<Path>,
    insert: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<()> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let updated = splice_markers(&content, insert, start_marker, end_marker).map_err(
        |MissingMarkers(missing)| Error::MarkerNotFound {
            path: path.to_path_buf(),
            missing,
        },
    )?;

    std::fs::write(path, updated)?;
    tracing::debug!(path = %path.display(), inserted = insert.len(), "spliced document");
    Ok(())
}
