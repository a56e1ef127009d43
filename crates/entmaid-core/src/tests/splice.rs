use super::library_graph;
use crate::*;

#[test]
fn splice_markers_keeps_one_char_after_start_marker() {
    let out = splice_markers("A<<<START>>>Z<<<END>>>B", "X", "<<<START>>>", "<<<END>>>").unwrap();
    assert_eq!(out, "A<<<START>>>ZX\n<<<END>>>B");
}

#[test]
fn splice_markers_replaces_region_between_marker_lines() {
    let doc = "# Title\n<!-- s -->\nold\nlines\n<!-- e -->\ntail\n";
    let out = splice_markers(doc, "new", "<!-- s -->", "<!-- e -->").unwrap();
    assert_eq!(out, "# Title\n<!-- s -->\nnew\n<!-- e -->\ntail\n");
}

#[test]
fn splice_markers_uses_first_occurrences() {
    let doc = "[s]\n1\n[e]\n[s]\n2\n[e]";
    let out = splice_markers(doc, "x", "[s]", "[e]").unwrap();
    assert_eq!(out, "[s]\nx\n[e]\n[s]\n2\n[e]");
}

#[test]
fn splice_markers_does_not_split_multibyte_char() {
    let out = splice_markers("<s>é<e>", "x", "<s>", "<e>").unwrap();
    assert_eq!(out, "<s>éx\n<e>");
}

#[test]
fn splice_markers_start_marker_at_end_of_text() {
    let out = splice_markers("<e><s>", "x", "<s>", "<e>").unwrap();
    assert_eq!(out, "<e><s>x\n<e><s>");
}

#[test]
fn splice_markers_reports_every_missing_marker() {
    let err = splice_markers("nothing here", "x", "<s>", "<e>").unwrap_err();
    assert_eq!(err, MissingMarkers(vec!["<s>".to_string(), "<e>".to_string()]));

    let err = splice_markers("<s>\n", "x", "<s>", "<e>").unwrap_err();
    assert_eq!(err, MissingMarkers(vec!["<e>".to_string()]));
}

#[test]
fn splice_file_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("README.md");
    std::fs::write(&path, "intro\n<!-- s -->\nstale\n<!-- e -->\n").unwrap();

    splice_file(&path, "fresh", "<!-- s -->", "<!-- e -->").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "intro\n<!-- s -->\nfresh\n<!-- e -->\n"
    );
}

#[test]
fn splice_file_missing_marker_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("README.md");
    let original = "intro\n<!-- s -->\nstale\n";
    std::fs::write(&path, original).unwrap();

    let err = splice_file(&path, "fresh", "<!-- s -->", "<!-- e -->").unwrap_err();
    match &err {
        Error::MarkerNotFound { path: p, missing } => {
            assert_eq!(p, &path);
            assert_eq!(missing, &vec!["<!-- e -->".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("<!-- e -->"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn splice_file_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = splice_file(dir.path().join("absent.md"), "x", "<s>", "<e>").unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn generate_diagram_splices_fenced_diagram() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("README.md");
    std::fs::write(
        &path,
        "# Library\n<!-- #start:entmaid -->\n<!-- #end:entmaid -->\n",
    )
    .unwrap();

    generate_diagram(&library_graph(), &path, &GenerateOptions::default()).unwrap();

    let doc = std::fs::read_to_string(&path).unwrap();
    let diagram = render_er_diagram(&library_graph()).unwrap();
    assert_eq!(
        doc,
        format!("# Library\n<!-- #start:entmaid -->\n```mermaid\n{diagram}\n```\n<!-- #end:entmaid -->\n")
    );
}
