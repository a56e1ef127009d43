use crate::*;

#[test]
fn output_kind_markdown_fences_diagram() {
    let text = OutputKind::Markdown.wrap("erDiagram\n");
    assert_eq!(text, "```mermaid\nerDiagram\n\n```");
}

#[test]
fn output_kind_plain_is_unchanged() {
    assert_eq!(OutputKind::Plain.wrap("erDiagram\n A {\n }\n\n"), "erDiagram\n A {\n }\n\n");
}

#[test]
fn output_kind_parse_is_permissive() {
    assert_eq!("markdown".parse::<OutputKind>(), Ok(OutputKind::Markdown));
    assert_eq!(" MD ".parse::<OutputKind>(), Ok(OutputKind::Markdown));
    assert_eq!("plain".parse::<OutputKind>(), Ok(OutputKind::Plain));
    assert_eq!("asciidoc".parse::<OutputKind>(), Ok(OutputKind::Plain));
    assert_eq!("".parse::<OutputKind>(), Ok(OutputKind::Plain));
}
