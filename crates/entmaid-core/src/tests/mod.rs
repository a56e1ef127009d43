mod output;
mod splice;

use crate::*;

/// Two entities joined by a many-to-many pair plus a one-to-many edge with its inverse.
fn library_graph() -> SchemaGraph {
    let through = JoinTable::new("book_authors", ["book_id", "author_id"]);
    SchemaGraph::new(vec![
        Node::new("Author")
            .with_id(Field::new("id", "int"))
            .with_field(Field::new("name", "string"))
            .with_edge(
                Edge::new("books", Cardinality::ManyToMany, "Book")
                    .as_inverse()
                    .with_ref("authors")
                    .with_join_table(through.clone()),
            ),
        Node::new("Book")
            .with_id(Field::new("id", "int"))
            .with_field(Field::new("title", "string"))
            .with_foreign_key(ForeignKey::generated(Field::new("shelf_books", "int")))
            .with_edge(
                Edge::new("authors", Cardinality::ManyToMany, "Author")
                    .with_ref("books")
                    .with_join_table(through),
            )
            .with_edge(
                Edge::new("shelf", Cardinality::ManyToOne, "Shelf")
                    .as_inverse()
                    .with_ref("books"),
            ),
        Node::new("Shelf")
            .with_id(Field::new("id", "int"))
            .with_edge(Edge::new("books", Cardinality::OneToMany, "Book").with_ref("shelf")),
    ])
}
