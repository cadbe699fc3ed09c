pub(crate) mod entity;
pub(crate) mod graph;
pub(crate) mod select;

pub mod prelude {
    pub use super::entity::EntityTrait;
    pub use super::graph::RelationshipGraph;
    pub use super::select::EntitySelectExt;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::Entity;
    use crate::Error;
    use crate::Mapper;
    use crate::Registry;
    use crate::Relationship;

    struct Author;

    #[derive(Entity)]
    #[allow(dead_code)]
    struct Shelf {
        id:      i64,
        #[eagerload(relationship, target = "Author")]
        volumes: Vec<i64>,
        #[eagerload(relationship)]
        curator: Option<Box<Shelf>>,
    }

    impl EntityTrait for Author {
        fn entity_name() -> &'static str {
            "Author"
        }

        fn table_name() -> &'static str {
            "authors"
        }

        fn relationships() -> Vec<Relationship> {
            vec![Relationship::collection("books", "Book"), Relationship::scalar("agent", "Agent")]
        }
    }

    #[test]
    fn test_mapper_from_entity() {
        let mapper = Mapper::from_entity::<Author>();
        assert_eq!(mapper.entity(), "Author");
        assert_eq!(mapper.relationship_names(), vec!["agent", "books"]);
    }

    #[test]
    fn test_mapper_is_a_single_entity_graph() {
        let mapper = Mapper::from_entity::<Author>();
        assert!(mapper.contains_entity("Author"));
        assert!(!mapper.contains_entity("Book"));
        assert_eq!(RelationshipGraph::relationship(&mapper, "Author", "books").map(|r| r.uselist).ok(), Some(true));
    }

    #[test]
    fn test_graph_relationship_errors() {
        let mapper = Mapper::from_entity::<Author>();

        let err = RelationshipGraph::relationship(&mapper, "Author", "missing").unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(
            err,
            Error::RelationshipNotFound { ref entity, ref relationship, ref path }
                if entity == "Author" && relationship == "missing" && path == "missing"
        ));

        let err = RelationshipGraph::relationship(&mapper, "Book", "books").unwrap_err();
        assert!(matches!(err, Error::UnknownEntity(ref name) if name == "Book"));
    }

    #[test]
    fn test_derived_entity_through_graph() {
        let registry = Registry::new().with_mapper(Mapper::from_entity::<Shelf>());
        assert_eq!(Shelf::table_name(), "shelf");
        let volumes = registry.relationship("Shelf", "volumes").unwrap();
        assert_eq!((volumes.target.as_str(), volumes.uselist), ("Author", true));
        assert_eq!(registry.relationship("Shelf", "curator").map(|r| r.uselist).ok(), Some(false));
    }

    #[test]
    fn test_relationship_names_unknown_entity_is_empty() {
        let mapper = Mapper::from_entity::<Author>();
        assert!(RelationshipGraph::relationship_names(&mapper, "Book").is_empty());
    }

    #[test]
    fn test_find_targets_entity_table() {
        let (sql, options) = Author::find().build();
        assert_eq!(sql, "SELECT * FROM authors");
        assert!(options.is_empty());
    }
}
