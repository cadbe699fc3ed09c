//! Relationship metadata for mapped entities

use std::collections::BTreeMap;

use crate::EntityTrait;

/// A relationship declared on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// Attribute name on the owning entity
    pub name:    String,
    /// Entity name of the related type
    pub target:  String,
    /// Collection-valued (`Vec<T>`) rather than scalar
    pub uselist: bool,
}

impl Relationship {
    pub fn new(name: impl Into<String>, target: impl Into<String>, uselist: bool) -> Self {
        Self { name: name.into(), target: target.into(), uselist }
    }

    pub fn collection(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, true)
    }

    pub fn scalar(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, false)
    }
}

/// The relationships of one entity, keyed by attribute name.
///
/// # Example
///
/// ```
/// use eagerload::Mapper;
///
/// let author = Mapper::new("Author").has_many("books", "Book").belongs_to("agent", "Agent");
/// assert!(author.relationship("books").unwrap().uselist);
/// assert!(!author.relationship("agent").unwrap().uselist);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapper {
    entity:        String,
    relationships: BTreeMap<String, Relationship>,
}

impl Mapper {
    pub fn new(entity: impl Into<String>) -> Self {
        Self { entity: entity.into(), relationships: BTreeMap::new() }
    }

    pub fn from_entity<E: EntityTrait>() -> Self {
        E::relationships().into_iter().fold(Self::new(E::entity_name()), Self::with_relationship)
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.insert(relationship.name.clone(), relationship);
        self
    }

    pub fn has_many(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.with_relationship(Relationship::collection(name, target))
    }

    pub fn has_one(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.with_relationship(Relationship::scalar(name, target))
    }

    pub fn belongs_to(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.with_relationship(Relationship::scalar(name, target))
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    pub fn relationship_names(&self) -> Vec<&str> {
        self.relationships.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapper_builders() {
        let mapper = Mapper::new("Book").belongs_to("publisher", "Publisher").has_many("reviews", "Review");
        assert_eq!(mapper.entity(), "Book");
        assert_eq!(mapper.relationship("publisher"), Some(&Relationship::scalar("publisher", "Publisher")));
        assert_eq!(mapper.relationship("reviews"), Some(&Relationship::collection("reviews", "Review")));
        assert_eq!(mapper.relationship("author"), None);
    }

    #[test]
    fn test_relationship_names_sorted() {
        let mapper = Mapper::new("Book").has_many("reviews", "Review").has_one("cover", "Image");
        assert_eq!(mapper.relationship_names(), vec!["cover", "reviews"]);
    }

    #[test]
    fn test_redeclared_relationship_replaces() {
        let mapper = Mapper::new("Book").has_one("cover", "Image").has_many("cover", "Image");
        assert_eq!(mapper.relationships().count(), 1);
        assert!(mapper.relationship("cover").unwrap().uselist);
    }

    #[test]
    fn test_self_referential() {
        let mapper = Mapper::new("Category").has_many("children", "Category").belongs_to("parent", "Category");
        assert!(mapper.relationships().all(|rel| rel.target == "Category"));
    }
}
