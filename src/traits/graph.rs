use crate::Error;
use crate::Mapper;
use crate::Relationship;
use crate::Result;

/// Read-only access to entity relationships.
///
/// The resolver only follows the paths it is given, so cyclic graphs are fine.
pub trait RelationshipGraph {
    fn mapper(&self, entity: &str) -> Option<&Mapper>;

    fn contains_entity(&self, entity: &str) -> bool {
        self.mapper(entity).is_some()
    }

    /// Look up `entity.name`. The error's `path` is just `name`; callers
    /// resolving a longer path replace it with [`Error::in_path`].
    fn relationship(&self, entity: &str, name: &str) -> Result<&Relationship> {
        let mapper = self.mapper(entity).ok_or_else(|| Error::UnknownEntity(entity.to_string()))?;
        mapper.relationship(name).ok_or_else(|| Error::RelationshipNotFound {
            entity:       mapper.entity().to_string(),
            relationship: name.to_string(),
            path:         name.to_string(),
        })
    }

    fn relationship_names(&self, entity: &str) -> Vec<&str> {
        self.mapper(entity).map(Mapper::relationship_names).unwrap_or_default()
    }
}

impl RelationshipGraph for Mapper {
    fn mapper(&self, entity: &str) -> Option<&Mapper> {
        (self.entity() == entity).then_some(self)
    }
}
