//! In-memory relationship graph

use std::collections::HashMap;

use crate::EntityTrait;
use crate::Error;
use crate::Mapper;
use crate::RelationshipGraph;
use crate::Result;

/// Mappers keyed by entity name.
///
/// Built once at startup and then shared read-only; resolving loader
/// options never mutates it.
///
/// # Example
///
/// ```ignore
/// let mut registry = Registry::new();
/// registry.register::<Author>().register::<Book>().register::<Publisher>();
/// registry.validate()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    mappers: HashMap<String, Mapper>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<E: EntityTrait>(&mut self) -> &mut Self {
        self.insert(Mapper::from_entity::<E>())
    }

    pub fn insert(&mut self, mapper: Mapper) -> &mut Self {
        tracing::trace!(entity = mapper.entity(), "registering mapper");
        self.mappers.insert(mapper.entity().to_string(), mapper);
        self
    }

    pub fn with_mapper(mut self, mapper: Mapper) -> Self {
        self.insert(mapper);
        self
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.mappers.contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    pub fn entities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.mappers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Check that every relationship points at a registered entity.
    pub fn validate(&self) -> Result<()> {
        for entity in self.entities() {
            let Some(mapper) = self.mappers.get(entity) else { continue };
            if let Some(missing) = mapper.relationships().find(|rel| !self.contains(&rel.target)) {
                return Err(Error::UnknownEntity(missing.target.clone()));
            }
        }
        Ok(())
    }
}

impl RelationshipGraph for Registry {
    fn mapper(&self, entity: &str) -> Option<&Mapper> {
        self.mappers.get(entity)
    }
}
