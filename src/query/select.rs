use std::fmt;
use std::marker::PhantomData;

use crate::EntityTrait;
use crate::Load;
use crate::LoaderOption;
use crate::RelationshipGraph;
use crate::Result;

/// A SELECT over one entity with loader options attached.
pub struct Select<E: EntityTrait> {
    options: Vec<LoaderOption>,
    limit:   Option<usize>,
    offset:  Option<usize>,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Select<E> {
    pub fn new() -> Self {
        Self { options: Vec::new(), limit: None, offset: None, _entity: PhantomData }
    }

    pub fn option(mut self, option: LoaderOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = LoaderOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Resolve `load` against `graph` for this entity and attach the result.
    pub fn load<G: RelationshipGraph + ?Sized>(self, load: &Load, graph: &G) -> Result<Self> {
        if load.is_empty() {
            return Ok(self);
        }
        let options = load.loaders_for::<E, G>(graph)?;
        tracing::trace!(entity = E::entity_name(), count = options.len(), "attaching loader options");
        Ok(self.options(options))
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn loader_options(&self) -> &[LoaderOption] {
        &self.options
    }

    pub fn build(&self) -> (String, Vec<LoaderOption>) {
        let mut sql = format!("SELECT * FROM {}", E::table_name());

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        (sql, self.options.clone())
    }
}

impl<E: EntityTrait> Default for Select<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> Clone for Select<E> {
    fn clone(&self) -> Self {
        Self { options: self.options.clone(), limit: self.limit, offset: self.offset, _entity: PhantomData }
    }
}

impl<E: EntityTrait> fmt::Debug for Select<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("entity", &E::entity_name())
            .field("options", &self.options)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}
