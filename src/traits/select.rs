use super::entity::EntityTrait;
use super::graph::RelationshipGraph;
use crate::Load;
use crate::Result;
use crate::Select;

pub trait EntitySelectExt: EntityTrait {
    #[tracing::instrument]
    fn find() -> Select<Self> {
        Select::new()
    }

    #[tracing::instrument(skip(load, graph))]
    fn find_with<G: RelationshipGraph + ?Sized>(load: &Load, graph: &G) -> Result<Select<Self>> {
        Select::new().load(load, graph)
    }
}

impl<E: EntityTrait> EntitySelectExt for E {}
