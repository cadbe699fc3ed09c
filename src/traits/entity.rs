use crate::Relationship;

/// Trait for entity types whose relationships can be eagerly loaded
///
/// This trait is typically implemented via the `#[derive(Entity)]` macro.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Debug, Entity)]
/// #[eagerload(table_name = "authors")]
/// pub struct Author {
///     pub id:    i64,
///     #[eagerload(relationship)]
///     pub books: Vec<Book>,
/// }
///
/// let mut registry = Registry::new();
/// registry.register::<Author>().register::<Book>();
///
/// let load = Load::builder().directive("books", true).build();
/// let options = load.loaders_for::<Author, _>(&registry)?;
/// ```
pub trait EntityTrait: Sized + 'static {
    /// Name used to key this entity in a relationship graph
    fn entity_name() -> &'static str;

    /// Get the table name
    fn table_name() -> &'static str;

    /// The relationships declared on this entity
    fn relationships() -> Vec<Relationship>;
}
