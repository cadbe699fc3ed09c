//! # eagerload
//!
//! Compile flat relationship-path directives into nested eager-loading
//! options, in the style of SQLAlchemy loader options.
//!
//! ## Features
//!
//! - Dotted (`"books__publisher"`) path directives with per-path strategies
//! - Conflict resolution between a path and its ancestors
//! - Inferred strategies: `selectinload` for collections, `joinedload` for scalars
//! - Wildcard and default strategies
//! - Derive macro describing an entity's relationships
//! - Optional `serde` support for loading directives from configuration
//!
//! ## Quick Start
//!
//! ```ignore
//! use eagerload::prelude::*;
//!
//! #[derive(Clone, Debug, Entity)]
//! #[eagerload(table_name = "authors")]
//! pub struct Author {
//!     pub id:    i64,
//!     #[eagerload(relationship)]
//!     pub books: Vec<Book>,
//! }
//!
//! #[derive(Clone, Debug, Entity)]
//! #[eagerload(table_name = "books")]
//! pub struct Book {
//!     pub id:        i64,
//!     #[eagerload(relationship)]
//!     pub publisher: Option<Box<Publisher>>,
//! }
//!
//! fn main() -> Result<()> {
//!     let mut registry = Registry::new();
//!     registry.register::<Author>().register::<Book>().register::<Publisher>();
//!
//!     let load = Load::builder()
//!         .directive("books", LoadStrategy::SelectInLoad)
//!         .directive("books__publisher", LoadStrategy::JoinedLoad)
//!         .build();
//!
//!     // selectinload(Author.books).options(joinedload(Book.publisher))
//!     let (sql, options) = Author::find_with(&load, &registry)?.build();
//!     Ok(())
//! }
//! ```
//!
//! ## Directive values
//!
//! - a strategy name: `defaultload`, `noload`, `joinedload`, `selectinload`,
//!   `subqueryload`, `raiseload`
//! - `true`: load, inferring the strategy from the relationship
//! - `false` / `null`: raise when accessed
//! - `"*"`: apply to every relationship at the level the path reaches
//!
//! ## Entity Attributes
//!
//! The `#[eagerload(...)]` attribute supports:
//!
//! - `entity_name = "..."` - Name used in the relationship graph (default: struct name)
//! - `table_name = "..."` - Set the table name (default: struct name in snake_case)
//! - `relationship` - Mark a field as a relationship
//! - `target = "..."` - Override the related type (default: taken from the field type)
//! - `uselist = bool` - Override collection detection (default: `Vec<T>` is a collection)

extern crate self as eagerload;

pub mod error;
pub mod load;
pub mod mapper;
pub mod prelude;
pub mod query;
pub mod registry;
pub mod traits;
// Re-export the derive macro
pub use eagerload_macros::Entity;
// Re-export main types at crate root
pub use error::Error;
pub use error::Result;
pub use load::Load;
pub use load::LoadBuilder;
pub use load::prelude::DEFAULT_SEPARATOR;
pub use load::prelude::LoadConfig;
pub use load::prelude::LoadStrategy;
pub use load::prelude::LoadTarget;
pub use load::prelude::LoaderOption;
pub use load::prelude::ResolvedPath;
pub use load::prelude::Strategy;
pub use load::prelude::resolve_paths;
pub use mapper::Mapper;
pub use mapper::Relationship;
pub use query::prelude::Select;
pub use registry::Registry;
pub use traits::prelude::EntitySelectExt;
pub use traits::prelude::EntityTrait;
pub use traits::prelude::RelationshipGraph;
