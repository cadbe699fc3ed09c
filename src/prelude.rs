//! Prelude module for eagerload
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use eagerload::prelude::*;
//! ```

// Re-export the derive macro
pub use eagerload_macros::Entity;

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::load::prelude::*;
pub use crate::mapper::Mapper;
pub use crate::mapper::Relationship;
pub use crate::query::prelude::*;
pub use crate::registry::Registry;
pub use crate::traits::prelude::*;
