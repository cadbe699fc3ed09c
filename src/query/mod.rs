//! Query builders for eagerload

pub(crate) mod select;

pub mod prelude {
    pub use super::select::Select;
}
