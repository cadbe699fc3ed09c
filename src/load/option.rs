use std::fmt;

use super::strategy::LoadStrategy;

/// What one hop of a loader option applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadTarget {
    Relationship { entity: String, name: String },
    /// Every relationship of the entity reached at this hop.
    Wildcard,
}

impl LoadTarget {
    pub fn relationship(entity: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Relationship { entity: entity.into(), name: name.into() }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Relationship { name, .. } => name,
            Self::Wildcard => "*",
        }
    }
}

impl fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relationship { entity, name } => write!(f, "{}.{}", entity, name),
            Self::Wildcard => f.write_str("'*'"),
        }
    }
}

/// A loader strategy on one target, optionally carrying the option for the
/// next hop. Built innermost first and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoaderOption {
    pub strategy: LoadStrategy,
    pub target:   LoadTarget,
    pub nested:   Option<Box<LoaderOption>>,
}

impl LoaderOption {
    pub fn new(strategy: LoadStrategy, target: LoadTarget) -> Self {
        Self { strategy, target, nested: None }
    }

    /// Apply `strategy` to every relationship of the root entity.
    pub fn wildcard(strategy: LoadStrategy) -> Self {
        Self::new(strategy, LoadTarget::Wildcard)
    }

    pub fn with_nested(mut self, nested: LoaderOption) -> Self {
        self.nested = Some(Box::new(nested));
        self
    }

    /// Iterate the chain from this hop down to the leaf.
    pub fn hops(&self) -> Hops<'_> {
        Hops { next: Some(self) }
    }

    pub fn depth(&self) -> usize {
        self.hops().count()
    }

    pub fn path(&self) -> Vec<&str> {
        self.hops().map(|hop| hop.target.name()).collect()
    }

    pub fn leaf(&self) -> &LoaderOption {
        self.hops().last().unwrap_or(self)
    }

    /// True when every hop of `prefix` matches the leading hops of `self`.
    pub fn starts_with(&self, prefix: &LoaderOption) -> bool {
        let mut ours = self.hops();
        prefix.hops().all(|theirs| {
            ours.next().is_some_and(|hop| hop.strategy == theirs.strategy && hop.target == theirs.target)
        })
    }
}

impl fmt::Display for LoaderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.strategy, self.target)?;
        if let Some(nested) = &self.nested {
            write!(f, ".options({})", nested)?;
        }
        Ok(())
    }
}

pub struct Hops<'a> {
    next: Option<&'a LoaderOption>,
}

impl<'a> Iterator for Hops<'a> {
    type Item = &'a LoaderOption;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.nested.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books_publisher() -> LoaderOption {
        LoaderOption::new(LoadStrategy::SelectInLoad, LoadTarget::relationship("Author", "books"))
            .with_nested(LoaderOption::new(LoadStrategy::JoinedLoad, LoadTarget::relationship("Book", "publisher")))
    }

    #[test]
    fn test_display_single_hop() {
        let option = LoaderOption::new(LoadStrategy::JoinedLoad, LoadTarget::relationship("Book", "publisher"));
        assert_eq!(option.to_string(), "joinedload(Book.publisher)");
    }

    #[test]
    fn test_display_nested() {
        assert_eq!(books_publisher().to_string(), "selectinload(Author.books).options(joinedload(Book.publisher))");
    }

    #[test]
    fn test_display_wildcard() {
        assert_eq!(LoaderOption::wildcard(LoadStrategy::RaiseLoad).to_string(), "raiseload('*')");
    }

    #[test]
    fn test_depth_path_and_leaf() {
        let option = books_publisher();
        assert_eq!(option.depth(), 2);
        assert_eq!(option.path(), vec!["books", "publisher"]);
        assert_eq!(option.leaf().strategy, LoadStrategy::JoinedLoad);
    }

    #[test]
    fn test_starts_with() {
        let chain = books_publisher();
        let books = LoaderOption::new(LoadStrategy::SelectInLoad, LoadTarget::relationship("Author", "books"));
        assert!(chain.starts_with(&books));
        assert!(chain.starts_with(&chain));
        assert!(!books.starts_with(&chain));
    }

    #[test]
    fn test_starts_with_requires_same_strategy() {
        let chain = books_publisher();
        let joined_books = LoaderOption::new(LoadStrategy::JoinedLoad, LoadTarget::relationship("Author", "books"));
        assert!(!chain.starts_with(&joined_books));
    }

    #[test]
    fn test_target_name() {
        assert_eq!(LoadTarget::relationship("Author", "books").name(), "books");
        assert_eq!(LoadTarget::Wildcard.name(), "*");
        assert!(LoadTarget::Wildcard.is_wildcard());
    }
}
