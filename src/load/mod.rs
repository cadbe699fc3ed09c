//! Eager-load directives compiled into nested loader options

pub(crate) mod config;
#[cfg(feature = "serde")]
pub(crate) mod de;
pub(crate) mod option;
pub(crate) mod path;
pub(crate) mod strategy;

use std::hash::Hash;
use std::hash::Hasher;

use crate::EntityTrait;
use crate::Error;
use crate::RelationshipGraph;
use crate::Result;

pub mod prelude {
    pub use super::Load;
    pub use super::LoadBuilder;
    pub use super::config::DEFAULT_SEPARATOR;
    pub use super::config::LoadConfig;
    pub use super::option::LoadTarget;
    pub use super::option::LoaderOption;
    pub use super::path::ResolvedPath;
    pub use super::path::resolve_paths;
    pub use super::strategy::LoadStrategy;
    pub use super::strategy::Strategy;
}

use prelude::*;

/// A set of relationship-path directives, resolved once at construction.
///
/// Keys are relationship paths joined by the configured separator
/// (`"books__publisher"`), values say how each path is fetched. Calling
/// [`Load::loaders`] walks those paths through a [`RelationshipGraph`] and
/// produces one nested [`LoaderOption`] per chain.
///
/// # Example
///
/// ```
/// use eagerload::prelude::*;
///
/// let registry = Registry::new()
///     .with_mapper(Mapper::new("Author").has_many("books", "Book"))
///     .with_mapper(Mapper::new("Book").belongs_to("publisher", "Publisher"));
///
/// let load = Load::builder()
///     .directive("books", LoadStrategy::SelectInLoad)
///     .directive("books__publisher", LoadStrategy::JoinedLoad)
///     .build();
///
/// let options = load.loaders(&registry, "Author").unwrap();
/// assert_eq!(options.len(), 1);
/// assert_eq!(options[0].to_string(), "selectinload(Author.books).options(joinedload(Book.publisher))");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Load {
    config: LoadConfig,
    paths:  Vec<ResolvedPath>,
}

impl Load {
    pub fn new<K, S, I>(config: LoadConfig, directives: I) -> Self
    where
        K: AsRef<str>,
        S: Into<Strategy>,
        I: IntoIterator<Item = (K, S)>,
    {
        let paths = resolve_paths(directives, &config.separator);
        Self { config, paths }
    }

    pub fn builder() -> LoadBuilder {
        LoadBuilder::default()
    }

    /// Load every listed path with an inferred strategy.
    pub fn from_paths<K: AsRef<str>>(config: LoadConfig, keys: impl IntoIterator<Item = K>) -> Self {
        Self::new(config, keys.into_iter().map(|key| (key, Strategy::Bool(true))))
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    pub fn paths(&self) -> &[ResolvedPath] {
        &self.paths
    }

    pub fn default_strategy(&self) -> Option<Strategy> {
        self.config.default_strategy
    }

    pub fn has_wildcards(&self) -> bool {
        self.config.default_strategy.is_some() || self.paths.iter().any(|resolved| resolved.strategy.is_wildcard())
    }

    /// An empty load adds no options and leaves the mapped defaults alone.
    pub fn is_empty(&self) -> bool {
        self.config.default_strategy.is_none() && self.paths.is_empty()
    }

    pub fn loaders_for<E: EntityTrait, G: RelationshipGraph + ?Sized>(&self, graph: &G) -> Result<Vec<LoaderOption>> {
        self.loaders(graph, E::entity_name())
    }

    /// Build the loader options for `entity`, in path order.
    ///
    /// A chain that repeats the leading hops of a longer chain is folded
    /// into it. The default strategy, if configured, always comes last.
    pub fn loaders<G: RelationshipGraph + ?Sized>(&self, graph: &G, entity: &str) -> Result<Vec<LoaderOption>> {
        let mut chains = Vec::with_capacity(self.paths.len());
        for resolved in &self.paths {
            if let Some(chain) = self.chain(graph, entity, resolved)? {
                tracing::trace!(entity, option = %chain, "built loader chain");
                chains.push(chain);
            }
        }

        let subsumed: Vec<bool> = chains
            .iter()
            .map(|chain| chains.iter().any(|other| other.depth() > chain.depth() && other.starts_with(chain)))
            .collect();

        let mut options: Vec<LoaderOption> = chains
            .into_iter()
            .zip(subsumed)
            .filter_map(|(chain, subsumed)| {
                if subsumed {
                    tracing::debug!(entity, option = %chain, "chain folded into a deeper chain");
                    return None;
                }
                Some(chain)
            })
            .collect();

        if let Some(default) = self.config.default_strategy {
            options.push(LoaderOption::wildcard(default.loader(true)));
        }
        Ok(options)
    }

    fn chain<G: RelationshipGraph + ?Sized>(
        &self,
        graph: &G,
        entity: &str,
        resolved: &ResolvedPath,
    ) -> Result<Option<LoaderOption>> {
        if !graph.contains_entity(entity) {
            return Err(Error::UnknownEntity(entity.to_string()));
        }

        let mut cursor = entity;
        let mut hops = Vec::with_capacity(resolved.len());

        for (depth, name) in resolved.path.iter().enumerate() {
            let relationship =
                graph.relationship(cursor, name).map_err(|err| err.in_path(resolved.key(&self.config.separator)))?;
            let has_next = depth + 1 < resolved.len();

            let (strategy, exact) = self.hop_strategy(&resolved.path[..=depth], resolved.strategy);
            let target = if exact && strategy.is_wildcard() {
                // Nothing can be nested under a wildcard target.
                if has_next {
                    return Err(Error::InvalidSpec(format!(
                        "'{}' is a wildcard and cannot be followed by '{}'",
                        resolved.path[..=depth].join(self.config.separator.as_str()),
                        resolved.key(&self.config.separator),
                    )));
                }
                LoadTarget::Wildcard
            } else {
                LoadTarget::relationship(cursor, name.as_str())
            };
            hops.push(LoaderOption::new(strategy.loader(relationship.uselist), target));

            if has_next {
                cursor = &relationship.target;
            }
        }

        Ok(hops.into_iter().rev().reduce(|inner, outer| outer.with_nested(inner)))
    }

    /// The strategy for one hop, and whether a directive names that hop exactly.
    fn hop_strategy(&self, partial: &[String], overall: Strategy) -> (Strategy, bool) {
        if let Some(own) = self.paths.iter().find(|resolved| resolved.path.as_slice() == partial) {
            return (own.strategy, true);
        }
        let ancestor_loads = self
            .paths
            .iter()
            .any(|resolved| path::is_strict_prefix(&resolved.path, partial) && resolved.strategy.implies_loading());
        if ancestor_loads {
            return (Strategy::Bool(true), false);
        }
        (overall, false)
    }
}

impl PartialEq for Load {
    fn eq(&self, other: &Self) -> bool {
        self.config.default_strategy == other.config.default_strategy && self.paths == other.paths
    }
}

impl Eq for Load {}

impl Hash for Load {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.config.default_strategy.hash(state);
        self.paths.hash(state);
    }
}

impl<K: AsRef<str>, S: Into<Strategy>> FromIterator<(K, S)> for Load {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Self::new(LoadConfig::default(), iter)
    }
}

/// Fluent construction of a [`Load`].
#[derive(Debug, Clone, Default)]
pub struct LoadBuilder {
    config:     LoadConfig,
    directives: Vec<(String, Strategy)>,
}

impl LoadBuilder {
    pub fn config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn default_strategy(mut self, strategy: impl Into<Strategy>) -> Self {
        self.config.default_strategy = Some(strategy.into());
        self
    }

    pub fn directive(mut self, key: impl Into<String>, strategy: impl Into<Strategy>) -> Self {
        self.directives.push((key.into(), strategy.into()));
        self
    }

    pub fn directives<K: Into<String>, S: Into<Strategy>>(mut self, directives: impl IntoIterator<Item = (K, S)>) -> Self {
        self.directives.extend(directives.into_iter().map(|(key, strategy)| (key.into(), strategy.into())));
        self
    }

    pub fn build(self) -> Load {
        Load::new(self.config, self.directives)
    }
}
