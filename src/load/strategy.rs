use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A loader strategy understood by the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoadStrategy {
    /// Keep the relationship's mapped default, used to reach nested options.
    DefaultLoad,
    /// Never load; the attribute stays empty.
    NoLoad,
    /// Load in the parent query through a JOIN.
    JoinedLoad,
    /// Load in a second, batched `IN` query.
    SelectInLoad,
    /// Load in a second query that re-runs the parent as a subquery.
    SubqueryLoad,
    /// Raise when the attribute is accessed without being loaded.
    RaiseLoad,
}

impl LoadStrategy {
    pub const ALL: [LoadStrategy; 6] = [
        Self::DefaultLoad,
        Self::NoLoad,
        Self::JoinedLoad,
        Self::SelectInLoad,
        Self::SubqueryLoad,
        Self::RaiseLoad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DefaultLoad => "defaultload",
            Self::NoLoad => "noload",
            Self::JoinedLoad => "joinedload",
            Self::SelectInLoad => "selectinload",
            Self::SubqueryLoad => "subqueryload",
            Self::RaiseLoad => "raiseload",
        }
    }

    /// Whether the strategy fetches the related rows.
    pub fn is_loading(self) -> bool {
        !matches!(self, Self::NoLoad | Self::RaiseLoad)
    }
}

impl fmt::Display for LoadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoadStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|strategy| strategy.name() == s).ok_or_else(|| Error::InvalidStrategy(s.to_string()))
    }
}

/// The value attached to a relationship path in a load directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Named(LoadStrategy),
    /// `true` loads with an inferred strategy, `false` raises on access.
    Bool(bool),
    /// Same effect as `Bool(false)`, kept distinct for equality.
    Null,
    /// Applies to every relationship at the level the path reaches.
    Wildcard,
}

impl Strategy {
    pub const WILDCARD: &'static str = "*";

    pub fn implies_loading(&self) -> bool {
        match self {
            Self::Named(strategy) => strategy.is_loading(),
            Self::Bool(load) => *load,
            Self::Null => false,
            Self::Wildcard => true,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Map this directive to a concrete loader for a relationship.
    ///
    /// Inferred loads pick `selectinload` for collections, so joins never
    /// multiply parent rows, and `joinedload` for scalar relationships.
    pub fn loader(&self, uselist: bool) -> LoadStrategy {
        match self {
            Self::Bool(false) | Self::Null => LoadStrategy::RaiseLoad,
            Self::Named(strategy) => *strategy,
            Self::Bool(true) | Self::Wildcard => {
                if uselist {
                    LoadStrategy::SelectInLoad
                } else {
                    LoadStrategy::JoinedLoad
                }
            }
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Bool(true)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(strategy) => write!(f, "{}", strategy),
            Self::Bool(load) => write!(f, "{}", load),
            Self::Null => f.write_str("null"),
            Self::Wildcard => f.write_str(Self::WILDCARD),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::WILDCARD {
            return Ok(Self::Wildcard);
        }
        s.parse().map(Self::Named)
    }
}

impl From<bool> for Strategy {
    fn from(load: bool) -> Self {
        Self::Bool(load)
    }
}

impl From<LoadStrategy> for Strategy {
    fn from(strategy: LoadStrategy) -> Self {
        Self::Named(strategy)
    }
}

impl From<Option<LoadStrategy>> for Strategy {
    fn from(strategy: Option<LoadStrategy>) -> Self {
        strategy.map(Self::Named).unwrap_or(Self::Null)
    }
}
