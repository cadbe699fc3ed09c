use super::strategy::Strategy;

pub const DEFAULT_SEPARATOR: &str = "__";

/// Options shared by every directive of one [`Load`](super::Load).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadConfig {
    /// Splits a directive key into relationship names. Empty disables splitting.
    pub separator:        String,
    /// Applied to every root relationship no directive covers.
    pub default_strategy: Option<Strategy>,
}

impl LoadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_default_strategy(mut self, strategy: impl Into<Strategy>) -> Self {
        self.default_strategy = Some(strategy.into());
        self
    }

    pub(crate) fn split<'a>(&self, key: &'a str) -> Vec<&'a str> {
        super::path::split_key(key, &self.separator)
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR.to_string(), default_strategy: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoadStrategy;

    #[test]
    fn test_default_config() {
        let config = LoadConfig::default();
        assert_eq!(config.separator, "__");
        assert_eq!(config.default_strategy, None);
        assert_eq!(config, LoadConfig::new());
    }

    #[test]
    fn test_builder_methods() {
        let config = LoadConfig::new().with_separator(".").with_default_strategy(LoadStrategy::RaiseLoad);
        assert_eq!(config.separator, ".");
        assert_eq!(config.default_strategy, Some(Strategy::Named(LoadStrategy::RaiseLoad)));
    }

    #[test]
    fn test_split_default_separator() {
        let config = LoadConfig::default();
        assert_eq!(config.split("author__books__reviews"), vec!["author", "books", "reviews"]);
        assert_eq!(config.split("books"), vec!["books"]);
    }

    #[test]
    fn test_split_custom_separator() {
        let config = LoadConfig::new().with_separator(".");
        assert_eq!(config.split("books.publisher"), vec!["books", "publisher"]);
        assert_eq!(config.split("books__publisher"), vec!["books__publisher"]);
    }

    #[test]
    fn test_split_empty_separator_keeps_key() {
        let config = LoadConfig::new().with_separator("");
        assert_eq!(config.split("books__publisher"), vec!["books__publisher"]);
    }

    #[test]
    fn test_split_never_returns_empty() {
        let config = LoadConfig::default();
        assert_eq!(config.split(""), vec![""]);
    }
}
