use std::collections::BTreeMap;

use super::strategy::Strategy;

/// A directive that survived conflict resolution, split into relationship names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolvedPath {
    pub path:     Vec<String>,
    pub strategy: Strategy,
}

impl ResolvedPath {
    pub fn new<S: Into<String>>(path: impl IntoIterator<Item = S>, strategy: impl Into<Strategy>) -> Self {
        Self { path: path.into_iter().map(Into::into).collect(), strategy: strategy.into() }
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether `other` lies strictly below this path.
    pub fn is_ancestor_of(&self, other: &ResolvedPath) -> bool {
        is_strict_prefix(&self.path, &other.path)
    }

    pub fn key(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

pub(crate) fn split_key<'a>(key: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![key];
    }
    key.split(separator).collect()
}

pub(crate) fn is_strict_prefix(prefix: &[String], path: &[String]) -> bool {
    prefix.len() < path.len() && path.starts_with(prefix)
}

/// Split, deduplicate and order a flat set of directives.
///
/// A directive that does not load is dropped when a deeper directive under
/// it does load. The reverse (a loading ancestor over a non-loading
/// descendant) keeps both. Later duplicates of a key replace earlier ones.
pub fn resolve_paths<K, S, I>(directives: I, separator: &str) -> Vec<ResolvedPath>
where
    K: AsRef<str>,
    S: Into<Strategy>,
    I: IntoIterator<Item = (K, S)>,
{
    let mut by_path: BTreeMap<Vec<String>, Strategy> = BTreeMap::new();
    for (key, strategy) in directives {
        let path = split_key(key.as_ref(), separator).into_iter().map(str::to_string).collect();
        by_path.insert(path, strategy.into());
    }

    let redundant: Vec<Vec<String>> = by_path
        .iter()
        .filter(|(path, strategy)| {
            !strategy.implies_loading()
                && by_path.iter().any(|(other, other_strategy)| {
                    is_strict_prefix(path, other) && other_strategy != *strategy && other_strategy.implies_loading()
                })
        })
        .map(|(path, _)| path.clone())
        .collect();

    for path in redundant {
        tracing::debug!(path = %path.join(separator), "dropping directive shadowed by a deeper load");
        by_path.remove(&path);
    }

    // BTreeMap iteration is already lexicographic by path.
    let resolved: Vec<ResolvedPath> =
        by_path.into_iter().map(|(path, strategy)| ResolvedPath { path, strategy }).collect();
    tracing::trace!(count = resolved.len(), "resolved load paths");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_SEPARATOR;
    use crate::LoadStrategy;

    fn resolve(directives: Vec<(&str, Strategy)>) -> Vec<ResolvedPath> {
        resolve_paths(directives, DEFAULT_SEPARATOR)
    }

    #[test]
    fn test_shallow_false_dropped_for_deeper_load() {
        let resolved = resolve(vec![("a", Strategy::Bool(false)), ("a__b", Strategy::Bool(true))]);
        assert_eq!(resolved, vec![ResolvedPath::new(["a", "b"], true)]);
    }

    #[test]
    fn test_shallow_null_dropped_for_deeper_named_load() {
        let resolved = resolve(vec![
            ("a", Strategy::Null),
            ("a__b__c", Strategy::Named(LoadStrategy::SubqueryLoad)),
        ]);
        assert_eq!(resolved, vec![ResolvedPath::new(["a", "b", "c"], LoadStrategy::SubqueryLoad)]);
    }

    #[test]
    fn test_shallow_raiseload_dropped_for_deeper_wildcard() {
        let resolved = resolve(vec![("a", LoadStrategy::RaiseLoad.into()), ("a__b", Strategy::Wildcard)]);
        assert_eq!(resolved, vec![ResolvedPath::new(["a", "b"], Strategy::Wildcard)]);
    }

    #[test]
    fn test_shallow_load_over_deeper_no_load_keeps_both() {
        let resolved = resolve(vec![("a", Strategy::Bool(true)), ("a__b", Strategy::Bool(false))]);
        assert_eq!(resolved, vec![ResolvedPath::new(["a"], true), ResolvedPath::new(["a", "b"], false)]);
    }

    #[test]
    fn test_two_non_loading_directives_are_kept() {
        let resolved = resolve(vec![("a", Strategy::Bool(false)), ("a__b", LoadStrategy::NoLoad.into())]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_two_loading_directives_are_kept() {
        let resolved = resolve(vec![
            ("books", LoadStrategy::SelectInLoad.into()),
            ("books__publisher", LoadStrategy::JoinedLoad.into()),
        ]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_prefix_is_by_component_not_by_string() {
        let resolved = resolve(vec![("a", Strategy::Bool(false)), ("ab", Strategy::Bool(true))]);
        assert_eq!(resolved, vec![ResolvedPath::new(["a"], false), ResolvedPath::new(["ab"], true)]);
    }

    #[test]
    fn test_sibling_branches_do_not_interfere() {
        let resolved = resolve(vec![("a", Strategy::Bool(false)), ("x__y", Strategy::Bool(true))]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_sorted_by_path_tuple() {
        let resolved = resolve(vec![
            ("z", Strategy::Bool(true)),
            ("a__c", Strategy::Bool(true)),
            ("a", Strategy::Bool(true)),
            ("a__b", Strategy::Bool(true)),
        ]);
        let keys: Vec<String> = resolved.iter().map(|p| p.key("__")).collect();
        assert_eq!(keys, vec!["a", "a__b", "a__c", "z"]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let directives = vec![
            ("a", Strategy::Bool(false)),
            ("a__b", Strategy::Bool(true)),
            ("c", Strategy::Wildcard),
        ];
        assert_eq!(resolve(directives.clone()), resolve(directives));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let resolved = resolve(vec![("a", Strategy::Bool(true)), ("a", Strategy::Bool(false))]);
        assert_eq!(resolved, vec![ResolvedPath::new(["a"], false)]);
    }

    #[test]
    fn test_custom_separator() {
        let resolved = resolve_paths([("books.publisher", true)], ".");
        assert_eq!(resolved, vec![ResolvedPath::new(["books", "publisher"], true)]);
    }

    #[test]
    fn test_empty_separator_keeps_key_whole() {
        let resolved = resolve_paths([("books__publisher", true)], "");
        assert_eq!(resolved, vec![ResolvedPath::new(["books__publisher"], true)]);
    }

    #[test]
    fn test_dropped_parent_leaves_non_loading_sibling() {
        let resolved = resolve(vec![
            ("books", Strategy::Bool(false)),
            ("books__reviews", Strategy::Bool(true)),
            ("books__publisher", Strategy::Bool(false)),
        ]);
        assert_eq!(
            resolved,
            vec![ResolvedPath::new(["books", "publisher"], false), ResolvedPath::new(["books", "reviews"], true)]
        );
    }

    #[test]
    fn test_is_ancestor_of() {
        let a = ResolvedPath::new(["a"], true);
        let ab = ResolvedPath::new(["a", "b"], true);
        assert!(a.is_ancestor_of(&ab));
        assert!(!ab.is_ancestor_of(&a));
        assert!(!a.is_ancestor_of(&a));
    }
}
