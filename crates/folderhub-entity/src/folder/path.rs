//! Materialized path helpers.
//!
//! A path is the dot-separated list of folder names from a root down to and
//! including the folder itself, e.g. `alpha.bravo.charlie`. Ancestry is
//! derived purely from these strings: `A` is an ancestor of `P` exactly when
//! `P` starts with `A` followed by the separator.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Join a parent path and a child name.
pub fn join(parent: &str, name: &str) -> String {
    let mut path = String::with_capacity(parent.len() + 1 + name.len());
    path.push_str(parent);
    path.push(SEPARATOR);
    path.push_str(name);
    path
}

/// The prefix every strict descendant of `path` starts with.
pub fn descendant_prefix(path: &str) -> String {
    let mut prefix = String::with_capacity(path.len() + 1);
    prefix.push_str(path);
    prefix.push(SEPARATOR);
    prefix
}

/// Iterate over the segments of a path, root first.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR)
}

/// The final segment, which names the folder itself.
pub fn last_segment(path: &str) -> &str {
    path.rsplit_once(SEPARATOR)
        .map_or(path, |(_, last)| last)
}

/// The parent path, or `None` for a root path.
pub fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once(SEPARATOR).map(|(parent, _)| parent)
}

/// Number of segments; roots have depth 1.
pub fn depth(path: &str) -> usize {
    segments(path).count()
}

/// Whether `candidate` is a strict descendant of `ancestor`.
///
/// The match is anchored at a separator, so `alphabet` is not a descendant
/// of `alpha` while `alpha.bet` is.
pub fn is_descendant_of(candidate: &str, ancestor: &str) -> bool {
    candidate
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Whether `candidate` is `root` itself or one of its descendants.
pub fn is_within(candidate: &str, root: &str) -> bool {
    candidate == root || is_descendant_of(candidate, root)
}

/// Replace the leading `old_root` of `path` with `new_root`.
///
/// Returns `None` when `path` is outside the subtree rooted at `old_root`.
pub fn rebase(path: &str, old_root: &str, new_root: &str) -> Option<String> {
    if !is_within(path, old_root) {
        return None;
    }
    let rest = &path[old_root.len()..];
    let mut rebased = String::with_capacity(new_root.len() + rest.len());
    rebased.push_str(new_root);
    rebased.push_str(rest);
    Some(rebased)
}

/// Check that `name` can be used as a single path segment.
pub fn is_valid_segment(name: &str) -> bool {
    !name.is_empty() && !name.contains(SEPARATOR)
}
