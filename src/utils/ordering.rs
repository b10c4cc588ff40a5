// Stable reorder of identifiers against a canonical reference order

use std::collections::HashSet;
use std::hash::Hash;

/// Reorders `target` to follow `reference` order.
///
/// Emits each reference element (once per reference occurrence) iff it also
/// appears in `target`; target elements absent from `reference` are dropped.
/// Inputs are never mutated.
pub fn sort_by_reference<T>(target: &[T], reference: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let present: HashSet<&T> = target.iter().collect();
    reference
        .iter()
        .filter(|item| present.contains(*item))
        .cloned()
        .collect()
}
