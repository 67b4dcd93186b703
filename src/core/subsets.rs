//! # Subset Enumerator
//!
//! Produces, for a single token group, every subset of tokens the group may
//! contribute to an alias. Subsets that violate their own exclusions are
//! dropped here, before the combiner ever sees them. Subsets of `Free`
//! groups are expanded into every ordering of their tokens.

use crate::{
    core::constraints,
    models::{Arity, Placement, Sequence, Token, TokenGroup},
};

/// Enumerates the subsets of `group`.
///
/// Output order is deterministic: ascending subset size, then lexicographic
/// order of token positions, then (for `Free` groups) lexicographic order of
/// permutations.
///
/// # Arguments
/// * `group` - The group to enumerate.
/// * `allow_empty` - Whether the empty subset may be produced. For
///   `ExactlyOne` groups it additionally requires the group to be optional.
pub fn enumerate(group: &TokenGroup, allow_empty: bool) -> Vec<Sequence<'static>> {
    let (include_empty, max_size) = match group.arity {
        Arity::ExactlyOne => (allow_empty && group.optional, 1),
        Arity::AnySubset => (allow_empty, group.tokens.len()),
    };
    let min_size = if include_empty { 0 } else { 1 };

    let subsets = (min_size..=max_size)
        .flat_map(|size| combinations(group, size))
        .filter(|subset| constraints::satisfies_exclusions(subset));

    match group.placement {
        Placement::Positional => subsets.collect(),
        Placement::Free => subsets.flat_map(|subset| permutations(&subset)).collect(),
    }
}

/// All `size`-combinations of the group's tokens, in lexicographic order.
fn combinations(group: &TokenGroup, size: usize) -> Vec<Sequence<'static>> {
    fn extend(
        group: &TokenGroup,
        start: usize,
        size: usize,
        current: &mut Sequence<'static>,
        out: &mut Vec<Sequence<'static>>,
    ) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for (offset, token) in group.tokens.iter().enumerate().skip(start) {
            current.push(token);
            extend(group, offset + 1, size, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    if size <= group.tokens.len() {
        extend(group, 0, size, &mut Vec::with_capacity(size), &mut out);
    }
    out
}

/// Every ordering of `items`, lexicographic by original position.
fn permutations<'a>(items: &[&'a Token]) -> Vec<Sequence<'a>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (pos, head) in items.iter().enumerate() {
        let rest: Vec<_> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(_, t)| *t)
            .collect();
        for mut tail in permutations(&rest) {
            tail.insert(0, *head);
            out.push(tail);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    static FLAGS: &[Token] = &[
        Token::new("a", "--a"),
        Token::new("b", "--b").excludes(&["c"]),
        Token::new("c", "--c"),
    ];

    fn group(arity: Arity, optional: bool, placement: Placement) -> TokenGroup {
        TokenGroup {
            name: "flags",
            tokens: FLAGS,
            optional,
            arity,
            placement,
        }
    }

    fn keys(subsets: &[Sequence<'_>]) -> Vec<String> {
        subsets
            .iter()
            .map(|s| s.iter().map(|t| t.short_form).collect::<Vec<_>>().join(","))
            .collect()
    }

    #[test]
    fn test_exactly_one_mandatory() {
        let g = group(Arity::ExactlyOne, false, Placement::Positional);
        assert_eq!(keys(&enumerate(&g, true)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_exactly_one_optional_includes_empty() {
        let g = group(Arity::ExactlyOne, true, Placement::Free);
        assert_eq!(keys(&enumerate(&g, true)), vec!["", "a", "b", "c"]);
        assert_eq!(keys(&enumerate(&g, false)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_any_subset_positional_prunes_self_exclusions() {
        let g = group(Arity::AnySubset, true, Placement::Positional);
        // {b, c} and {a, b, c} violate b's exclusion.
        assert_eq!(
            keys(&enumerate(&g, true)),
            vec!["", "a", "b", "c", "a,b", "a,c"]
        );
    }

    #[test]
    fn test_any_subset_free_generates_all_orderings() {
        let g = group(Arity::AnySubset, true, Placement::Free);
        assert_eq!(
            keys(&enumerate(&g, false)),
            vec!["a", "b", "c", "a,b", "b,a", "a,c", "c,a"]
        );
    }

    #[test]
    fn test_permutations_of_three_are_complete_and_ordered() {
        let items: Vec<&Token> = FLAGS.iter().collect();
        let perms = permutations(&items);
        assert_eq!(
            keys(&perms),
            vec!["a,b,c", "a,c,b", "b,a,c", "b,c,a", "c,a,b", "c,b,a"]
        );
    }

    #[test]
    fn test_combination_larger_than_group_is_empty() {
        let g = group(Arity::AnySubset, true, Placement::Free);
        assert!(combinations(&g, 4).is_empty());
    }
}
