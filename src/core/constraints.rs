//! # Constraint Evaluator
//!
//! Decides whether a candidate sequence of tokens respects every token's
//! `requires` and `excludes` rules. All checks work on partial sequences as
//! well as full ones, so the enumerator and the combiner can prune early.

use std::collections::HashSet;

use crate::models::Token;

/// Collects the short forms present in a sequence.
fn present_short_forms<'a>(sequence: &[&'a Token]) -> HashSet<&'a str> {
    sequence.iter().map(|t| t.short_form).collect()
}

/// A sequence is valid iff both its requirements and exclusions hold.
pub fn is_valid(sequence: &[&Token]) -> bool {
    satisfies_requirements(sequence) && satisfies_exclusions(sequence)
}

/// Every token with a non-empty `requires` list must find at least one of
/// those short forms in the sequence.
pub fn satisfies_requirements(sequence: &[&Token]) -> bool {
    requirements_satisfiable(sequence, &HashSet::new())
}

/// Like [`satisfies_requirements`], but an unmet requirement is tolerated
/// while one of its short forms is still in `pending`, the short forms of
/// the groups that have not been folded in yet.
pub fn requirements_satisfiable(sequence: &[&Token], pending: &HashSet<&str>) -> bool {
    let present = present_short_forms(sequence);
    sequence.iter().all(|token| {
        token.requires.is_empty()
            || token
                .requires
                .iter()
                .any(|req| present.contains(req) || pending.contains(req))
    })
}

/// No token with a non-empty `excludes` list may share the sequence with
/// any of those short forms.
pub fn satisfies_exclusions(sequence: &[&Token]) -> bool {
    let present = present_short_forms(sequence);
    sequence
        .iter()
        .all(|token| !token.excludes.iter().any(|ex| present.contains(ex)))
}
