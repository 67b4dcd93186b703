//! # Sequential Combiner
//!
//! Folds the token groups left to right. The frontier starts as a single
//! empty sequence; each group extends every frontier sequence with every
//! subset the group can contribute, and only viable extensions survive into
//! the next frontier.
//!
//! Exclusions are monotonic under concatenation, so a sequence that breaks
//! one is discarded immediately. A requirement may still be met by a later
//! group, so it only disqualifies a partial sequence once no remaining group
//! can provide any of the required short forms. After the last group
//! nothing is pending and viability is exactly [`constraints::is_valid`].

use std::collections::HashSet;

use crate::{
    core::{constraints, subsets},
    models::{Sequence, Token, TokenGroup},
};

/// Builds every valid full sequence over `groups`.
///
/// The order of the result is deterministic: for each group, subsets are
/// the outer loop and existing partial sequences the inner one.
pub fn build(groups: &[TokenGroup]) -> Vec<Sequence<'static>> {
    let mut frontier: Vec<Sequence<'static>> = vec![Vec::new()];

    for (position, group) in groups.iter().enumerate() {
        let pending = pending_short_forms(groups, position + 1);
        let segments = subsets::enumerate(group, group.optional);

        let mut next = Vec::new();
        for segment in &segments {
            for partial in &frontier {
                let mut candidate = Vec::with_capacity(partial.len() + segment.len());
                candidate.extend_from_slice(partial);
                candidate.extend_from_slice(segment);
                if is_viable(&candidate, &pending) {
                    next.push(candidate);
                }
            }
        }

        log::debug!(
            "Folded group '{}': {} subsets, frontier {} -> {}",
            group.name,
            segments.len(),
            frontier.len(),
            next.len()
        );
        frontier = next;
    }

    frontier
}

/// Short forms of every group from `from` onwards.
fn pending_short_forms(groups: &[TokenGroup], from: usize) -> HashSet<&'static str> {
    groups
        .iter()
        .skip(from)
        .flat_map(|g| g.tokens.iter().map(|t| t.short_form))
        .collect()
}

fn is_viable(candidate: &[&Token], pending: &HashSet<&str>) -> bool {
    constraints::satisfies_exclusions(candidate)
        && constraints::requirements_satisfiable(candidate, pending)
}
