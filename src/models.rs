// src/models.rs

// --- VOCABULARY MODELS ---
// Everything here is built once from static tables and never mutated.

/// How many tokens of a group may appear in one alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One token (or none, when the group is optional).
    ExactlyOne,
    /// Any subset of the group's tokens, including all of them.
    AnySubset,
}

/// Whether the tokens a group contributes may be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Tokens may be written in any order; every permutation is generated.
    Free,
    /// Declared relative order is meaningful and preserved.
    Positional,
}

/// One vocabulary unit of the alias grammar, e.g. an operation or a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Abbreviation contributed to the alias key. May be empty.
    pub short_form: &'static str,
    /// Literal text contributed to the expanded command.
    pub long_form: &'static str,
    /// At least one of these short forms must co-occur (when non-empty).
    pub requires: &'static [&'static str],
    /// None of these short forms may co-occur.
    pub excludes: &'static [&'static str],
}

impl Token {
    /// A token without constraints.
    pub const fn new(short_form: &'static str, long_form: &'static str) -> Self {
        Self {
            short_form,
            long_form,
            requires: &[],
            excludes: &[],
        }
    }

    /// Restricts the token to sequences containing one of `short_forms`.
    pub const fn requires(self, short_forms: &'static [&'static str]) -> Self {
        Self {
            requires: short_forms,
            ..self
        }
    }

    /// Forbids the token in sequences containing any of `short_forms`.
    pub const fn excludes(self, short_forms: &'static [&'static str]) -> Self {
        Self {
            excludes: short_forms,
            ..self
        }
    }
}

/// One axis of the alias grammar (base, operation, resource, flags...).
#[derive(Debug, Clone, Copy)]
pub struct TokenGroup {
    /// Human readable name, used in logs.
    pub name: &'static str,
    /// Tokens in declaration order. Short forms are unique within a group.
    pub tokens: &'static [Token],
    /// When false, exactly one token of the group must appear.
    pub optional: bool,
    pub arity: Arity,
    pub placement: Placement,
}

impl TokenGroup {
    /// Returns true when `token` is one of this group's tokens.
    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

/// An ordered list of tokens drawn from the groups in declaration order.
pub type Sequence<'a> = Vec<&'a Token>;

/// A rendered alias: the key the user types and the command it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub key: String,
    pub command: String,
}
