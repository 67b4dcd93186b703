//! # Alias Renderer
//!
//! Turns finished token sequences into alias declarations. The alias key is
//! the concatenation of the tokens' short forms and the command is their long
//! forms joined by spaces, both in the sequence's own order.
//!
//! Keys are tracked across the whole run. A repeated key is reported on the
//! diagnostic stream but the alias is still written: whichever declaration
//! the shell reads last wins, and that is the user's call, not ours.

use std::{collections::HashSet, io::Write};

use crate::{
    models::{Alias, Token, TokenGroup},
    system::shell::ShellDialect,
};

/// Counters collected while rendering, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
    pub conflicts: usize,
}

/// Builds the alias key and command for a sequence.
pub fn alias_for(sequence: &[&Token]) -> Alias {
    Alias {
        key: sequence.iter().map(|t| t.short_form).collect(),
        command: sequence
            .iter()
            .map(|t| t.long_form)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// A sequence made only of base-group tokens is the bare base command,
/// which the user's shell already provides. It never becomes an alias.
pub fn is_bare_base_command(sequence: &[&Token], base: &TokenGroup) -> bool {
    sequence.iter().all(|t| base.contains(t))
}

/// Stateful renderer for one generation run.
#[derive(Debug)]
pub struct AliasRenderer<'g> {
    dialect: ShellDialect,
    base: &'g TokenGroup,
    seen: HashSet<String>,
    summary: RenderSummary,
}

impl<'g> AliasRenderer<'g> {
    pub fn new(dialect: ShellDialect, base: &'g TokenGroup) -> Self {
        Self {
            dialect,
            base,
            seen: HashSet::new(),
            summary: RenderSummary::default(),
        }
    }

    /// Writes the declaration for `sequence` to `out`, reporting a key
    /// conflict to `diag` first when the key was already emitted.
    pub fn render(
        &mut self,
        sequence: &[&Token],
        out: &mut impl Write,
        diag: &mut impl Write,
    ) -> std::io::Result<()> {
        if is_bare_base_command(sequence, self.base) {
            self.summary.skipped += 1;
            return Ok(());
        }

        let alias = alias_for(sequence);
        if self.seen.contains(&alias.key) {
            self.summary.conflicts += 1;
            log::debug!("Duplicate alias key '{}' for '{}'", alias.key, alias.command);
            writeln!(diag, t!("generate.warning.conflict"), alias = alias.key)?;
        }

        writeln!(out, "{}", self.dialect.format_alias(&alias))?;
        self.seen.insert(alias.key);
        self.summary.rendered += 1;
        Ok(())
    }

    pub fn summary(&self) -> RenderSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Arity, Placement};

    static BASE_TOKENS: &[Token] = &[Token::new("k", "k")];
    static BASE: TokenGroup = TokenGroup {
        name: "base",
        tokens: BASE_TOKENS,
        optional: false,
        arity: Arity::ExactlyOne,
        placement: Placement::Positional,
    };

    const K: Token = Token::new("k", "k");
    const GET: Token = Token::new("g", "get");
    const PODS: Token = Token::new("po", "pods");
    const GP: Token = Token::new("gp", "get pods");
    const EMPTY: Token = Token::new("", "--v=9");

    fn render_all(sequences: &[Vec<&Token>]) -> (String, String, RenderSummary) {
        let mut renderer = AliasRenderer::new(ShellDialect::Bash, &BASE);
        let mut out = Vec::new();
        let mut diag = Vec::new();
        for sequence in sequences {
            renderer.render(sequence, &mut out, &mut diag).unwrap();
        }
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
            renderer.summary(),
        )
    }

    #[test]
    fn test_alias_key_follows_sequence_order() {
        assert_eq!(alias_for(&[&K, &GET, &PODS]).key, "kgpo");
        assert_eq!(alias_for(&[&K, &PODS, &GET]).key, "kpog");
        assert_eq!(alias_for(&[&K, &GET, &PODS]).command, "k get pods");
    }

    #[test]
    fn test_empty_short_form_contributes_nothing_to_key() {
        let alias = alias_for(&[&K, &GET, &EMPTY]);
        assert_eq!(alias.key, "kg");
        assert_eq!(alias.command, "k get --v=9");
    }

    #[test]
    fn test_bare_base_command_is_skipped() {
        let (out, diag, summary) = render_all(&[vec![&K], vec![&K, &GET]]);
        assert_eq!(out, "alias kg='k get'\n");
        assert!(diag.is_empty());
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.rendered, 1);
    }

    #[test]
    fn test_conflicts_are_reported_and_still_emitted() {
        let (out, diag, summary) = render_all(&[
            vec![&K, &GET, &PODS],
            vec![&K, &GP, &PODS],
            vec![&K, &GP, &PODS],
        ]);
        assert_eq!(
            out,
            "alias kgpo='k get pods'\nalias kgppo='k get pods pods'\nalias kgppo='k get pods pods'\n"
        );
        assert_eq!(diag, "Alias conflict detected: kgppo\n");
        assert_eq!(summary.conflicts, 1);
    }

    #[test]
    fn test_conflict_reported_once_per_duplicate_occurrence() {
        const G: Token = Token::new("g", "get");
        const PO: Token = Token::new("po", "pods");
        const GPO: Token = Token::new("gpo", "get --pods");
        let (out, diag, summary) = render_all(&[
            vec![&K, &G, &PO],
            vec![&K, &GPO],
            vec![&K, &GP, &Token::new("o", "-o")],
        ]);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(
            diag,
            "Alias conflict detected: kgpo\nAlias conflict detected: kgpo\n"
        );
        assert_eq!(summary.conflicts, 2);
    }
}
