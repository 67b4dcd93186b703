//! # Handler for alias generation
//!
//! The only action of `kalias`: validate the requested shell, fold the kubectl
//! vocabulary into every valid token sequence and print one alias per sequence.
//!
//! ## Core Logic
//!
//! - **Fail Fast**: The shell dialect and the license header are resolved before
//!   any generation work, so configuration errors never produce partial output.
//! - **Single Pass**: Sequences are built in memory by the combiner, then
//!   rendered once, in order, to a buffered stdout.
//! - **Conflicts**: Duplicate alias keys are reported on stderr and do not
//!   affect the exit status.

use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};

use crate::{
    cli::Cli,
    core::{
        combiner,
        renderer::{AliasRenderer, RenderSummary},
        table,
    },
    models::TokenGroup,
    system::{
        header::{self, HeaderMode},
        shell::ShellDialect,
    },
};

/// The main handler, called by the binary with the parsed CLI.
pub fn handle(cli: &Cli) -> Result<()> {
    let dialect: ShellDialect = cli.shell.parse()?;
    let header = resolve_header(cli.header_mode, cli.header.as_deref())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut diag = stderr.lock();

    let summary = generate(
        table::KUBECTL,
        dialect,
        header.as_deref(),
        &mut out,
        &mut diag,
    )?;
    out.flush().context("Failed to flush generated aliases")?;

    log::debug!(
        "Generated {} {} aliases ({} conflicts)",
        summary.rendered,
        dialect,
        summary.conflicts
    );
    Ok(())
}

/// Returns the header to print, or `None` when the mode says not to.
fn resolve_header(mode: HeaderMode, path: Option<&Path>) -> Result<Option<String>> {
    if !mode.should_print(header::stdout_is_terminal()) {
        return Ok(None);
    }
    Ok(Some(header::load_header(path)?.into_owned()))
}

/// Generates and writes the aliases for `groups`.
///
/// # Arguments
/// * `groups` - The grammar; the first group is the base command.
/// * `dialect` - The shell syntax to emit.
/// * `header` - Text printed verbatim before the aliases, if any.
/// * `out` - Receives the header and one line per alias.
/// * `diag` - Receives one warning per duplicate alias key.
pub fn generate(
    groups: &[TokenGroup],
    dialect: ShellDialect,
    header: Option<&str>,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<RenderSummary> {
    let base = groups
        .first()
        .ok_or_else(|| anyhow!("The alias grammar has no base command group"))?;

    let sequences = combiner::build(groups);
    log::debug!("Built {} valid token sequences", sequences.len());

    if let Some(text) = header {
        header::write_header(out, text).context("Failed to write license header")?;
    }

    let mut renderer = AliasRenderer::new(dialect, base);
    for sequence in &sequences {
        renderer
            .render(sequence, out, diag)
            .context("Failed to write alias")?;
    }
    Ok(renderer.summary())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dialect: ShellDialect, header: Option<&str>) -> (String, String, RenderSummary) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let summary = generate(table::KUBECTL, dialect, header, &mut out, &mut diag).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
            summary,
        )
    }

    #[test]
    fn test_output_starts_with_first_operation() {
        let (out, _, _) = run(ShellDialect::Bash, None);
        assert_eq!(out.lines().next(), Some("alias kg='k get'"));
        assert!(!out.contains("alias k='k'"));
    }

    #[test]
    fn test_header_precedes_aliases() {
        let (out, _, _) = run(ShellDialect::Zsh, Some("# header\n"));
        assert!(out.starts_with("# header\n\nalias kg='k get'\n"));
    }

    #[test]
    fn test_fish_output() {
        let (out, _, _) = run(ShellDialect::Fish, None);
        assert!(out.contains("abbr --add kgpo \"k get pods\"\n"));
        assert!(out.lines().all(|l| l.starts_with("abbr --add ")));
    }

    #[test]
    fn test_empty_grammar_is_an_error() {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        assert!(generate(&[], ShellDialect::Bash, None, &mut out, &mut diag).is_err());
    }
}
