use std::path::PathBuf;

use clap::Parser;

use crate::{constants::DEFAULT_SHELL, system::header::HeaderMode};

pub mod handlers;

/// kalias: prints every kubectl alias the vocabulary allows, in your shell's syntax.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = t!("cli.about"),
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {
    /// Target shell dialect: bash, zsh or fish.
    ///
    /// Kept as a plain string so an unknown value is reported by our own
    /// configuration error rather than clap's.
    #[arg(default_value = DEFAULT_SHELL)]
    pub shell: String,

    /// Read the license header from this file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// When to print the license header before the aliases.
    #[arg(long, value_enum, default_value_t = HeaderMode::Auto)]
    pub header_mode: HeaderMode,
}
