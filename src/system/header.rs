// src/system/header.rs

use std::{
    borrow::Cow,
    fs,
    io::{self, Write},
    path::Path,
};

use clap::ValueEnum;
use dialoguer::console::Term;
use thiserror::Error;

/// The license text prepended to generated files.
pub const DEFAULT_LICENSE_HEADER: &str = include_str!("../../license_header");

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Could not read license header from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// When the license header is printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Only when stdout is not an interactive terminal (i.e. redirected to a file).
    #[default]
    Auto,
    Always,
    Never,
}

impl HeaderMode {
    pub fn should_print(self, stdout_is_terminal: bool) -> bool {
        match self {
            Self::Auto => !stdout_is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

pub fn stdout_is_terminal() -> bool {
    Term::stdout().is_term()
}

/// Loads the header text, from `path` when given, else the built-in one.
pub fn load_header(path: Option<&Path>) -> Result<Cow<'static, str>, HeaderError> {
    match path {
        None => Ok(Cow::Borrowed(DEFAULT_LICENSE_HEADER)),
        Some(p) => {
            log::debug!("Reading license header from {}", p.display());
            fs::read_to_string(p)
                .map(Cow::Owned)
                .map_err(|source| HeaderError::Read {
                    path: p.display().to_string(),
                    source,
                })
        }
    }
}

/// Writes the header verbatim, followed by one blank separator line.
pub fn write_header(out: &mut impl Write, header: &str) -> io::Result<()> {
    write!(out, "{}", header)?;
    if !header.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out)
}
