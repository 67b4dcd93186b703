// src/system/shell.rs

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::models::Alias;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShellError {
    #[error("Shell \"{shell}\" not supported. Options are {options}")]
    Unsupported { shell: String, options: String },
}

/// A shell whose alias-declaration syntax we can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    Bash,
    Zsh,
    Fish,
}

impl ShellDialect {
    /// Every supported dialect, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Bash, Self::Zsh, Self::Fish];

    /// The name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
        }
    }

    /// Formats one alias declaration, without a trailing newline.
    ///
    /// fish gets an abbreviation instead of an alias so the expansion is
    /// visible on the command line.
    pub fn format_alias(self, alias: &Alias) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("alias {}='{}'", alias.key, alias.command),
            Self::Fish => format!("abbr --add {} \"{}\"", alias.key, alias.command),
        }
    }

    fn options() -> String {
        Self::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ShellDialect {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ShellError::Unsupported {
                shell: s.to_string(),
                options: Self::options(),
            })
    }
}

impl fmt::Display for ShellDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
