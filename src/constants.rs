// src/constants.rs

/// The shell dialect used when none is given on the command line.
pub const DEFAULT_SHELL: &str = "bash";
