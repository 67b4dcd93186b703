//! Generates kubectl shell aliases by exhaustively combining a small,
//! constraint-checked vocabulary of commands, resources and flags.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
