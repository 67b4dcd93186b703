//! # System Interaction Layer
//!
//! The boundary between the generator and the user's environment.
//!
//! ## Modules
//!
//! - **`shell`**: The supported shell dialects and their alias-declaration syntax.
//! - **`header`**: Loading and printing the license header that precedes
//!   generated alias files.

pub mod header;
pub mod shell;
