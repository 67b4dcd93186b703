// src/core/mod.rs

pub mod combiner;
pub mod constraints;
pub mod renderer;
pub mod subsets;
pub mod table;
