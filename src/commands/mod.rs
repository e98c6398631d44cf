//! CLI command implementations.

pub mod config;
pub mod ingredients;
pub mod modes;
pub mod recipe;
pub mod suggest;
