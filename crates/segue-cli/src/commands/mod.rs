//! CLI command implementations.

pub mod add;
pub mod components;
pub mod export;
pub mod list;
pub mod longest;
