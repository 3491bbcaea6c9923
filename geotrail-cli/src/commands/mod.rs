//! CLI command implementations.

pub mod common;
pub mod config;
pub mod extract;
pub mod list_regions;
pub mod regions;
pub mod sample;
pub mod validate;
