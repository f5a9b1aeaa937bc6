//! Command modules
//!
//! - `converter`: conversion, catalog, history and session commands
//! - `system`: logging from the presentation layer
//! - `settings`: settings access

pub mod converter;
pub mod settings;
pub mod system;
