//! Converter features
//!
//! Each feature owns its domain logic; session state and the command layer
//! call into them with primitive inputs.

pub mod unit_converter;
