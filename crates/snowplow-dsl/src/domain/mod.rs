//! Kind-to-builder mapping.

pub mod builder;
