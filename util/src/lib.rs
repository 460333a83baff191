#![warn(missing_docs)]

//! Provides generic utilities for the No Tree Punching data generator.

/// Configures log4rs to copy minecraft's logging style.
pub mod logging;
mod location;

pub use location::ResourceLocation;
