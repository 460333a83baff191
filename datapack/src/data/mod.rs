//! Stores the definitions of all the formats in the `data` folder of a resource tree
pub mod advancement;
pub mod datatypes;
pub mod loot_tables;
pub mod recipe;
pub mod tags;
mod world_gen;
pub use world_gen::*;
