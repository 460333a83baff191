//! Stores the definitions of the formats in the `assets` folder of a resource tree
pub mod blockstate;
pub mod model;
