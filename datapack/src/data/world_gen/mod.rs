pub mod biome_modifier;
pub mod features;
