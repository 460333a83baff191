//! Generates the resources of the No Tree Punching mod
//!
//! Three resource trees are written. Everything lives in the common tree except for the tags and
//! biome modifiers only one mod loader understands. Each emitter adds its records to the
//! resource managers, and nothing is written until all of them have run.

pub mod advancements;
pub mod assets;
pub mod config;
pub mod lang;
pub mod loot_tables;
pub mod recipes;
pub mod tags;
pub mod world_gen;

use std::path::Path;

use log::info;
use ntp_datapack::{clean_generated_resources, DataGenError, LangBuffer, ResourceManager};

use crate::config::Config;

/// Runs every emitter and writes the results to the trees named in `config`
pub fn run(config: &Config) -> Result<(), DataGenError> {
    let manager = |dir: &Path| {
        ResourceManager::new(&config.mod_id, dir).with_pretty_print(config.pretty_print)
    };
    let mut fabric = manager(&config.fabric_dir);
    let mut forge = manager(&config.forge_dir);
    let mut common = manager(&config.common_dir);
    let mut lang = LangBuffer::new();

    if config.clean {
        for rm in [&fabric, &forge, &common] {
            clean_generated_resources(rm.resource_dir())?;
        }
    }

    assets::do_assets(&mut common, &mut lang);
    advancements::do_advancements(&mut common, &mut lang);
    tags::do_tags(&mut forge, &mut fabric, &mut common);
    recipes::do_recipes(&mut common);
    loot_tables::do_loot_tables(&mut common);
    world_gen::do_world_gen(&mut forge, &mut common)?;

    // Both loaders read their translations from the common tree
    common.flush_lang(&mut lang)?;
    for rm in [&mut common, &mut forge, &mut fabric] {
        rm.flush()?;
    }

    info!("Finished generating resources");
    Ok(())
}
