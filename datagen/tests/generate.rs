use std::{fs, path::Path};

use ntp_datagen::{config::Config, run};
use serde_json::Value;

fn config(root: &Path) -> Config {
    Config {
        common_dir: root.join("Common"),
        forge_dir: root.join("Forge"),
        fabric_dir: root.join("Fabric"),
        ..Config::default()
    }
}

fn read_json(path: &Path) -> Value {
    let json = fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    serde_json::from_str(&json).unwrap()
}

#[test]
fn generates_all_three_trees() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    run(&config).unwrap();

    let common = &config.common_dir;
    let lang = read_json(&common.join("assets/notreepunching/lang/en_us.json"));
    assert_eq!(lang["block.notreepunching.andesite_cobblestone"], "Andesite Cobblestone");
    assert_eq!(lang["notreepunching.advancements.story.root.title"], "No Tree Punching");
    assert_eq!(lang["__comment__"], ntp_datapack::GENERATED_COMMENT);

    let pickaxe = read_json(&common.join("data/minecraft/tags/blocks/mineable/pickaxe.json"));
    assert!(pickaxe["values"]
        .as_array()
        .unwrap()
        .contains(&Value::from("notreepunching:andesite_cobblestone")));

    let stick = read_json(&common.join("data/minecraft/recipes/stick.json"));
    assert_eq!(stick["type"], "notreepunching:empty");
    assert_eq!(stick.as_object().unwrap().len(), 2);

    let stairs = read_json(&common.join("assets/notreepunching/blockstates/granite_cobblestone_stairs.json"));
    assert_eq!(stairs["variants"].as_object().unwrap().len(), 40);

    assert!(common
        .join("data/notreepunching/worldgen/placed_feature/loose_rocks.json")
        .is_file());
    assert!(config
        .forge_dir
        .join("data/notreepunching/forge/biome_modifier/add_loose_rocks.json")
        .is_file());
    assert!(config.forge_dir.join("data/forge/tags/items/string.json").is_file());
    assert!(config.fabric_dir.join("data/c/tags/blocks/cobblestones.json").is_file());
    assert!(!config.forge_dir.join("assets").exists());
}

#[test]
fn advancements_on_disk_are_consistent() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    run(&config).unwrap();

    let story = config.common_dir.join("data/notreepunching/advancements/story");
    let mut count = 0;
    for entry in fs::read_dir(&story).unwrap() {
        let advancement = read_json(&entry.unwrap().path());
        let criteria = advancement["criteria"].as_object().unwrap();
        if let Some(groups) = advancement["requirements"].as_array() {
            for name in groups.iter().flat_map(|group| group.as_array().unwrap()) {
                assert!(criteria.contains_key(name.as_str().unwrap()));
            }
        }
        if let Some(parent) = advancement["parent"].as_str() {
            let path = parent.trim_start_matches("notreepunching:");
            assert!(config
                .common_dir
                .join(format!("data/notreepunching/advancements/{}.json", path))
                .is_file());
        }
        count += 1;
    }
    assert_eq!(count, 13);
}

#[test]
fn rerun_cleans_stale_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    run(&config).unwrap();

    let stale = config.common_dir.join("data/notreepunching/recipes/stale.json");
    fs::copy(
        config.common_dir.join("data/notreepunching/recipes/plant_string.json"),
        &stale,
    )
    .unwrap();
    let handwritten = config.common_dir.join("data/notreepunching/recipes/handwritten.json");
    fs::write(&handwritten, r#"{"type":"minecraft:crafting_shapeless"}"#).unwrap();

    run(&config).unwrap();
    assert!(!stale.exists());
    assert!(handwritten.is_file());
    assert!(config
        .common_dir
        .join("data/notreepunching/recipes/plant_string.json")
        .is_file());
}

#[test]
fn compact_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        pretty_print: false,
        ..config(dir.path())
    };
    run(&config).unwrap();

    let json = fs::read_to_string(
        config
            .common_dir
            .join("data/notreepunching/tags/items/weak_saws.json"),
    )
    .unwrap();
    assert!(!json.contains('\n'));
    assert!(json.starts_with(r#"{"__comment__":"#));
}
