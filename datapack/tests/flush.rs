use std::fs;

use ntp_datapack::{
    clean_generated_resources,
    data::loot_tables::LootTableEntry,
    LangBuffer,
    ResourceManager,
    COMMENT_KEY,
    GENERATED_COMMENT,
};
use serde_json::Value;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn flush_writes_expected_paths() {
    let dir = tempfile::tempdir().unwrap();
    let mut rm = ResourceManager::new("notreepunching", dir.path());

    rm.blockstate("stone_loose_rock")
        .with_cube_all_model()
        .with_item_model()
        .with_tag("loose_rocks")
        .with_self_loot();
    rm.item_model("flint_shard").with_tag("h/flint");
    rm.crafting_shapeless("plant_string", &["notreepunching:plant_fiber"; 3], "notreepunching:plant_string")
        .with_advancement("notreepunching:plant_fiber");

    let stats = rm.flush().unwrap();
    assert!(rm.is_empty());

    let root = dir.path();
    for path in [
        "assets/notreepunching/blockstates/stone_loose_rock.json",
        "assets/notreepunching/models/block/stone_loose_rock.json",
        "assets/notreepunching/models/item/stone_loose_rock.json",
        "assets/notreepunching/models/item/flint_shard.json",
        "data/notreepunching/tags/blocks/loose_rocks.json",
        "data/notreepunching/tags/items/h/flint.json",
        "data/notreepunching/loot_tables/blocks/stone_loose_rock.json",
        "data/notreepunching/recipes/plant_string.json",
        "data/notreepunching/advancements/recipes/plant_string.json",
    ] {
        assert!(root.join(path).is_file(), "missing {}", path);
    }
    assert_eq!(stats.written, 9);

    let recipe = read_json(&root.join("data/notreepunching/recipes/plant_string.json"));
    let (first_key, _) = recipe.as_object().unwrap().iter().next().unwrap();
    assert_eq!(first_key, COMMENT_KEY);
    assert_eq!(recipe["type"], "minecraft:crafting_shapeless");
}

#[test]
fn unchanged_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();

    let mut rm = ResourceManager::new("notreepunching", dir.path());
    rm.block_tag("pottery", &["notreepunching:clay_worked"]);
    assert_eq!(rm.flush().unwrap().written, 1);

    rm.block_tag("pottery", &["notreepunching:clay_worked"]);
    let stats = rm.flush().unwrap();
    assert_eq!((stats.written, stats.unchanged), (0, 1));
}

#[test]
fn lang_is_flushed_once() {
    let dir = tempfile::tempdir().unwrap();
    let rm = ResourceManager::new("notreepunching", dir.path()).with_pretty_print(false);
    let mut lang = LangBuffer::new();
    lang.insert("itemGroup.notreepunching.items", "No Tree Punching");

    rm.flush_lang(&mut lang).unwrap();
    assert!(lang.is_empty());

    let path = dir.path().join("assets/notreepunching/lang/en_us.json");
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        format!(
            r#"{{"__comment__":"{}","itemGroup.notreepunching.items":"No Tree Punching"}}"#,
            GENERATED_COMMENT
        )
    );
}

#[test]
fn clean_only_removes_generated_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut rm = ResourceManager::new("notreepunching", dir.path());
    rm.block_loot("minecraft:grass", vec![vec![LootTableEntry::item("minecraft:grass")]]);
    rm.flush().unwrap();

    let handwritten = dir.path().join("data/notreepunching/handwritten.json");
    fs::create_dir_all(handwritten.parent().unwrap()).unwrap();
    fs::write(&handwritten, r#"{"type":"minecraft:crafting_shaped"}"#).unwrap();
    let readme = dir.path().join("README.txt");
    fs::write(&readme, GENERATED_COMMENT).unwrap();

    assert_eq!(clean_generated_resources(dir.path()).unwrap(), 1);
    assert!(handwritten.is_file());
    assert!(readme.is_file());
    assert!(!dir.path().join("data/minecraft").exists());
}

#[test]
fn clean_keeps_empty_handmade_directories() {
    let dir = tempfile::tempdir().unwrap();
    let mut rm = ResourceManager::new("notreepunching", dir.path());
    rm.block_loot("minecraft:grass", vec![vec![LootTableEntry::item("minecraft:grass")]]);
    rm.flush().unwrap();

    let textures = dir.path().join("assets/notreepunching/textures/block");
    fs::create_dir_all(&textures).unwrap();

    assert_eq!(clean_generated_resources(dir.path()).unwrap(), 1);
    assert!(textures.is_dir());
    assert!(!dir.path().join("data/minecraft/loot_tables").exists());
}

#[test]
fn clean_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(clean_generated_resources(dir.path().join("missing")).unwrap(), 0);
}
