//! The tag hierarchy
//!
//! Recipes always reference `notreepunching:{tag}`, which collects the vanilla items, the
//! optional `c:` and `forge:` tags, and the `notreepunching:h/{tag}` helper tag holding the
//! mod's own items. Loader specific tags only ever reference the helper tags.

use log::info;
use ntp_datapack::ResourceManager;

use crate::assets::TOOL_METALS;

const SHULKER_COLORS: [&str; 16] = [
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "light_gray",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

const LOOSE_ROCK_PLACEABLE_ON: [&str; 14] = [
    "grass_block",
    "dirt",
    "coarse_dirt",
    "gravel",
    "sand",
    "red_sand",
    "terracotta",
    "stone",
    "andesite",
    "diorite",
    "granite",
    "sandstone",
    "red_sandstone",
    "podzol",
];

pub fn do_tags(forge: &mut ResourceManager, fabric: &mut ResourceManager, common: &mut ResourceManager) {
    info!("Generating tags");

    // Helper tags
    common.item_tag("h/string", &["notreepunching:plant_string"]);
    block_item_tag(common, "h/cobblestone", &[
        "notreepunching:andesite_cobblestone",
        "notreepunching:granite_cobblestone",
        "notreepunching:diorite_cobblestone",
    ]);

    for metal in TOOL_METALS {
        common.item_tag("h/mattocks", &[&format!("notreepunching:{}_mattock", metal)]);
        common.item_tag("h/knives", &[&format!("notreepunching:{}_knife", metal)]);
        common.item_tag("h/saws", &[&format!("notreepunching:{}_saw", metal)]);
    }

    common.item_tag("h/weak_saws", &["notreepunching:flint_axe"]);
    common.item_tag("h/knives", &["notreepunching:flint_knife"]);

    // Tags used by recipes
    common.item_tag("sticks", &[
        "minecraft:stick",
        "#c:wood_sticks?",
        "#c:wooden_rods?",
        "#forge:rods/wooden?",
    ]);
    common.item_tag("string", &[
        "minecraft:string",
        "#notreepunching:h/string",
        "#c:string?",
        "#forge:string?",
    ]);

    common.item_tag("mattocks", &[
        "#notreepunching:h/mattocks",
        "#c:mattocks?",
        "#forge:tools/mattocks?",
    ]);
    common.item_tag("knives", &[
        "#notreepunching:h/knives",
        "#c:knives?",
        "#forge:tools/knives?",
    ]);
    common.item_tag("saws", &["#notreepunching:h/saws", "#c:saws?", "#forge:tools/saws?"]);
    common.item_tag("weak_saws", &["#notreepunching:h/weak_saws"]);

    common.item_tag("iron_ingots", &[
        "minecraft:iron_ingot",
        "#c:iron_ingots?",
        "#forge:ingots/iron?",
    ]);
    common.item_tag("gold_ingots", &[
        "minecraft:gold_ingot",
        "#c:gold_ingots?",
        "#forge:ingots/gold?",
    ]);
    common.item_tag("diamond_ingots", &[
        "minecraft:diamond",
        "#c:diamonds?",
        "#forge:ingots/diamond?",
    ]);

    common.item_tag("shears", &["minecraft:shears", "#c:shears?", "#forge:shears?"]);

    // Loader tags
    fabric.item_tag("c:string", &["#notreepunching:h/string"]);
    block_item_tag(fabric, "c:cobblestone", &["#notreepunching:h/cobblestone"]);
    block_item_tag(fabric, "c:cobblestones", &["#notreepunching:h/cobblestone"]);

    forge.item_tag("forge:string", &["#notreepunching:h/string"]);
    block_item_tag(forge, "forge:cobblestone", &["#notreepunching:h/cobblestone"]);

    // Vanilla tags
    common.item_tag("minecraft:stone_tool_materials", &["#notreepunching:h/cobblestone"]);
    common.item_tag("minecraft:stone_crafting_materials", &["#notreepunching:h/cobblestone"]);

    // Tags read by the mod
    common.block_tag("needs_with_flint_tool", &[]);
    common.block_tag("mineable_with_mattock", &[
        "#minecraft:mineable/shovel",
        "#minecraft:mineable/hoe",
        "#minecraft:mineable/axe",
    ]);
    common.block_tag("mineable", &[
        "#notreepunching:mineable_with_mattock",
        "#minecraft:mineable/pickaxe",
        "#minecraft:mineable/shovel",
        "#minecraft:mineable/hoe",
        "#minecraft:mineable/axe",
        "#minecraft:sword_efficient",
    ]);
    common.item_tag("pickaxe_tools", &[]);
    common.item_tag("axe_tools", &["#notreepunching:mattocks"]);
    common.item_tag("shovel_tools", &["#notreepunching:mattocks"]);
    common.item_tag("hoe_tools", &["#notreepunching:mattocks"]);
    common.item_tag("sharp_tools", &["#notreepunching:knives"]);

    common.block_tag("plant_fiber_sources", &["minecraft:grass", "minecraft:tall_grass"]);

    common
        .block("minecraft:gravel")
        .with_tag("always_breakable")
        .with_tag("always_drops");

    common.item_tag("weak_saws", &[
        "minecraft:iron_axe",
        "minecraft:golden_axe",
        "minecraft:diamond_axe",
        "minecraft:netherite_axe",
    ]);

    common.block_tag("always_breakable", &[
        "#minecraft:leaves",
        "minecraft:gravel",
        "#minecraft:dirt",
        "minecraft:grass",
        "minecraft:podzol",
        "minecraft:coarse_dirt",
        "#minecraft:sand",
        "#notreepunching:loose_rocks",
        "#minecraft:snow",
    ]);
    common.block_tag("always_drops", &[
        "#minecraft:leaves",
        "minecraft:gravel",
        "#minecraft:dirt",
        "minecraft:grass",
        "minecraft:podzol",
        "minecraft:coarse_dirt",
        "#minecraft:sand",
        "#notreepunching:loose_rocks",
    ]);

    common.item_tag("fire_starter_logs", &["#minecraft:logs", "#minecraft:planks"]);
    common.item_tag("fire_starter_kindling", &[
        "#notreepunching:sticks",
        "#minecraft:saplings",
        "#minecraft:leaves",
        "minecraft:string",
        "#notreepunching:string",
        "notreepunching:plant_fiber",
    ]);
    common.item_tag("fire_starter_soul_fire_catalyst", &["minecraft:soul_sand", "minecraft:soul_soil"]);

    let ceramics = [
        "notreepunching:ceramic_large_vessel",
        "notreepunching:ceramic_small_vessel",
        "notreepunching:ceramic_bucket",
        "minecraft:flower_pot",
    ];
    let pottery = [
        "minecraft:clay",
        "notreepunching:clay_worked",
        "notreepunching:clay_large_vessel",
        "notreepunching:clay_small_vessel",
        "notreepunching:clay_bucket",
        "notreepunching:clay_flower_pot",
    ];

    common.item_tag("ceramics", &ceramics);
    common.item_tag("pottery", &pottery);

    common.block_tag("pottery", &pottery);
    common.block_tag("minecraft:mineable/shovel", &pottery);

    let mut blacklisted = vec![
        "notreepunching:ceramic_small_vessel".to_owned(),
        "notreepunching:ceramic_large_vessel".to_owned(),
        "minecraft:shulker_box".to_owned(),
    ];
    blacklisted.extend(
        SHULKER_COLORS
            .iter()
            .map(|color| format!("minecraft:{}_shulker_box", color)),
    );
    for item in &blacklisted {
        common
            .item(item)
            .with_tag("large_vessel_blacklist")
            .with_tag("small_vessel_blacklist");
    }

    common.item("minecraft:flint").with_tag("notreepunching:flint_knappable");
    for block in LOOSE_ROCK_PLACEABLE_ON {
        common
            .block(&format!("minecraft:{}", block))
            .with_tag("notreepunching:loose_rock_placeable_on");
    }
}

/// Declares the same values in a block tag and an item tag of the same name
pub fn block_item_tag(rm: &mut ResourceManager, name: &str, values: &[&str]) {
    rm.item_tag(name, values);
    rm.block_tag(name, values);
}

#[cfg(test)]
fn tag_values(rm: &ResourceManager, kind: ntp_datapack::data::tags::TagKind, name: &str) -> String {
    serde_json::to_string(&rm.get_tag(kind, name).unwrap().values).unwrap()
}

#[test]
fn helper_tags_reference_each_other() {
    use ntp_datapack::data::tags::TagKind;

    let mut forge = ResourceManager::new("notreepunching", "unused");
    let mut fabric = ResourceManager::new("notreepunching", "unused");
    let mut common = ResourceManager::new("notreepunching", "unused");
    do_tags(&mut forge, &mut fabric, &mut common);

    assert_eq!(
        tag_values(&common, TagKind::Item, "knives"),
        r##"["#notreepunching:h/knives",{"id":"#c:knives","required":false},{"id":"#forge:tools/knives","required":false}]"##
    );
    assert_eq!(
        tag_values(&common, TagKind::Item, "h/knives"),
        r#"["notreepunching:iron_knife","notreepunching:gold_knife","notreepunching:diamond_knife","notreepunching:netherite_knife","notreepunching:flint_knife"]"#
    );
    assert_eq!(
        tag_values(&common, TagKind::Item, "weak_saws"),
        r##"["#notreepunching:h/weak_saws","minecraft:iron_axe","minecraft:golden_axe","minecraft:diamond_axe","minecraft:netherite_axe"]"##
    );

    assert!(common.get_tag(TagKind::Block, "needs_with_flint_tool").unwrap().values.is_empty());
    assert!(common.get_tag(TagKind::Block, "minecraft:mineable/shovel").is_some());

    // Loader tags only live in their own tree
    assert!(fabric.get_tag(TagKind::Block, "c:cobblestones").is_some());
    assert!(fabric.get_tag(TagKind::Item, "forge:string").is_none());
    assert!(forge.get_tag(TagKind::Item, "forge:string").is_some());
    assert!(common.get_tag(TagKind::Item, "c:string").is_none());
}

#[test]
fn vessel_blacklist_covers_every_shulker_box() {
    use ntp_datapack::data::tags::TagKind;

    let mut forge = ResourceManager::new("notreepunching", "unused");
    let mut fabric = ResourceManager::new("notreepunching", "unused");
    let mut common = ResourceManager::new("notreepunching", "unused");
    do_tags(&mut forge, &mut fabric, &mut common);

    for tag in ["large_vessel_blacklist", "small_vessel_blacklist"] {
        assert_eq!(common.get_tag(TagKind::Item, tag).unwrap().values.len(), 19);
    }
}
