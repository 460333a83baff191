use log::info;
use ntp_datapack::{
    assets::model::Model,
    data::loot_tables::{copy_block_entity_name, copy_block_entity_nbt, LootTableEntry},
    LangBuffer,
    ResourceLocation,
    ResourceManager,
};

use crate::lang::lang;

pub const COBBLESTONES: [&str; 3] = ["granite", "andesite", "diorite"];
pub const LOOSE_ROCKS: [&str; 6] = ["granite", "andesite", "diorite", "stone", "sandstone", "red_sandstone"];
pub const POTTERY: [&str; 5] = ["worked", "large_vessel", "small_vessel", "bucket", "flower_pot"];
pub const TOOL_METALS: [&str; 4] = ["iron", "gold", "diamond", "netherite"];
pub const FLINT_TOOLS: [&str; 5] = ["axe", "pickaxe", "shovel", "hoe", "knife"];

const MISC_ITEMS: [&str; 9] = [
    "flint_shard",
    "plant_fiber",
    "plant_string",
    "clay_brick",
    "ceramic_small_vessel",
    "ceramic_bucket",
    "ceramic_water_bucket",
    "clay_tool",
    "fire_starter",
];

/// Models, blockstates, block loot and display names of every block and item
pub fn do_assets(common: &mut ResourceManager, lang_buffer: &mut LangBuffer) {
    info!("Generating assets");

    lang_buffer.extend([
        ("itemGroup.notreepunching.items", "No Tree Punching"),
        ("notreepunching.tooltip.small_vessel_more", "%d More..."),
        ("notreepunching.block_entity.large_vessel", "Large Vessel"),
        ("notreepunching.subtitle.knapping", "Rock smacks"),
    ]);

    for stone in COBBLESTONES {
        stone_cobblestone(common, lang_buffer, stone);
    }

    for stone in LOOSE_ROCKS {
        let name = format!("{}_loose_rock", stone);
        let texture = ResourceLocation::minecraft(&format!("block/{}", stone));
        common
            .blockstate(&name)
            .with_block_model(Model::new("notreepunching:block/loose_rock").with_texture("all", &texture))
            .with_self_loot()
            .with_lang(lang_buffer, &lang("%s loose rock", &[stone]))
            .with_tag("loose_rocks")
            .with_item_tag("loose_rocks")
            .with_tag("minecraft:mineable/pickaxe");

        // Placed as blocks but held as flat items
        common.item_model(&name);
    }

    let clay = ResourceLocation::minecraft("block/clay");
    for pottery in POTTERY {
        let parent = format!("notreepunching:block/pottery_{}", pottery);
        let display = match pottery {
            "worked" => lang("worked clay", &[]),
            _ => lang("clay %s", &[pottery]),
        };
        common
            .blockstate(&format!("clay_{}", pottery))
            .with_block_model(Model::new(&parent).with_texture("all", &clay))
            .with_item_model()
            .with_self_loot()
            .with_tag("minecraft:mineable/pickaxe")
            .with_lang(lang_buffer, &display);
    }

    // The vessel keeps its name and contents when broken
    common
        .blockstate("ceramic_large_vessel")
        .with_block_model(
            Model::new("notreepunching:block/pottery_large_vessel")
                .with_texture("all", &ResourceLocation::new("notreepunching", "block/ceramic")),
        )
        .with_item_model()
        .with_block_loot(vec![vec![LootTableEntry::item("notreepunching:ceramic_large_vessel")
            .with_function(copy_block_entity_name())
            .with_function(copy_block_entity_nbt())]])
        .with_tag("minecraft:mineable/pickaxe")
        .with_lang(lang_buffer, &lang("ceramic large vessel", &[]));

    for metal in TOOL_METALS {
        for tool in ["mattock", "saw", "knife"] {
            handheld(common, lang_buffer, &format!("{}_{}", metal, tool));
        }
    }

    for tool in FLINT_TOOLS {
        handheld(common, lang_buffer, &format!("flint_{}", tool));
    }
    handheld(common, lang_buffer, "macuahuitl");

    for item in MISC_ITEMS {
        common
            .item_model(item)
            .with_lang(lang_buffer, &lang(item, &[]));
    }
}

/// A cobblestone block of `stone` along with its stairs, slab and wall
pub fn stone_cobblestone(common: &mut ResourceManager, lang_buffer: &mut LangBuffer, stone: &str) {
    let name = format!("{}_cobblestone", stone);
    common
        .blockstate(&name)
        .with_cube_all_model()
        .with_item_model()
        .with_tag("minecraft:mineable/pickaxe")
        .with_self_loot()
        .with_lang(lang_buffer, &lang("%s cobblestone", &[stone]))
        .make_stairs()
        .make_slab()
        .make_wall();

    for (piece, tag) in [
        ("stairs", "minecraft:stairs"),
        ("slab", "minecraft:slabs"),
        ("wall", "minecraft:walls"),
    ] {
        common
            .block(&format!("{}_{}", name, piece))
            .with_lang(lang_buffer, &lang("%s cobblestone %s", &[stone, piece]))
            .with_tag(tag);
    }
}

fn handheld(common: &mut ResourceManager, lang_buffer: &mut LangBuffer, name: &str) {
    common
        .item(name)
        .with_item_model("item/handheld")
        .with_lang(lang_buffer, &lang(name, &[]));
}

#[test]
fn andesite_cobblestone() {
    use ntp_datapack::data::tags::{TagEntry, TagKind};

    let mut rm = ResourceManager::new("notreepunching", "unused");
    let mut lang_buffer = LangBuffer::new();
    stone_cobblestone(&mut rm, &mut lang_buffer, "andesite");

    let has_tag = |tag: &str, block: &str| {
        rm.get_tag(TagKind::Block, tag)
            .map_or(false, |def| def.values.contains(&TagEntry::parse(block, "notreepunching")))
    };
    assert!(has_tag("minecraft:mineable/pickaxe", "notreepunching:andesite_cobblestone"));
    assert!(has_tag("minecraft:stairs", "notreepunching:andesite_cobblestone_stairs"));
    assert!(has_tag("minecraft:slabs", "notreepunching:andesite_cobblestone_slab"));
    assert!(has_tag("minecraft:walls", "notreepunching:andesite_cobblestone_wall"));

    assert_eq!(
        lang_buffer.get("block.notreepunching.andesite_cobblestone"),
        Some("Andesite Cobblestone")
    );
    assert_eq!(
        lang_buffer.get("block.notreepunching.andesite_cobblestone_wall"),
        Some("Andesite Cobblestone Wall")
    );
    assert!(rm.get_loot_table("blocks/andesite_cobblestone_slab").is_some());
}

#[test]
fn every_item_has_a_model_and_name() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    let mut lang_buffer = LangBuffer::new();
    do_assets(&mut rm, &mut lang_buffer);

    assert_eq!(
        lang_buffer.get("item.notreepunching.netherite_mattock"),
        Some("Netherite Mattock")
    );
    assert_eq!(
        lang_buffer.get("block.notreepunching.red_sandstone_loose_rock"),
        Some("Red Sandstone Loose Rock")
    );
    assert_eq!(lang_buffer.get("block.notreepunching.clay_worked"), Some("Worked Clay"));
    assert_eq!(
        lang_buffer.get("notreepunching.tooltip.small_vessel_more"),
        Some("%d More...")
    );

    for model in [
        "item/macuahuitl",
        "item/stone_loose_rock",
        "block/stone_loose_rock",
        "item/clay_bucket",
        "item/fire_starter",
    ] {
        assert!(rm.get_model(model).is_some(), "missing model {}", model);
    }

    let vessel = rm.get_loot_table("blocks/ceramic_large_vessel").unwrap();
    assert_eq!(vessel.pools[0].entries[0].functions.len(), 2);
}

#[test]
fn loose_rocks_are_tagged_as_blocks_and_items() {
    use ntp_datapack::data::tags::{TagEntry, TagKind};

    let mut rm = ResourceManager::new("notreepunching", "unused");
    let mut lang_buffer = LangBuffer::new();
    do_assets(&mut rm, &mut lang_buffer);

    for kind in [TagKind::Block, TagKind::Item] {
        let tag = rm.get_tag(kind, "loose_rocks").unwrap();
        assert_eq!(tag.values.len(), LOOSE_ROCKS.len());
        assert!(tag
            .values
            .contains(&TagEntry::parse("notreepunching:sandstone_loose_rock", "notreepunching")));
    }

    assert_eq!(
        rm.get_model("item/granite_loose_rock"),
        Some(&Model::generated(&ResourceLocation::new(
            "notreepunching",
            "item/granite_loose_rock"
        )))
    );
}
