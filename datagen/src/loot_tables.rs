use log::info;
use ntp_datapack::{
    data::loot_tables::{
        block_state_property,
        explosion_decay,
        fortune_bonus,
        match_tag,
        random_chance,
        survives_explosion,
        LootTableEntry,
    },
    ResourceManager,
};

/// Grass only drops itself to shears, plant fiber and seeds need a sharp tool
///
/// Each table is a single pool, so one break drops at most one of grass, fiber or seeds.
pub fn do_loot_tables(common: &mut ResourceManager) {
    info!("Generating loot tables");

    common.block_loot("minecraft:grass", vec![vec![
        shears_drop(),
        plant_fiber(),
        LootTableEntry::item("minecraft:wheat_seeds")
            .with_conditions([match_tag("notreepunching:sharp_tools"), random_chance(0.125)])
            .with_function(fortune_bonus(2))
            .with_function(explosion_decay()),
    ]]);

    common.block_loot("minecraft:tall_grass", vec![vec![
        shears_drop(),
        plant_fiber(),
        LootTableEntry::item("minecraft:wheat_seeds").with_conditions([
            match_tag("notreepunching:sharp_tools"),
            survives_explosion(),
            block_state_property("minecraft:tall_grass[half=lower]"),
            random_chance(0.125),
        ]),
    ]]);
}

fn shears_drop() -> LootTableEntry {
    LootTableEntry::item("minecraft:grass").with_condition(match_tag("notreepunching:shears"))
}

fn plant_fiber() -> LootTableEntry {
    LootTableEntry::item("notreepunching:plant_fiber")
        .with_conditions([match_tag("notreepunching:sharp_tools"), random_chance(0.25)])
}

#[test]
fn grass_loot() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    do_loot_tables(&mut rm);

    let grass = serde_json::to_value(rm.get_loot_table("minecraft:blocks/grass").unwrap()).unwrap();
    assert_eq!(grass["type"], "minecraft:block");
    assert_eq!(grass["pools"].as_array().unwrap().len(), 1);

    let pool = &grass["pools"][0];
    assert_eq!(pool["rolls"], 1);
    assert_eq!(
        pool["conditions"],
        serde_json::json!([{"condition": "minecraft:survives_explosion"}])
    );
    assert_eq!(pool["entries"].as_array().unwrap().len(), 3);
    assert_eq!(
        pool["entries"][1],
        serde_json::json!({
            "type": "minecraft:item",
            "name": "notreepunching:plant_fiber",
            "conditions": [
                {"condition": "minecraft:match_tool", "predicate": {"tag": "notreepunching:sharp_tools"}},
                {"condition": "minecraft:random_chance", "chance": 0.25}
            ]
        })
    );
    assert_eq!(pool["entries"][2]["functions"].as_array().unwrap().len(), 2);

    let tall_grass = serde_json::to_value(rm.get_loot_table("minecraft:blocks/tall_grass").unwrap()).unwrap();
    assert_eq!(tall_grass["pools"].as_array().unwrap().len(), 1);
    let seeds = &tall_grass["pools"][0]["entries"][2];
    assert_eq!(seeds["name"], "minecraft:wheat_seeds");
    assert_eq!(seeds["conditions"].as_array().unwrap().len(), 4);
    assert_eq!(seeds["conditions"][2]["properties"]["half"], "lower");
    assert!(seeds.get("functions").is_none());
}
