use log::info;
use ntp_datapack::{
    data::recipe::{
        shaped::ShapedCraftingRecipe,
        shapeless::ShapelessCraftingRecipe,
        tool_damaging::ToolDamagingRecipe,
        Recipe,
        RecipeOutput,
        RecipeType,
    },
    RecipeContext,
    ResourceManager,
};

use crate::assets::COBBLESTONES;

const KNIVES: &str = "#notreepunching:knives";

pub fn do_recipes(common: &mut ResourceManager) {
    info!("Generating recipes");

    // Loose rocks
    common
        .crafting_shaped(
            "cobblestone_from_rocks",
            &["XX", "XX"],
            &[('X', "notreepunching:stone_loose_rock")],
            "minecraft:cobblestone",
        )
        .with_advancement("notreepunching:stone_loose_rock");
    for stone in ["andesite", "diorite", "granite"] {
        let rock = format!("notreepunching:{}_loose_rock", stone);
        common
            .crafting_shaped(
                &format!("{}_cobblestone_from_rocks", stone),
                &["XX", "XX"],
                &[('X', rock.as_str())],
                format!("notreepunching:{}_cobblestone", stone).as_str(),
            )
            .with_advancement(&rock);
    }
    for stone in ["sandstone", "red_sandstone"] {
        let rock = format!("notreepunching:{}_loose_rock", stone);
        common
            .crafting_shaped(
                &format!("{}_from_rocks", stone),
                &["XX", "XX"],
                &[('X', rock.as_str())],
                format!("minecraft:{}", stone).as_str(),
            )
            .with_advancement(&rock);
    }

    // Stairs, slabs and walls
    for stone in COBBLESTONES {
        cobblestone_pieces(common, stone);
    }

    // Clay tool
    tool_damaging_shapeless(
        common,
        "clay_brick_from_balls",
        &["notreepunching:clay_tool", "minecraft:clay_ball"],
        "notreepunching:clay_brick",
        None,
    )
    .with_advancement("minecraft:clay_ball");
    tool_damaging_shapeless(
        common,
        "clay_brick_from_blocks",
        &["notreepunching:clay_tool", "minecraft:clay"],
        (4, "notreepunching:clay_brick"),
        None,
    )
    .with_advancement("minecraft:clay");

    // Misc
    common
        .crafting_shapeless(
            "plant_string",
            &["notreepunching:plant_fiber"; 3],
            "notreepunching:plant_string",
        )
        .with_advancement("notreepunching:plant_fiber");
    common.smelting(
        "smelting/string_from_plant_string",
        "notreepunching:plant_string",
        "minecraft:string",
        0.1,
    );
    common
        .crafting_shapeless("flint_from_gravel", &["minecraft:gravel"; 3], (2, "minecraft:flint"))
        .with_advancement("minecraft:gravel");

    // Sticks
    for (saw, name, logs, planks) in [("saws", "saw", 8, 2), ("weak_saws", "flint_axe", 6, 1)] {
        let saw = format!("#notreepunching:{}", saw);
        for (wood, count) in [("logs", logs), ("planks", planks)] {
            let wood_tag = format!("#minecraft:{}", wood);
            tool_damaging_shaped(
                common,
                &format!("sticks_from_{}_with_{}", wood, name),
                &["SW"],
                &[('S', saw.as_str()), ('W', wood_tag.as_str())],
                (count, "minecraft:stick"),
                None,
            )
            .with_advancement(&wood_tag);
        }
    }

    // Tools
    for metal in ["iron", "gold", "diamond"] {
        let ingot = format!("#notreepunching:{}_ingots", metal);
        let key = [('S', "#notreepunching:sticks"), ('I', ingot.as_str())];
        for (tool, pattern) in [
            ("knife", &["I", "S"][..]),
            ("mattock", &["III", " SI", " S "][..]),
            ("saw", &["  S", " SI", "SI "][..]),
        ] {
            let name = format!("{}_{}", metal, tool);
            common
                .crafting_shaped(&name, pattern, &key, format!("notreepunching:{}", name).as_str())
                .with_advancement(&ingot);
        }
    }

    for tool in ["knife", "mattock", "saw"] {
        common
            .smithing_transform(
                &format!("netherite_{}", tool),
                "minecraft:netherite_upgrade_smithing_template",
                &format!("notreepunching:diamond_{}", tool),
                "minecraft:netherite_ingot",
                &format!("notreepunching:netherite_{}", tool),
            )
            .with_advancement("minecraft:netherite_ingot");
    }

    // Flint tools
    let sticks = ('S', "#notreepunching:sticks");
    let shard = ('I', "notreepunching:flint_shard");
    let string = ('P', "#notreepunching:string");
    for (tool, pattern, key) in [
        ("flint_axe", &["PI", "S "][..], &[sticks, shard, string][..]),
        ("flint_hoe", &["PII", "S  ", "S  "][..], &[sticks, shard, string][..]),
        ("flint_knife", &["I", "S"][..], &[sticks, shard][..]),
        ("flint_pickaxe", &["IPI", "ISI", " S "][..], &[sticks, shard, string][..]),
        ("flint_shovel", &[" II", " PI", "S  "][..], &[sticks, shard, string][..]),
        ("macuahuitl", &[" IS", "ISI", "SI "][..], &[sticks, shard][..]),
    ] {
        common
            .crafting_shaped(tool, pattern, key, format!("notreepunching:{}", tool).as_str())
            .with_advancement("notreepunching:flint_shard");
    }

    // Misc tools
    common
        .crafting_shaped(
            "clay_tool",
            &["  I", " II", "I  "],
            &[('I', "#notreepunching:sticks")],
            "notreepunching:clay_tool",
        )
        .with_advancement("#notreepunching:sticks");
    common
        .crafting_shaped(
            "fire_starter",
            &["SP", "FS"],
            &[
                ('S', "#notreepunching:sticks"),
                ('P', "#notreepunching:string"),
                ('F', "notreepunching:flint_shard"),
            ],
            "notreepunching:fire_starter",
        )
        .with_advancement("notreepunching:flint_shard");

    // Pottery firing
    for pottery in ["large_vessel", "small_vessel", "bucket", "flower_pot", "brick"] {
        let clay = format!("notreepunching:clay_{}", pottery);
        let fired = match pottery {
            "flower_pot" => "minecraft:flower_pot".to_owned(),
            "brick" => "minecraft:brick".to_owned(),
            _ => format!("notreepunching:ceramic_{}", pottery),
        };
        common.smelting(&format!("smelting/{}", pottery), &clay, &fired, 0.1);
        common.campfire_cooking(&format!("campfire/{}", pottery), &clay, &fired, 0.1);
    }

    // Knife crafting
    for (name, input, count, output) in [
        ("string_from_wool", "#minecraft:wool", 4, "minecraft:string"),
        ("string_from_web", "minecraft:cobweb", 8, "minecraft:string"),
        ("plant_fiber_from_sugarcane", "minecraft:sugar_cane", 3, "notreepunching:plant_fiber"),
        ("plant_fiber_from_wheat", "minecraft:wheat", 2, "notreepunching:plant_fiber"),
        ("plant_fiber_from_vines", "minecraft:vine", 5, "notreepunching:plant_fiber"),
        ("plant_fiber_from_cactus", "minecraft:cactus", 3, "notreepunching:plant_fiber"),
        ("plant_fiber_from_leaves", "#minecraft:leaves", 1, "notreepunching:plant_fiber"),
        ("plant_fiber_from_saplings", "#minecraft:saplings", 2, "notreepunching:plant_fiber"),
        ("plant_fiber_from_small_flowers", "#minecraft:small_flowers", 1, "notreepunching:plant_fiber"),
        ("plant_fiber_from_tall_flowers", "#minecraft:tall_flowers", 2, "notreepunching:plant_fiber"),
    ] {
        tool_damaging_shapeless(
            common,
            &format!("{}_with_knife", name),
            &[input, KNIVES],
            (count, output),
            None,
        )
        .with_advancement(input);
    }

    // Only the knife takes damage when cutting up armor
    for (piece, count) in [("boots", 3), ("leggings", 6), ("chestplate", 7), ("helmet", 4)] {
        let armor = format!("minecraft:leather_{}", piece);
        tool_damaging_shapeless(
            common,
            &format!("leather_from_{}_with_knife", piece),
            &[armor.as_str(), KNIVES],
            (count, "minecraft:leather"),
            Some(KNIVES),
        )
        .with_advancement(&armor);
    }

    tool_damaging_shapeless(
        common,
        "melon_slices_with_knife",
        &["minecraft:melon", KNIVES],
        (9, "minecraft:melon_slice"),
        None,
    )
    .with_advancement("minecraft:melon");

    // Removed vanilla recipes
    remove_recipe(common, "minecraft:stick");
    for tool in ["pickaxe", "shovel", "hoe", "sword", "axe"] {
        remove_recipe(common, &format!("minecraft:wooden_{}", tool));
        remove_recipe(common, &format!("minecraft:stone_{}", tool));
    }
    for recipe in [
        "minecraft:campfire",
        "minecraft:soul_campfire",
        "minecraft:flower_pot",
        "minecraft:brick",
    ] {
        remove_recipe(common, recipe);
    }
}

fn cobblestone_pieces(common: &mut ResourceManager, stone: &str) {
    let cobble = format!("notreepunching:{}_cobblestone", stone);
    let key = [('X', cobble.as_str())];
    let stairs = format!("{}_stairs", cobble);
    let slab = format!("{}_slab", cobble);
    let wall = format!("{}_wall", cobble);

    common
        .crafting_shaped(
            &format!("{}_cobblestone_stairs", stone),
            &["X  ", "XX ", "XXX"],
            &key,
            (4, stairs.as_str()),
        )
        .with_advancement(&cobble);
    common
        .crafting_shaped(
            &format!("{}_cobblestone_slab", stone),
            &["XXX"],
            &key,
            (6, slab.as_str()),
        )
        .with_advancement(&cobble);
    common
        .crafting_shaped(
            &format!("{}_cobblestone_wall", stone),
            &["XXX", "XXX"],
            &key,
            (6, wall.as_str()),
        )
        .with_advancement(&cobble);

    common
        .stonecutting(&format!("stonecutting/{}_cobblestone_stairs", stone), &cobble, &stairs, 1)
        .with_advancement(&cobble);
    common.stonecutting(&format!("stonecutting/{}_cobblestone_slab", stone), &cobble, &slab, 2);
    common.stonecutting(&format!("stonecutting/{}_cobblestone_wall", stone), &cobble, &wall, 1);

    common.smelting(
        &format!("smelting/{}_from_cobblestone", stone),
        &cobble,
        &format!("minecraft:{}", stone),
        0.1,
    );
}

/// A shaped crafting recipe that damages the tool in the grid instead of using it up
///
/// `tool` restricts which ingredient counts as the tool.
pub fn tool_damaging_shaped<'a, O: Into<RecipeOutput>>(
    rm: &'a mut ResourceManager,
    name: &str,
    pattern: &[&str],
    key: &[(char, &str)],
    result: O,
    tool: Option<&str>,
) -> RecipeContext<'a> {
    let key = key
        .iter()
        .map(|(c, ingredient)| (*c, rm.ingredient(ingredient)))
        .collect();
    let body = RecipeType::ShapedRecipe(ShapedCraftingRecipe::new(pattern, key, result.into()));
    let tool = tool.map(|tool| rm.ingredient(tool));
    rm.recipe(name, RecipeType::ToolDamagingShaped(ToolDamagingRecipe::new(body, tool)))
}

/// A shapeless crafting recipe that damages the tool in the grid instead of using it up
pub fn tool_damaging_shapeless<'a, O: Into<RecipeOutput>>(
    rm: &'a mut ResourceManager,
    name: &str,
    ingredients: &[&str],
    result: O,
    tool: Option<&str>,
) -> RecipeContext<'a> {
    let body = RecipeType::ShapelessRecipe(ShapelessCraftingRecipe::new(
        rm.ingredients(ingredients),
        result.into(),
    ));
    let tool = tool.map(|tool| rm.ingredient(tool));
    rm.recipe(name, RecipeType::ToolDamagingShapeless(ToolDamagingRecipe::new(body, tool)))
}

/// Overrides the recipe `id` with one that can never be crafted
pub fn remove_recipe(rm: &mut ResourceManager, id: &str) {
    rm.recipe(id, Recipe::empty());
}

#[test]
fn removed_recipes_are_empty() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    do_recipes(&mut rm);

    for id in ["minecraft:stick", "minecraft:wooden_pickaxe", "minecraft:stone_sword", "minecraft:brick"] {
        assert_eq!(
            serde_json::to_string(rm.get_recipe(id).unwrap()).unwrap(),
            r#"{"type":"notreepunching:empty"}"#
        );
    }
}

#[test]
fn sticks_with_saws() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    do_recipes(&mut rm);

    let recipe = serde_json::to_value(rm.get_recipe("sticks_from_logs_with_flint_axe").unwrap()).unwrap();
    assert_eq!(
        recipe,
        serde_json::json!({
            "type": "notreepunching:tool_damaging_shaped",
            "recipe": {
                "type": "minecraft:crafting_shaped",
                "pattern": ["SW"],
                "key": {
                    "S": {"tag": "notreepunching:weak_saws"},
                    "W": {"tag": "minecraft:logs"}
                },
                "result": {"item": "minecraft:stick", "count": 6}
            }
        })
    );
    assert!(rm
        .get_advancement("notreepunching:recipes/sticks_from_logs_with_flint_axe")
        .is_some());
}

#[test]
fn leather_recipes_name_the_knife() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    do_recipes(&mut rm);

    let recipe = serde_json::to_value(rm.get_recipe("leather_from_chestplate_with_knife").unwrap()).unwrap();
    assert_eq!(recipe["tool"], serde_json::json!({"tag": "notreepunching:knives"}));
    assert_eq!(recipe["recipe"]["result"]["count"], 7);

    let melon = serde_json::to_value(rm.get_recipe("melon_slices_with_knife").unwrap()).unwrap();
    assert!(melon.get("tool").is_none());
}

#[test]
fn pottery_fires_in_furnaces_and_campfires() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    do_recipes(&mut rm);

    let campfire = serde_json::to_value(rm.get_recipe("campfire/flower_pot").unwrap()).unwrap();
    assert_eq!(campfire["type"], "minecraft:campfire_cooking");
    assert_eq!(campfire["result"], "minecraft:flower_pot");
    assert_eq!(campfire["cookingtime"], 600);

    let smelting = serde_json::to_value(rm.get_recipe("smelting/large_vessel").unwrap()).unwrap();
    assert_eq!(smelting["result"], "notreepunching:ceramic_large_vessel");
    assert_eq!(smelting["cookingtime"], 200);
}

#[test]
fn grouped_and_conditional_tool_recipes() {
    use ntp_datapack::data::recipe::RecipeCondition;

    let mut rm = ResourceManager::new("notreepunching", "unused");
    tool_damaging_shaped(
        &mut rm,
        "sticks",
        &["SW"],
        &[('S', "#saws"), ('W', "#minecraft:logs")],
        (8, "minecraft:stick"),
        Some("#saws"),
    )
    .with_group("sticks")
    .with_condition(RecipeCondition::mod_loaded("forge"));

    let recipe = serde_json::to_value(rm.get_recipe("sticks").unwrap()).unwrap();
    assert_eq!(recipe["recipe"]["group"], "sticks");
    assert_eq!(recipe["tool"], serde_json::json!({"tag": "notreepunching:saws"}));
    assert_eq!(recipe["conditions"][0]["modid"], "forge");
}
