use serde::Serialize;

use crate::data::recipe::{ingredient::Ingredient, RecipeType};

/// Wraps a crafting recipe so the tool in the grid loses durability instead of being consumed
///
/// The wrapped recipe is written with its own `type`, what counts as the tool is up to the game
/// unless `tool` names it.
#[derive(Serialize, Debug, PartialEq)]
pub struct ToolDamagingRecipe {
    pub recipe: Box<RecipeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<Ingredient>,
}

impl ToolDamagingRecipe {
    pub fn new(recipe: RecipeType, tool: Option<Ingredient>) -> Self {
        ToolDamagingRecipe {
            recipe: Box::new(recipe),
            tool,
        }
    }
}

#[test]
fn tool_damaging_ser_test() {
    use crate::data::recipe::{shapeless::ShapelessCraftingRecipe, Recipe, RecipeOutput};

    let body = ShapelessCraftingRecipe::new(
        ["minecraft:leather_boots", "#notreepunching:knives"]
            .iter()
            .map(|i| Ingredient::parse(i, "notreepunching")),
        RecipeOutput::from((3, "minecraft:leather")),
    );
    let recipe = Recipe::new(RecipeType::ToolDamagingShapeless(ToolDamagingRecipe::new(
        RecipeType::ShapelessRecipe(body),
        Some(Ingredient::parse("#notreepunching:knives", "notreepunching")),
    )));

    assert_eq!(
        serde_json::to_string(&recipe).unwrap(),
        r#"{"type":"notreepunching:tool_damaging_shapeless","recipe":{"type":"minecraft:crafting_shapeless","ingredients":[{"item":"minecraft:leather_boots"},{"tag":"notreepunching:knives"}],"result":{"item":"minecraft:leather","count":3}},"tool":{"tag":"notreepunching:knives"}}"#
    );
}
