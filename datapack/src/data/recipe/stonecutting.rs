use ntp_util::ResourceLocation;
use serde::Serialize;

use crate::data::recipe::ingredient::Ingredient;

/// A stonecutting recipe
#[derive(Serialize, Debug, PartialEq)]
pub struct StonecuttingRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// # Note
    /// This ingredient cannot be a list
    pub ingredient: Ingredient,
    pub result: ResourceLocation,
    pub count: u8,
}

impl StonecuttingRecipe {
    pub fn new(ingredient: Ingredient, result: ResourceLocation, count: u8) -> Self {
        StonecuttingRecipe {
            group: None,
            ingredient,
            result,
            count,
        }
    }
}

#[test]
fn stonecutting_ser_test() {
    use crate::data::recipe::{Recipe, RecipeType};

    let recipe = Recipe::new(RecipeType::StonecuttingRecipe(StonecuttingRecipe::new(
        Ingredient::Item(ResourceLocation::new("notreepunching", "andesite_cobblestone")),
        ResourceLocation::new("notreepunching", "andesite_cobblestone_slab"),
        2,
    )));

    assert_eq!(
        serde_json::to_string(&recipe).unwrap(),
        r#"{"type":"minecraft:stonecutting","ingredient":{"item":"notreepunching:andesite_cobblestone"},"result":"notreepunching:andesite_cobblestone_slab","count":2}"#
    );
}
