use ntp_util::ResourceLocation;
use serde::Serialize;

use crate::data::recipe::ingredient::Ingredient;

/// A smithing table recipe that upgrades `base` into `result` using a template
#[derive(Serialize, Debug, PartialEq)]
pub struct SmithingTransformRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub template: Ingredient,
    /// The base of the smithing recipe
    /// # Note
    /// This ingredient cannot be a list
    pub base: Ingredient,
    pub addition: Ingredient,
    /// In most cases, the nbt of enchantments will be carried over to the result
    pub result: SmithingOutput,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SmithingOutput {
    pub item: ResourceLocation,
}

#[test]
fn smithing_ser_test() {
    use crate::data::recipe::{Recipe, RecipeType};

    let recipe = Recipe::new(RecipeType::SmithingTransformRecipe(SmithingTransformRecipe {
        group: None,
        template: Ingredient::Item(ResourceLocation::minecraft(
            "netherite_upgrade_smithing_template",
        )),
        base: Ingredient::Item(ResourceLocation::new("notreepunching", "diamond_saw")),
        addition: Ingredient::Item(ResourceLocation::minecraft("netherite_ingot")),
        result: SmithingOutput {
            item: ResourceLocation::new("notreepunching", "netherite_saw"),
        },
    }));

    assert_eq!(
        serde_json::to_string(&recipe).unwrap(),
        r#"{"type":"minecraft:smithing_transform","template":{"item":"minecraft:netherite_upgrade_smithing_template"},"base":{"item":"notreepunching:diamond_saw"},"addition":{"item":"minecraft:netherite_ingot"},"result":{"item":"notreepunching:netherite_saw"}}"#
    );
}
