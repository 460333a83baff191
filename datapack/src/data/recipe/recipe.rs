use ntp_util::ResourceLocation;
use serde::Serialize;

use crate::data::recipe::{
    cooking::*,
    shaped::ShapedCraftingRecipe,
    shapeless::ShapelessCraftingRecipe,
    smithing::SmithingTransformRecipe,
    stonecutting::StonecuttingRecipe,
    tool_damaging::ToolDamagingRecipe,
};

/// A recipe file
///
/// The body is flattened into the same object as the forge loading conditions,
/// so a recipe without conditions serializes exactly like its body.
#[derive(Serialize, PartialEq, Debug)]
pub struct Recipe {
    #[serde(flatten)]
    pub kind: RecipeType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RecipeCondition>,
}

impl Recipe {
    pub fn new(kind: RecipeType) -> Self {
        Recipe {
            kind,
            conditions: Vec::new(),
        }
    }

    /// A recipe that overrides another recipe id with nothing
    pub fn empty() -> Self {
        Recipe::new(RecipeType::Empty)
    }

    pub fn with_condition(mut self, condition: RecipeCondition) -> Self {
        self.conditions.push(condition);
        self
    }
}

impl From<RecipeType> for Recipe {
    fn from(kind: RecipeType) -> Self {
        Recipe::new(kind)
    }
}

/// The output type of most recipe types
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct RecipeOutput {
    pub item: ResourceLocation,
    #[serde(skip_serializing_if = "is_single")]
    pub count: u8,
}

fn is_single(count: &u8) -> bool {
    *count == 1
}

impl From<ResourceLocation> for RecipeOutput {
    fn from(item: ResourceLocation) -> Self {
        RecipeOutput { item, count: 1 }
    }
}

/// Ids without a namespace are vanilla ids
impl From<&str> for RecipeOutput {
    fn from(item: &str) -> Self {
        RecipeOutput::from(ResourceLocation::from(item))
    }
}

impl From<(u8, &str)> for RecipeOutput {
    fn from((count, item): (u8, &str)) -> Self {
        RecipeOutput {
            item: ResourceLocation::from(item),
            count,
        }
    }
}

/// The recipe types the generator writes
///
/// `ToolDamaging*` and `Empty` are provided by the mod itself, the rest are vanilla
#[derive(Serialize, PartialEq, Debug)]
#[serde(tag = "type")]
pub enum RecipeType {
    #[serde(rename = "minecraft:crafting_shaped")]
    ShapedRecipe(ShapedCraftingRecipe),
    #[serde(rename = "minecraft:crafting_shapeless")]
    ShapelessRecipe(ShapelessCraftingRecipe),
    #[serde(rename = "minecraft:smelting")]
    SmeltingRecipe(CookingRecipe<SmeltingRecipe>),
    #[serde(rename = "minecraft:blasting")]
    BlastingRecipe(CookingRecipe<BlastingRecipe>),
    #[serde(rename = "minecraft:smoking")]
    SmokingRecipe(CookingRecipe<SmokingRecipe>),
    #[serde(rename = "minecraft:campfire_cooking")]
    CampfireRecipe(CookingRecipe<CampfireRecipe>),
    #[serde(rename = "minecraft:stonecutting")]
    StonecuttingRecipe(StonecuttingRecipe),
    #[serde(rename = "minecraft:smithing_transform")]
    SmithingTransformRecipe(SmithingTransformRecipe),

    /// A crafting recipe that damages the tool used in it instead of consuming it
    #[serde(rename = "notreepunching:tool_damaging_shaped")]
    ToolDamagingShaped(ToolDamagingRecipe),
    #[serde(rename = "notreepunching:tool_damaging_shapeless")]
    ToolDamagingShapeless(ToolDamagingRecipe),
    /// Never matches, used to disable a vanilla recipe by overriding its id
    #[serde(rename = "notreepunching:empty")]
    Empty,
}

impl RecipeType {
    /// The recipe book group, a wrapped recipe uses the group of its body
    pub fn group_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            RecipeType::ShapedRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::ShapelessRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::SmeltingRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::BlastingRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::SmokingRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::CampfireRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::StonecuttingRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::SmithingTransformRecipe(recipe) => Some(&mut recipe.group),
            RecipeType::ToolDamagingShaped(recipe) | RecipeType::ToolDamagingShapeless(recipe) =>
                recipe.recipe.group_mut(),
            RecipeType::Empty => None,
        }
    }
}

/// A condition forge evaluates before loading a recipe
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[serde(tag = "type")]
pub enum RecipeCondition {
    #[serde(rename = "forge:mod_loaded")]
    ModLoaded { modid: String },
}

impl RecipeCondition {
    pub fn mod_loaded(modid: &str) -> Self {
        RecipeCondition::ModLoaded {
            modid: modid.to_owned(),
        }
    }
}

#[test]
fn empty_recipe_test() {
    assert_eq!(
        serde_json::to_string(&Recipe::empty()).unwrap(),
        r#"{"type":"notreepunching:empty"}"#
    );
}

#[test]
fn recipe_conditions_test() {
    let recipe = Recipe::empty().with_condition(RecipeCondition::mod_loaded("jei"));

    assert_eq!(
        serde_json::to_string(&recipe).unwrap(),
        r#"{"type":"notreepunching:empty","conditions":[{"type":"forge:mod_loaded","modid":"jei"}]}"#
    );
}

#[test]
fn recipe_output_count_test() {
    assert_eq!(
        serde_json::to_string(&RecipeOutput::from("notreepunching:clay_tool")).unwrap(),
        r#"{"item":"notreepunching:clay_tool"}"#
    );
    assert_eq!(
        serde_json::to_string(&RecipeOutput::from((8, "stick"))).unwrap(),
        r#"{"item":"minecraft:stick","count":8}"#
    );
}

#[test]
fn wrapped_recipe_group() {
    use crate::data::recipe::{
        ingredient::Ingredient,
        shapeless::ShapelessCraftingRecipe,
        tool_damaging::ToolDamagingRecipe,
    };

    let body = ShapelessCraftingRecipe::new(
        vec![Ingredient::parse("minecraft:melon", "notreepunching")],
        RecipeOutput::from((9, "minecraft:melon_slice")),
    );
    let mut recipe = RecipeType::ToolDamagingShapeless(ToolDamagingRecipe::new(
        RecipeType::ShapelessRecipe(body),
        None,
    ));

    if let Some(group) = recipe.group_mut() {
        *group = Some("melon".to_owned());
    }
    assert!(serde_json::to_string(&recipe)
        .unwrap()
        .contains(r#""recipe":{"type":"minecraft:crafting_shapeless","group":"melon""#));
    assert!(RecipeType::Empty.group_mut().is_none());
}
