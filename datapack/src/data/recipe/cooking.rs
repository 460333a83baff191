use std::{fmt::Debug, marker::PhantomData};

use ntp_util::ResourceLocation;
use serde::Serialize;

use crate::data::recipe::ingredient::Ingredient;

/// The generic format of a cooking recipe
///
/// The only thing that changes based on the cooking type is the amount of time it takes to cook<br>
/// Custom cooking recipes can be implemented by implementing [CookingRecipeType] on a struct
#[derive(Serialize, PartialEq, Debug)]
pub struct CookingRecipe<T: CookingRecipeType> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "ingredient")]
    pub input: Ingredient,
    pub result: ResourceLocation,
    pub experience: f64,
    #[serde(rename = "cookingtime")]
    pub cook_time: u64,
    #[serde(skip)]
    pub _phatom: PhantomData<T>,
}

impl<T: CookingRecipeType> CookingRecipe<T> {
    /// Creates a recipe with the default cooking time of `T`
    pub fn new(input: Ingredient, result: ResourceLocation, experience: f64) -> Self {
        CookingRecipe {
            group: None,
            input,
            result,
            experience,
            cook_time: T::cook_time(),
            _phatom: PhantomData,
        }
    }
}

/// Represents the different type of cooking recipes by changing the cooking time
pub trait CookingRecipeType: Debug + PartialEq {
    /// Defines the default cooking time for this recipe type
    ///
    /// This is the only thing that differs between the cooking recipe types
    fn cook_time() -> u64;
}

#[macro_export]
macro_rules! smelting_type {
    ($($name: ident, $time: literal),*) => {
        $(
            #[doc = "To be used as the type parameter for [CookingRecipeType](ntp_datapack::data::recipe::cooking::CookingRecipeType)"]
            #[derive(Debug, PartialEq)]
            pub struct $name;
            impl CookingRecipeType for $name {
                fn cook_time() -> u64 {
                    $time
                }
            }
        )*
    };
}

smelting_type! {
    SmeltingRecipe, 200,
    BlastingRecipe, 100,
    SmokingRecipe, 100,
    CampfireRecipe, 600
}

#[test]
fn cooking_ser_test() {
    use crate::data::recipe::{Recipe, RecipeType};

    let recipe = Recipe::new(RecipeType::SmeltingRecipe(CookingRecipe::new(
        Ingredient::Item(ResourceLocation::new("notreepunching", "granite_cobblestone")),
        ResourceLocation::minecraft("granite"),
        0.1,
    )));

    let serialized = serde_json::to_string(&recipe).unwrap();

    assert_eq!(
        &serialized,
        r#"{"type":"minecraft:smelting","ingredient":{"item":"notreepunching:granite_cobblestone"},"result":"minecraft:granite","experience":0.1,"cookingtime":200}"#
    )
}

#[test]
fn campfire_cook_time() {
    let recipe: CookingRecipe<CampfireRecipe> = CookingRecipe::new(
        Ingredient::Item(ResourceLocation::new("notreepunching", "clay_bucket")),
        ResourceLocation::new("notreepunching", "ceramic_bucket"),
        0.1,
    );

    assert_eq!(recipe.cook_time, 600);
}
