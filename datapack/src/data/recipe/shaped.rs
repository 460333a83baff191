use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize};

use crate::data::recipe::{ingredient::Ingredient, recipe::RecipeOutput};

/// A shaped crafting recipe
#[derive(PartialEq, Eq, Debug)]
pub struct ShapedCraftingRecipe {
    /// The pattern of the recipe, one string per row
    /// # Note
    /// All the rows of the pattern must be the same width and every character other
    /// than a space must have an entry in `key`.
    /// A space is an empty slot that still blocks the recipe from shifting.
    pub pattern: Vec<String>,
    pub key: IndexMap<char, Ingredient>,
    pub group: Option<String>,
    pub result: RecipeOutput,
}

impl ShapedCraftingRecipe {
    pub fn new(pattern: &[&str], key: IndexMap<char, Ingredient>, result: RecipeOutput) -> Self {
        ShapedCraftingRecipe {
            pattern: pattern.iter().map(|row| (*row).to_owned()).collect(),
            key,
            group: None,
            result,
        }
    }
}

impl Serialize for ShapedCraftingRecipe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        // Check to make sure the width of each row is the same
        let width = self.pattern.first().map(|row| row.chars().count());
        if self
            .pattern
            .iter()
            .any(|row| Some(row.chars().count()) != width)
        {
            return Err(serde::ser::Error::custom(
                "Shaped recipes must have all the rows be the same width",
            ));
        }

        if let Some(c) = self
            .pattern
            .iter()
            .flat_map(|row| row.chars())
            .find(|c| *c != ' ' && !self.key.contains_key(c))
        {
            return Err(serde::ser::Error::custom(format!(
                "Pattern character '{}' has no ingredient in the key",
                c
            )));
        }

        let mut map = serializer.serialize_map(None)?;
        if self.group.is_some() {
            map.serialize_entry("group", &self.group)?;
        }
        map.serialize_entry("pattern", &self.pattern)?;
        map.serialize_entry("key", &self.key)?;
        map.serialize_entry("result", &self.result)?;

        map.end()
    }
}

#[test]
fn shaped_ser_test() {
    use ntp_util::ResourceLocation;

    let mut key = IndexMap::new();
    key.insert('S', Ingredient::Tag(ResourceLocation::new("notreepunching", "sticks")));
    key.insert('I', Ingredient::Tag(ResourceLocation::new("notreepunching", "iron_ingots")));

    let recipe = ShapedCraftingRecipe::new(
        &["III", " SI", " S "],
        key,
        RecipeOutput::from("notreepunching:iron_mattock"),
    );

    assert_eq!(
        serde_json::to_string(&recipe).unwrap(),
        r#"{"pattern":["III"," SI"," S "],"key":{"S":{"tag":"notreepunching:sticks"},"I":{"tag":"notreepunching:iron_ingots"}},"result":{"item":"notreepunching:iron_mattock"}}"#
    )
}

#[test]
fn shaped_pattern_validation() {
    use ntp_util::ResourceLocation;

    let mut key = IndexMap::new();
    key.insert('X', Ingredient::Item(ResourceLocation::minecraft("cobblestone")));

    let ragged = ShapedCraftingRecipe::new(&["X ", "XX", "XXX"], key.clone(), RecipeOutput::from("stone"));
    assert!(serde_json::to_string(&ragged).is_err());

    let unknown = ShapedCraftingRecipe::new(&["XY"], key, RecipeOutput::from("stone"));
    assert!(serde_json::to_string(&unknown).is_err());
}
