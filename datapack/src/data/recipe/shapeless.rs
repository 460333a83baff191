use serde::{ser::SerializeSeq, Serialize};

use crate::data::recipe::{ingredient::Ingredient, RecipeOutput};

/// A shapeless crafting recipe
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ShapelessCraftingRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "ingredients")]
    pub inputs: ShapelessIngredients,
    pub result: RecipeOutput,
}

impl ShapelessCraftingRecipe {
    pub fn new<I: IntoIterator<Item = Ingredient>>(inputs: I, result: RecipeOutput) -> Self {
        ShapelessCraftingRecipe {
            group: None,
            inputs: inputs.into_iter().collect(),
            result,
        }
    }
}

/// The ingredients list of a shapeless recipe
///
/// Runs of the same ingredient are stored once with a count, order is kept
#[derive(Debug, PartialEq, Eq, Default)]
pub struct ShapelessIngredients(Vec<(Ingredient, u8)>);

impl FromIterator<Ingredient> for ShapelessIngredients {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        let mut runs: Vec<(Ingredient, u8)> = Vec::new();
        for ingr in iter {
            match runs.last_mut() {
                Some((last, count)) if *last == ingr => *count += 1,
                _ => runs.push((ingr, 1)),
            }
        }
        ShapelessIngredients(runs)
    }
}

impl Serialize for ShapelessIngredients {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        let total = self.0.iter().map(|(_, count)| *count as usize).sum();
        let mut seq = serializer.serialize_seq(Some(total))?;
        for (ingr, count) in self.0.iter() {
            for _ in 0 .. *count {
                seq.serialize_element(ingr)?;
            }
        }
        seq.end()
    }
}

#[test]
fn shapeless_ser_test() {
    use crate::data::recipe::{Recipe, RecipeType};

    let fiber = Ingredient::parse("notreepunching:plant_fiber", "notreepunching");
    let recipe = Recipe::new(RecipeType::ShapelessRecipe(ShapelessCraftingRecipe::new(
        vec![fiber.clone(), fiber.clone(), fiber],
        RecipeOutput::from("notreepunching:plant_string"),
    )));

    let serialized = serde_json::to_string(&recipe).unwrap();

    assert_eq!(
        r#"{"type":"minecraft:crafting_shapeless","ingredients":[{"item":"notreepunching:plant_fiber"},{"item":"notreepunching:plant_fiber"},{"item":"notreepunching:plant_fiber"}],"result":{"item":"notreepunching:plant_string"}}"#,
        &serialized
    )
}

#[test]
fn shapeless_keeps_order() {
    let inputs: ShapelessIngredients = ["#minecraft:wool", "#notreepunching:knives", "#minecraft:wool"]
        .iter()
        .map(|i| Ingredient::parse(i, "notreepunching"))
        .collect();

    assert_eq!(inputs.0.len(), 3);
    assert_eq!(
        serde_json::to_string(&inputs).unwrap(),
        r#"[{"tag":"minecraft:wool"},{"tag":"notreepunching:knives"},{"tag":"minecraft:wool"}]"#
    );
}
