use indexmap::IndexMap;
use ntp_util::ResourceLocation;

use serde::Serialize;

pub mod conditions;
pub mod display;

use crate::data::advancement::conditions::AdvancementConditions;

use self::display::AdvancementDisplay;

/// An advancement
#[derive(Serialize, Debug, PartialEq)]
pub struct Advancement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<AdvancementDisplay>,
    pub criteria: IndexMap<String, AdvancementConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<AdvancementRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<AdvancementRewards>,
}

impl Advancement {
    /// The names used in `requirements` that have no matching criterion
    ///
    /// The game rejects advancements where this is not empty
    pub fn undefined_requirements(&self) -> Vec<&str> {
        let names: Vec<&str> = match &self.requirements {
            Some(AdvancementRequirements::List(list)) => list.iter().map(String::as_str).collect(),
            Some(AdvancementRequirements::LogicalList(lists)) => lists
                .iter()
                .flat_map(|list| list.iter().map(String::as_str))
                .collect(),
            None => Vec::new(),
        };

        names
            .into_iter()
            .filter(|name| !self.criteria.contains_key(*name))
            .collect()
    }
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum AdvancementRequirements {
    /// A list of the required criteria
    List(Vec<String>),
    /// A list of lists of criteria
    ///
    /// All of the lists only have to have one of their criteria met
    ///
    /// Basically ANDing of OR groups
    LogicalList(Vec<Vec<String>>),
}

impl AdvancementRequirements {
    /// Builds an AND of OR groups from string slices
    pub fn any_of(groups: &[&[&str]]) -> Self {
        AdvancementRequirements::LogicalList(
            groups
                .iter()
                .map(|group| group.iter().map(|name| (*name).to_owned()).collect())
                .collect(),
        )
    }
}

/// The rewards of an [Advancement]
#[derive(Serialize, Debug, PartialEq, Default)]
pub struct AdvancementRewards {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<ResourceLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot: Option<Vec<ResourceLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

#[test]
fn undefined_requirements_test() {
    use crate::data::datatypes::ItemPredicate;

    let mut criteria = IndexMap::new();
    criteria.insert(
        "has_gravel".to_owned(),
        AdvancementConditions::InventoryChanged {
            items: vec![ItemPredicate::parse("minecraft:gravel", "notreepunching")],
        },
    );

    let mut advancement = Advancement {
        parent: None,
        display: None,
        criteria,
        requirements: Some(AdvancementRequirements::any_of(&[&["has_gravel", "has_sticks"]])),
        rewards: None,
    };
    assert_eq!(advancement.undefined_requirements(), vec!["has_sticks"]);

    advancement.requirements = Some(AdvancementRequirements::List(vec!["has_gravel".to_owned()]));
    assert!(advancement.undefined_requirements().is_empty());
}

#[test]
fn advancement_ser_test() {
    let mut criteria = IndexMap::new();
    criteria.insert(
        "has_the_recipe".to_owned(),
        AdvancementConditions::RecipeUnlocked {
            recipe: ResourceLocation::new("notreepunching", "flint_axe"),
        },
    );

    let advancement = Advancement {
        parent: Some(ResourceLocation::minecraft("recipes/root")),
        display: None,
        criteria,
        requirements: None,
        rewards: Some(AdvancementRewards {
            recipes: Some(vec![ResourceLocation::new("notreepunching", "flint_axe")]),
            ..Default::default()
        }),
    };

    assert_eq!(
        serde_json::to_string(&advancement).unwrap(),
        r#"{"parent":"minecraft:recipes/root","criteria":{"has_the_recipe":{"trigger":"minecraft:recipe_unlocked","conditions":{"recipe":"notreepunching:flint_axe"}}},"rewards":{"recipes":["notreepunching:flint_axe"]}}"#
    );
}
