use ntp_util::ResourceLocation;
use serde::Serialize;

use crate::data::{
    datatypes::{ItemPredicate, LocationBlock, PredicateLocation},
    loot_tables::LootCondition,
};

/// The trigger of an advancement criterion and the conditions checked when it fires
#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "trigger", content = "conditions")]
pub enum AdvancementConditions {
    /// Fires whenever the player inventory changes, passes once every predicate matches an item
    #[serde(rename = "minecraft:inventory_changed")]
    InventoryChanged { items: Vec<ItemPredicate> },
    /// `location` is a list of loot conditions checked against the block and the item used
    #[serde(rename = "minecraft:item_used_on_block")]
    ItemUsedOnBlock { location: Vec<LootCondition> },
    #[serde(rename = "minecraft:recipe_unlocked")]
    RecipeUnlocked { recipe: ResourceLocation },
}

/// Passes when the player holds `item`, `#ns:path` checks an item tag instead
pub fn inventory_changed(item: &str, domain: &str) -> AdvancementConditions {
    AdvancementConditions::InventoryChanged {
        items: vec![ItemPredicate::parse(item, domain)],
    }
}

/// Passes when the player uses `item` on a block in the block tag `block_tag`
pub fn use_item_on_block(item: &str, block_tag: &str, domain: &str) -> AdvancementConditions {
    AdvancementConditions::ItemUsedOnBlock {
        location: vec![
            LootCondition::LocationCheck {
                predicate: PredicateLocation {
                    block: Some(LocationBlock {
                        tag: Some(ResourceLocation::resolve(block_tag, domain)),
                        ..Default::default()
                    }),
                },
            },
            LootCondition::MatchTool {
                predicate: ItemPredicate {
                    items: Some(vec![ResourceLocation::resolve(item, domain)]),
                    ..Default::default()
                },
            },
        ],
    }
}

#[test]
fn inventory_changed_ser_test() {
    assert_eq!(
        serde_json::to_string(&inventory_changed("#minecraft:logs", "notreepunching")).unwrap(),
        r#"{"trigger":"minecraft:inventory_changed","conditions":{"items":[{"tag":"minecraft:logs"}]}}"#
    );
}

#[test]
fn use_item_on_block_ser_test() {
    assert_eq!(
        serde_json::to_string(&use_item_on_block(
            "notreepunching:clay_tool",
            "notreepunching:pottery",
            "notreepunching"
        ))
        .unwrap(),
        r#"{"trigger":"minecraft:item_used_on_block","conditions":{"location":[{"condition":"minecraft:location_check","predicate":{"block":{"tag":"notreepunching:pottery"}}},{"condition":"minecraft:match_tool","predicate":{"items":["notreepunching:clay_tool"]}}]}}"#
    );
}
