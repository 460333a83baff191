use indexmap::IndexMap;
use ntp_util::ResourceLocation;
use serde::Serialize;

/// Part of a condition that matches on an item
#[derive(Serialize, Default, Debug, Clone, PartialEq)]
pub struct ItemPredicate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ResourceLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ResourceLocation>,
}

impl ItemPredicate {
    /// `#ns:path` matches a tag, anything else matches that single item
    pub fn parse(value: &str, domain: &str) -> ItemPredicate {
        match value.strip_prefix('#') {
            Some(tag) => ItemPredicate {
                tag: Some(ResourceLocation::resolve(tag, domain)),
                ..Default::default()
            },
            None => ItemPredicate {
                items: Some(vec![ResourceLocation::resolve(value, domain)]),
                ..Default::default()
            },
        }
    }
}

/// A condition that matches on a location
#[derive(Serialize, Default, Debug, Clone, PartialEq)]
pub struct PredicateLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<LocationBlock>,
}

/// Part of a condition that matches on a block
#[derive(Serialize, Default, Debug, Clone, PartialEq)]
pub struct LocationBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<ResourceLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IndexMap<String, String>>,
}

#[test]
fn item_predicate_parsing() {
    let tag = ItemPredicate::parse("#notreepunching:loose_rocks", "notreepunching");
    let item = ItemPredicate::parse("minecraft:gravel", "notreepunching");

    assert_eq!(
        serde_json::to_string(&tag).unwrap(),
        r#"{"tag":"notreepunching:loose_rocks"}"#
    );
    assert_eq!(
        serde_json::to_string(&item).unwrap(),
        r#"{"items":["minecraft:gravel"]}"#
    );
}
