use ntp_util::ResourceLocation;
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize,
};

/// Represents an ingredient in a recipe
#[derive(PartialOrd, Ord, PartialEq, Eq, Clone, Debug)]
pub enum Ingredient {
    /// A single item
    Item(ResourceLocation),
    /// A tag to use as the item provider
    Tag(ResourceLocation),
    /// A list of ingredients to use as an ingredient provider
    /// # Note
    /// Do not have nested Ingredient::Lists
    List(Box<[Ingredient]>),
}

impl Ingredient {
    /// `#ns:path` is a tag, anything else is an item
    pub fn parse(value: &str, domain: &str) -> Ingredient {
        match value.strip_prefix('#') {
            Some(tag) => Ingredient::Tag(ResourceLocation::resolve(tag, domain)),
            None => Ingredient::Item(ResourceLocation::resolve(value, domain)),
        }
    }
}

impl Serialize for Ingredient {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        let (key, location) = match self {
            Ingredient::Item(item) => ("item", item),
            Ingredient::Tag(tag) => ("tag", tag),
            Ingredient::List(list) => {
                if list.iter().any(|ingredient| matches!(ingredient, Ingredient::List(_))) {
                    return Err(serde::ser::Error::custom(
                        "Ingredient lists cannot contain other lists",
                    ));
                }

                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for ingredient in list.iter() {
                    seq.serialize_element(ingredient)?;
                }
                return seq.end();
            }
        };

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(key, location)?;
        map.end()
    }
}

#[test]
fn ingredient_ser_test() {
    use serde_json::to_string;

    assert_eq!(
        to_string(&Ingredient::parse("#notreepunching:saws", "notreepunching")).unwrap(),
        r#"{"tag":"notreepunching:saws"}"#
    );
    assert_eq!(
        to_string(&Ingredient::parse("flint_shard", "notreepunching")).unwrap(),
        r#"{"item":"notreepunching:flint_shard"}"#
    );
    assert_eq!(
        to_string(&Ingredient::List(Box::new([
            Ingredient::parse("minecraft:clay_ball", "notreepunching"),
            Ingredient::parse("#minecraft:logs", "notreepunching"),
        ])))
        .unwrap(),
        r#"[{"item":"minecraft:clay_ball"},{"tag":"minecraft:logs"}]"#
    );
}

#[test]
fn nested_ingredient_lists_fail() {
    let list = Ingredient::List(Box::new([Ingredient::List(Vec::new().into_boxed_slice())]));
    assert!(serde_json::to_string(&list).is_err());
}
