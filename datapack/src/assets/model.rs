use indexmap::IndexMap;
use ntp_util::ResourceLocation;
use serde::Serialize;

/// A block or item model
///
/// Only parented models are written, the geometry always comes from the parent
#[derive(Serialize, Debug, PartialEq, Clone, Default)]
pub struct Model {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub textures: IndexMap<String, ResourceLocation>,
}

impl Model {
    /// A model with `parent`, names without a namespace are vanilla models
    pub fn new(parent: &str) -> Self {
        Model {
            parent: Some(ResourceLocation::from(parent)),
            textures: IndexMap::new(),
        }
    }

    pub fn with_texture(mut self, key: &str, texture: &ResourceLocation) -> Self {
        self.textures.insert(key.to_owned(), texture.clone());
        self
    }

    /// A full cube with the same texture on every side
    pub fn cube_all(texture: &ResourceLocation) -> Self {
        Model::new("minecraft:block/cube_all").with_texture("all", texture)
    }

    /// A flat item model showing `texture`
    pub fn generated(texture: &ResourceLocation) -> Self {
        Model::new("minecraft:item/generated").with_texture("layer0", texture)
    }

    /// An item model that only points at another model
    pub fn parented(parent: &ResourceLocation) -> Self {
        Model {
            parent: Some(parent.clone()),
            textures: IndexMap::new(),
        }
    }
}

/// Which `models` folder a model lives in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModelKind {
    Block,
    Item,
}

impl ModelKind {
    pub fn folder(&self) -> &'static str {
        match self {
            ModelKind::Block => "block",
            ModelKind::Item => "item",
        }
    }
}

#[test]
fn model_ser_test() {
    let texture = ResourceLocation::minecraft("block/granite");
    let model = Model::new("notreepunching:block/loose_rock").with_texture("all", &texture);

    assert_eq!(
        serde_json::to_string(&model).unwrap(),
        r#"{"parent":"notreepunching:block/loose_rock","textures":{"all":"minecraft:block/granite"}}"#
    );
    assert_eq!(
        serde_json::to_string(&Model::parented(&ResourceLocation::new(
            "notreepunching",
            "block/clay_worked"
        )))
        .unwrap(),
        r#"{"parent":"notreepunching:block/clay_worked"}"#
    );
}

#[test]
fn generated_item_model() {
    let texture = ResourceLocation::new("notreepunching", "item/flint_shard");
    assert_eq!(
        serde_json::to_string(&Model::generated(&texture)).unwrap(),
        r#"{"parent":"minecraft:item/generated","textures":{"layer0":"notreepunching:item/flint_shard"}}"#
    );
}

#[test]
fn handheld_parent_resolves_to_vanilla() {
    assert_eq!(
        Model::new("item/handheld").parent,
        Some(ResourceLocation::minecraft("item/handheld"))
    );
}
