use indexmap::IndexMap;
use ntp_util::ResourceLocation;
use serde::Serialize;

/// A [blockstate](https://minecraft.fandom.com/wiki/Tutorials/Models#Block_states) file
///
/// Maps the states of a block to the models rendered for them
#[derive(Serialize, Debug, PartialEq)]
pub enum BlockState {
    /// Exactly one model is picked per state, keyed by `prop=value,...`
    #[serde(rename = "variants")]
    Variants(IndexMap<String, VariantModel>),
    /// Every case whose `when` matches the state adds its model
    #[serde(rename = "multipart")]
    Multipart(Vec<MultipartCase>),
}

/// A model reference with the rotation it is rendered with
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct VariantModel {
    pub model: ResourceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u16>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub uvlock: bool,
}

impl VariantModel {
    pub fn new(model: &ResourceLocation) -> Self {
        VariantModel {
            model: model.clone(),
            x: None,
            y: None,
            uvlock: false,
        }
    }

    /// Rotates the model, textures stay locked to the world whenever the model is rotated
    pub fn rotated(model: &ResourceLocation, x: u16, y: u16) -> Self {
        let x = x % 360;
        let y = y % 360;
        VariantModel {
            model: model.clone(),
            x: (x != 0).then(|| x),
            y: (y != 0).then(|| y),
            uvlock: x != 0 || y != 0,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct MultipartCase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<IndexMap<String, String>>,
    pub apply: VariantModel,
}

const HORIZONTAL: [(&str, u16); 4] = [("east", 0), ("north", 270), ("south", 90), ("west", 180)];
const STAIR_SHAPES: [&str; 5] = ["straight", "inner_left", "inner_right", "outer_left", "outer_right"];

impl BlockState {
    /// A block with a single state
    pub fn single(model: &ResourceLocation) -> Self {
        let mut variants = IndexMap::new();
        variants.insert(String::new(), VariantModel::new(model));
        BlockState::Variants(variants)
    }

    /// The 40 variants of a stair block, matching vanilla rotations
    ///
    /// `model` is the straight model, the corner models are `model` suffixed with `_inner` and `_outer`
    pub fn stairs(model: &ResourceLocation) -> Self {
        let inner = model.with_suffix("_inner");
        let outer = model.with_suffix("_outer");
        let mut variants = IndexMap::new();

        for (facing, facing_y) in HORIZONTAL {
            for half in ["bottom", "top"] {
                for shape in STAIR_SHAPES {
                    let shape_model = match shape {
                        "straight" => model,
                        "inner_left" | "inner_right" => &inner,
                        _ => &outer,
                    };
                    let left = shape.ends_with("_left");
                    let right = shape.ends_with("_right");

                    let (x, y) = match half {
                        "bottom" if left => (0, facing_y + 270),
                        "bottom" => (0, facing_y),
                        _ if right => (180, facing_y + 90),
                        _ => (180, facing_y),
                    };

                    variants.insert(
                        format!("facing={},half={},shape={}", facing, half, shape),
                        VariantModel::rotated(shape_model, x, y),
                    );
                }
            }
        }

        BlockState::Variants(variants)
    }

    /// A slab, the double slab renders `double` which is usually the full block model
    pub fn slab(model: &ResourceLocation, double: &ResourceLocation) -> Self {
        let mut variants = IndexMap::new();
        variants.insert("type=bottom".to_owned(), VariantModel::new(model));
        variants.insert(
            "type=top".to_owned(),
            VariantModel::new(&model.with_suffix("_top")),
        );
        variants.insert("type=double".to_owned(), VariantModel::new(double));
        BlockState::Variants(variants)
    }

    /// A wall, built from the `_post`, `_side` and `_side_tall` suffixed models
    pub fn wall(model: &ResourceLocation) -> Self {
        let mut cases = vec![MultipartCase {
            when: Some(when("up", "true")),
            apply: VariantModel::new(&model.with_suffix("_post")),
        }];

        for (height, suffix) in [("low", "_side"), ("tall", "_side_tall")] {
            let side = model.with_suffix(suffix);
            for (direction, y) in [("north", 0), ("east", 90), ("south", 180), ("west", 270)] {
                cases.push(MultipartCase {
                    when: Some(when(direction, height)),
                    apply: VariantModel {
                        uvlock: true,
                        ..VariantModel::rotated(&side, 0, y)
                    },
                });
            }
        }

        BlockState::Multipart(cases)
    }

    /// The number of variants or multipart cases
    pub fn len(&self) -> usize {
        match self {
            BlockState::Variants(variants) => variants.len(),
            BlockState::Multipart(cases) => cases.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn variant(&self, state: &str) -> Option<&VariantModel> {
        match self {
            BlockState::Variants(variants) => variants.get(state),
            BlockState::Multipart(_) => None,
        }
    }
}

fn when(property: &str, value: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    map.insert(property.to_owned(), value.to_owned());
    map
}

#[test]
fn single_variant_ser_test() {
    let state = BlockState::single(&ResourceLocation::new("notreepunching", "block/clay_worked"));

    assert_eq!(
        serde_json::to_string(&state).unwrap(),
        r#"{"variants":{"":{"model":"notreepunching:block/clay_worked"}}}"#
    );
}

#[test]
fn stair_rotations_match_vanilla() {
    let model = ResourceLocation::new("notreepunching", "block/granite_cobblestone_stairs");
    let state = BlockState::stairs(&model);
    let get = |key: &str| state.variant(key).unwrap().clone();

    assert_eq!(state.len(), 40);

    let straight = get("facing=east,half=bottom,shape=straight");
    assert_eq!((straight.x, straight.y, straight.uvlock), (None, None, false));

    let inner_left = get("facing=east,half=bottom,shape=inner_left");
    assert_eq!(inner_left.model, model.with_suffix("_inner"));
    assert_eq!((inner_left.x, inner_left.y, inner_left.uvlock), (None, Some(270), true));

    let north = get("facing=north,half=bottom,shape=inner_left");
    assert_eq!(north.y, Some(180));

    let top_right = get("facing=north,half=top,shape=inner_right");
    assert_eq!((top_right.x, top_right.y, top_right.uvlock), (Some(180), None, true));

    let south_top = get("facing=south,half=top,shape=outer_right");
    assert_eq!(south_top.model, model.with_suffix("_outer"));
    assert_eq!((south_top.x, south_top.y), (Some(180), Some(180)));

    let west = get("facing=west,half=bottom,shape=straight");
    assert_eq!((west.y, west.uvlock), (Some(180), true));
}

#[test]
fn slab_variants() {
    let model = ResourceLocation::new("notreepunching", "block/diorite_cobblestone_slab");
    let full = ResourceLocation::new("notreepunching", "block/diorite_cobblestone");

    assert_eq!(
        serde_json::to_string(&BlockState::slab(&model, &full)).unwrap(),
        r#"{"variants":{"type=bottom":{"model":"notreepunching:block/diorite_cobblestone_slab"},"type=top":{"model":"notreepunching:block/diorite_cobblestone_slab_top"},"type=double":{"model":"notreepunching:block/diorite_cobblestone"}}}"#
    );
}

#[test]
fn wall_multipart() {
    let state = BlockState::wall(&ResourceLocation::new(
        "notreepunching",
        "block/andesite_cobblestone_wall",
    ));

    assert_eq!(state.len(), 9);
    match state {
        BlockState::Multipart(cases) => {
            assert_eq!(
                serde_json::to_string(&cases[0]).unwrap(),
                r#"{"when":{"up":"true"},"apply":{"model":"notreepunching:block/andesite_cobblestone_wall_post"}}"#
            );
            assert_eq!(
                serde_json::to_string(&cases[1]).unwrap(),
                r#"{"when":{"north":"low"},"apply":{"model":"notreepunching:block/andesite_cobblestone_wall_side","uvlock":true}}"#
            );
            assert_eq!(
                serde_json::to_string(&cases[8]).unwrap(),
                r#"{"when":{"west":"tall"},"apply":{"model":"notreepunching:block/andesite_cobblestone_wall_side_tall","y":270,"uvlock":true}}"#
            );
        }
        BlockState::Variants(_) => panic!("Walls are multipart"),
    }
}
