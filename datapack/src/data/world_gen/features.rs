use indexmap::IndexMap;
use ntp_util::ResourceLocation;
use serde::Serialize;
use serde_json::Value;

/// A feature type together with its settings
///
/// Mod features define their own config format, so the config is kept as raw json
#[derive(Serialize, Debug, PartialEq)]
pub struct ConfiguredFeature {
    pub r#type: ResourceLocation,
    pub config: FeatureConfig,
}

pub type FeatureConfig = IndexMap<String, Value>;

/// Decides where and how often a configured feature generates
#[derive(Serialize, Debug, PartialEq)]
pub struct PlacedFeature {
    pub feature: ResourceLocation,
    pub placement: Vec<PlacementModifier>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(tag = "type")]
pub enum PlacementModifier {
    #[serde(rename = "minecraft:biome")]
    Biome,
    #[serde(rename = "minecraft:count")]
    Count { count: IntProvider },
    #[serde(rename = "minecraft:heightmap")]
    Heightmap { heightmap: HeightMaps },
    #[serde(rename = "minecraft:in_square")]
    InSquare,
    #[serde(rename = "minecraft:rarity_filter")]
    RarityFilter { chance: i32 },
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeightMaps {
    MotionBlocking,
    MotionBlockingNoLeaves,
    OceanFloor,
    OceanFloorWg,
    WorldSurface,
    WorldSurfaceWg,
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum IntProvider {
    Constant(i32),
    Provider(IntProviderInternal),
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "type", content = "value")]
pub enum IntProviderInternal {
    #[serde(rename = "minecraft:constant")]
    Constant(i32),
    #[serde(rename = "minecraft:uniform")]
    Uniform {
        min_inclusive: i32,
        max_inclusive: i32,
    },
}

#[test]
fn placed_feature_ser_test() {
    let feature = PlacedFeature {
        feature: ResourceLocation::new("notreepunching", "loose_rocks"),
        placement: vec![
            PlacementModifier::Count {
                count: IntProvider::Constant(5),
            },
            PlacementModifier::InSquare,
            PlacementModifier::Heightmap {
                heightmap: HeightMaps::WorldSurface,
            },
            PlacementModifier::Biome,
        ],
    };

    assert_eq!(
        serde_json::to_string(&feature).unwrap(),
        r#"{"feature":"notreepunching:loose_rocks","placement":[{"type":"minecraft:count","count":5},{"type":"minecraft:in_square"},{"type":"minecraft:heightmap","heightmap":"WORLD_SURFACE"},{"type":"minecraft:biome"}]}"#
    );
}

#[test]
fn configured_feature_ser_test() {
    let feature = ConfiguredFeature {
        r#type: ResourceLocation::new("notreepunching", "loose_rocks"),
        config: FeatureConfig::new(),
    };

    assert_eq!(
        serde_json::to_string(&feature).unwrap(),
        r#"{"type":"notreepunching:loose_rocks","config":{}}"#
    );
}

#[test]
fn uniform_int_provider() {
    let count = IntProvider::Provider(IntProviderInternal::Uniform {
        min_inclusive: 1,
        max_inclusive: 3,
    });

    assert_eq!(
        serde_json::to_string(&count).unwrap(),
        r#"{"type":"minecraft:uniform","value":{"min_inclusive":1,"max_inclusive":3}}"#
    );
}

#[test]
fn rarity_filter_ser_test() {
    assert_eq!(
        serde_json::to_string(&PlacementModifier::RarityFilter { chance: 8 }).unwrap(),
        r#"{"type":"minecraft:rarity_filter","chance":8}"#
    );
}
