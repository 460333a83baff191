use serde::Serialize;

use crate::data::tags::IdsOrTag;

/// A forge biome modifier, read from `data/{ns}/forge/biome_modifier`
#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum BiomeModifier {
    /// Adds placed features to every biome matched by `biomes`
    #[serde(rename = "forge:add_features")]
    AddFeatures {
        biomes: IdsOrTag,
        features: IdsOrTag,
        step: GenerationStep,
    },
}

impl BiomeModifier {
    /// The placed features this modifier refers to
    pub fn features(&self) -> &IdsOrTag {
        match self {
            BiomeModifier::AddFeatures { features, .. } => features,
        }
    }
}

/// The decoration step a feature is placed in
#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStep {
    RawGeneration,
    Lakes,
    LocalModifications,
    UndergroundStructures,
    SurfaceStructures,
    Strongholds,
    UndergroundOres,
    UndergroundDecoration,
    FluidSprings,
    VegetalDecoration,
    TopLayerModification,
}

#[test]
fn add_features_ser_test() {
    let modifier = BiomeModifier::AddFeatures {
        biomes: IdsOrTag::parse("#minecraft:is_overworld", "notreepunching"),
        features: IdsOrTag::parse("notreepunching:loose_rocks", "notreepunching"),
        step: GenerationStep::TopLayerModification,
    };

    assert_eq!(
        serde_json::to_string(&modifier).unwrap(),
        r##"{"type":"forge:add_features","biomes":"#minecraft:is_overworld","features":"notreepunching:loose_rocks","step":"top_layer_modification"}"##
    );
}
