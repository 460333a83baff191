use log::info;
use ntp_datapack::{
    data::{
        biome_modifier::{BiomeModifier, GenerationStep},
        features::{FeatureConfig, HeightMaps, IntProvider, PlacementModifier},
        tags::IdsOrTag,
    },
    DataGenError,
    ResourceLocation,
    ResourceManager,
};

/// Loose rocks are placed on the surface of every overworld biome
///
/// The features live in the common tree, only forge needs the biome modifier to add them.
pub fn do_world_gen(forge: &mut ResourceManager, common: &mut ResourceManager) -> Result<(), DataGenError> {
    info!("Generating world gen");

    common.configured_feature("loose_rocks", "notreepunching:loose_rocks", FeatureConfig::new());
    common.placed_feature("loose_rocks", "notreepunching:loose_rocks", vec![
        PlacementModifier::Count {
            count: IntProvider::Constant(5),
        },
        PlacementModifier::InSquare,
        PlacementModifier::Heightmap {
            heightmap: HeightMaps::WorldSurface,
        },
        PlacementModifier::Biome,
    ])?;

    let feature = "notreepunching:loose_rocks";
    if common.get_placed_feature(feature).is_none() {
        return Err(DataGenError::MissingReference {
            kind: "placed feature",
            location: ResourceLocation::from(feature),
        });
    }

    let domain = forge.domain().to_owned();
    forge.forge_biome_modifier("add_loose_rocks", BiomeModifier::AddFeatures {
        biomes: IdsOrTag::parse("#minecraft:is_overworld", &domain),
        features: IdsOrTag::parse(feature, &domain),
        step: GenerationStep::TopLayerModification,
    });

    Ok(())
}

#[test]
fn biome_modifier_references_resolve() {
    let mut forge = ResourceManager::new("notreepunching", "unused");
    let mut common = ResourceManager::new("notreepunching", "unused");
    do_world_gen(&mut forge, &mut common).unwrap();

    let placed = common.get_placed_feature("loose_rocks").unwrap();
    assert!(common.get_configured_feature(&placed.feature.to_string()).is_some());

    let modifier = forge.get_biome_modifier("add_loose_rocks").unwrap();
    match modifier.features() {
        IdsOrTag::SingleId(id) => assert!(common.get_placed_feature(&id.to_string()).is_some()),
        other => panic!("Expected a single placed feature, got {:?}", other),
    }
    assert!(common.get_biome_modifier("add_loose_rocks").is_none());
}

#[test]
fn placed_feature_json() {
    let mut forge = ResourceManager::new("notreepunching", "unused");
    let mut common = ResourceManager::new("notreepunching", "unused");
    do_world_gen(&mut forge, &mut common).unwrap();

    assert_eq!(
        serde_json::to_value(common.get_placed_feature("loose_rocks").unwrap()).unwrap(),
        serde_json::json!({
            "feature": "notreepunching:loose_rocks",
            "placement": [
                {"type": "minecraft:count", "count": 5},
                {"type": "minecraft:in_square"},
                {"type": "minecraft:heightmap", "heightmap": "WORLD_SURFACE"},
                {"type": "minecraft:biome"}
            ]
        })
    );
}
