use std::{
    fs::{self, File, OpenOptions},
    io::{Result as IoResult, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info};
use ntp_util::ResourceLocation;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    assets::{
        blockstate::BlockState,
        model::{Model, ModelKind},
    },
    data::{
        advancement::{
            conditions::{inventory_changed, AdvancementConditions},
            Advancement,
            AdvancementRequirements,
            AdvancementRewards,
        },
        biome_modifier::BiomeModifier,
        features::{ConfiguredFeature, FeatureConfig, PlacedFeature, PlacementModifier},
        loot_tables::{
            block_state_property,
            explosion_decay,
            set_count,
            survives_explosion,
            LootTable,
            LootTableEntry,
            LootTablePool,
        },
        recipe::{
            cooking::{CampfireRecipe, CookingRecipe, SmeltingRecipe},
            ingredient::Ingredient,
            shaped::ShapedCraftingRecipe,
            shapeless::ShapelessCraftingRecipe,
            smithing::{SmithingOutput, SmithingTransformRecipe},
            stonecutting::StonecuttingRecipe,
            Recipe,
            RecipeCondition,
            RecipeOutput,
            RecipeType,
        },
        tags::{TagDef, TagEntry, TagKind},
    },
    DataGenError,
    LangBuffer,
};

/// The key of the marker every generated json object starts with
pub const COMMENT_KEY: &str = "__comment__";
/// The value of the generated marker
///
/// [clean_generated_resources] only ever deletes files carrying it
pub const GENERATED_COMMENT: &str = "This file was automatically created by ntp_datagen";

/// How many files a flush wrote
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlushStats {
    pub written: usize,
    pub unchanged: usize,
}

/// Holds every resource generated for one resource tree until it is flushed to disk
///
/// Ids given without a namespace resolve to the manager's domain
pub struct ResourceManager {
    domain: String,
    resource_dir: PathBuf,
    pretty_print: bool,
    blockstates: IndexMap<ResourceLocation, BlockState>,
    models: IndexMap<ResourceLocation, Model>,
    tags: IndexMap<(TagKind, ResourceLocation), TagDef>,
    recipes: IndexMap<ResourceLocation, Recipe>,
    advancements: IndexMap<ResourceLocation, Advancement>,
    loot_tables: IndexMap<ResourceLocation, LootTable>,
    configured_features: IndexMap<ResourceLocation, ConfiguredFeature>,
    placed_features: IndexMap<ResourceLocation, PlacedFeature>,
    biome_modifiers: IndexMap<ResourceLocation, BiomeModifier>,
}

impl ResourceManager {
    pub fn new<P: Into<PathBuf>>(domain: &str, resource_dir: P) -> Self {
        ResourceManager {
            domain: domain.to_owned(),
            resource_dir: resource_dir.into(),
            pretty_print: true,
            blockstates: IndexMap::new(),
            models: IndexMap::new(),
            tags: IndexMap::new(),
            recipes: IndexMap::new(),
            advancements: IndexMap::new(),
            loot_tables: IndexMap::new(),
            configured_features: IndexMap::new(),
            placed_features: IndexMap::new(),
            biome_modifiers: IndexMap::new(),
        }
    }

    /// Whether files are written indented or on one line
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// Resolves `name` against the domain of this manager
    pub fn resolve(&self, name: &str) -> ResourceLocation {
        ResourceLocation::resolve(name, &self.domain)
    }

    /// Returns true if nothing is waiting to be flushed
    pub fn is_empty(&self) -> bool {
        self.blockstates.is_empty() &&
            self.models.is_empty() &&
            self.tags.is_empty() &&
            self.recipes.is_empty() &&
            self.advancements.is_empty() &&
            self.loot_tables.is_empty() &&
            self.configured_features.is_empty() &&
            self.placed_features.is_empty() &&
            self.biome_modifiers.is_empty()
    }

    // Assets

    /// A block with a single state rendering `block/{name}`
    pub fn blockstate(&mut self, name: &str) -> BlockContext<'_> {
        let id = self.resolve(name);
        let model = id.with_prefix(ModelKind::Block.folder());
        self.blockstates
            .insert(id.clone(), BlockState::single(&model));
        BlockContext { rm: self, id }
    }

    /// A block without registering anything for it yet
    pub fn block(&mut self, name: &str) -> BlockContext<'_> {
        let id = self.resolve(name);
        BlockContext { rm: self, id }
    }

    pub fn item(&mut self, name: &str) -> ItemContext<'_> {
        let id = self.resolve(name);
        ItemContext { rm: self, id }
    }

    /// An item with a flat model showing `item/{name}`
    pub fn item_model(&mut self, name: &str) -> ItemContext<'_> {
        let id = self.resolve(name);
        let model_id = id.with_prefix(ModelKind::Item.folder());
        self.model(model_id.clone(), Model::generated(&model_id));
        ItemContext { rm: self, id }
    }

    /// Registers `model` at the model id `id`, Ex: `notreepunching:block/loose_rock`
    pub fn model(&mut self, id: ResourceLocation, model: Model) {
        self.models.insert(id, model);
    }

    // Data

    /// Appends `values` to the block tag `name`, creating it if needed
    pub fn block_tag(&mut self, name: &str, values: &[&str]) {
        self.tag(TagKind::Block, name, values)
    }

    /// Appends `values` to the item tag `name`, creating it if needed
    pub fn item_tag(&mut self, name: &str, values: &[&str]) {
        self.tag(TagKind::Item, name, values)
    }

    fn tag(&mut self, kind: TagKind, name: &str, values: &[&str]) {
        let id = self.resolve(name);
        let entries = values
            .iter()
            .map(|value| TagEntry::parse(value, &self.domain))
            .collect::<Vec<_>>();
        self.tags.entry((kind, id)).or_default().append(entries);
    }

    /// Registers a recipe, replacing any recipe with the same id
    pub fn recipe<R: Into<Recipe>>(&mut self, name: &str, recipe: R) -> RecipeContext<'_> {
        let id = self.resolve(name);
        if self.recipes.insert(id.clone(), recipe.into()).is_some() {
            debug!("Replaced recipe {}", id);
        }
        RecipeContext { rm: self, id }
    }

    pub fn crafting_shaped<O: Into<RecipeOutput>>(
        &mut self,
        name: &str,
        pattern: &[&str],
        key: &[(char, &str)],
        result: O,
    ) -> RecipeContext<'_> {
        let key = key
            .iter()
            .map(|(c, ingredient)| (*c, Ingredient::parse(ingredient, &self.domain)))
            .collect();
        let recipe = ShapedCraftingRecipe::new(pattern, key, result.into());
        self.recipe(name, RecipeType::ShapedRecipe(recipe))
    }

    pub fn crafting_shapeless<O: Into<RecipeOutput>>(
        &mut self,
        name: &str,
        ingredients: &[&str],
        result: O,
    ) -> RecipeContext<'_> {
        let recipe = ShapelessCraftingRecipe::new(self.ingredients(ingredients), result.into());
        self.recipe(name, RecipeType::ShapelessRecipe(recipe))
    }

    pub fn smelting(
        &mut self,
        name: &str,
        ingredient: &str,
        result: &str,
        experience: f64,
    ) -> RecipeContext<'_> {
        let recipe: CookingRecipe<SmeltingRecipe> =
            CookingRecipe::new(self.ingredient(ingredient), self.resolve(result), experience);
        self.recipe(name, RecipeType::SmeltingRecipe(recipe))
    }

    pub fn campfire_cooking(
        &mut self,
        name: &str,
        ingredient: &str,
        result: &str,
        experience: f64,
    ) -> RecipeContext<'_> {
        let recipe: CookingRecipe<CampfireRecipe> =
            CookingRecipe::new(self.ingredient(ingredient), self.resolve(result), experience);
        self.recipe(name, RecipeType::CampfireRecipe(recipe))
    }

    pub fn stonecutting(
        &mut self,
        name: &str,
        ingredient: &str,
        result: &str,
        count: u8,
    ) -> RecipeContext<'_> {
        let recipe = StonecuttingRecipe::new(self.ingredient(ingredient), self.resolve(result), count);
        self.recipe(name, RecipeType::StonecuttingRecipe(recipe))
    }

    pub fn smithing_transform(
        &mut self,
        name: &str,
        template: &str,
        base: &str,
        addition: &str,
        result: &str,
    ) -> RecipeContext<'_> {
        let recipe = SmithingTransformRecipe {
            group: None,
            template: self.ingredient(template),
            base: self.ingredient(base),
            addition: self.ingredient(addition),
            result: SmithingOutput {
                item: self.resolve(result),
            },
        };
        self.recipe(name, RecipeType::SmithingTransformRecipe(recipe))
    }

    /// Parses `#tag` or an item id into an ingredient
    pub fn ingredient(&self, value: &str) -> Ingredient {
        Ingredient::parse(value, &self.domain)
    }

    pub fn ingredients(&self, values: &[&str]) -> Vec<Ingredient> {
        values.iter().map(|value| self.ingredient(value)).collect()
    }

    pub fn advancement(&mut self, name: &str, advancement: Advancement) {
        let id = self.resolve(name);
        self.advancements.insert(id, advancement);
    }

    pub fn loot_table(&mut self, name: &str, table: LootTable) {
        let id = self.resolve(name);
        self.loot_tables.insert(id, table);
    }

    /// Replaces the loot table of `block`
    ///
    /// Each inner list of entries is one pool rolled once, so at most one of its entries drops.
    /// Nothing drops from an explosion that destroyed the block.
    pub fn block_loot(&mut self, block: &str, pools: Vec<Vec<LootTableEntry>>) {
        let id = self.resolve(block).with_prefix("blocks");
        let pools = pools
            .into_iter()
            .map(|entries| LootTablePool::new(entries).with_condition(survives_explosion()))
            .collect();
        self.loot_tables.insert(id, LootTable::block(pools));
    }

    pub fn configured_feature(&mut self, name: &str, feature_type: &str, config: FeatureConfig) {
        let id = self.resolve(name);
        let feature = ConfiguredFeature {
            r#type: self.resolve(feature_type),
            config,
        };
        self.configured_features.insert(id, feature);
    }

    /// Registers a placed feature of `feature`
    ///
    /// The configured feature has to be registered in this manager first
    pub fn placed_feature(
        &mut self,
        name: &str,
        feature: &str,
        placement: Vec<PlacementModifier>,
    ) -> Result<(), DataGenError> {
        let feature = self.resolve(feature);
        if !self.configured_features.contains_key(&feature) {
            return Err(DataGenError::MissingReference {
                kind: "configured feature",
                location: feature,
            });
        }

        let id = self.resolve(name);
        self.placed_features
            .insert(id, PlacedFeature { feature, placement });
        Ok(())
    }

    /// Written to `data/{domain}/forge/biome_modifier/{name}.json`
    pub fn forge_biome_modifier(&mut self, name: &str, modifier: BiomeModifier) {
        let id = ResourceLocation::new(&self.domain, name);
        self.biome_modifiers.insert(id, modifier);
    }

    // Getters

    pub fn get_blockstate(&self, name: &str) -> Option<&BlockState> {
        self.blockstates.get(&self.resolve(name))
    }

    /// Gets a model by its model id, Ex: `block/granite_cobblestone`
    pub fn get_model(&self, id: &str) -> Option<&Model> {
        self.models.get(&self.resolve(id))
    }

    pub fn get_tag(&self, kind: TagKind, name: &str) -> Option<&TagDef> {
        self.tags.get(&(kind, self.resolve(name)))
    }

    pub fn get_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(&self.resolve(name))
    }

    pub fn recipes(&self) -> impl Iterator<Item = (&ResourceLocation, &Recipe)> {
        self.recipes.iter()
    }

    pub fn get_advancement(&self, name: &str) -> Option<&Advancement> {
        self.advancements.get(&self.resolve(name))
    }

    pub fn advancements(&self) -> impl Iterator<Item = (&ResourceLocation, &Advancement)> {
        self.advancements.iter()
    }

    pub fn get_loot_table(&self, name: &str) -> Option<&LootTable> {
        self.loot_tables.get(&self.resolve(name))
    }

    pub fn get_configured_feature(&self, name: &str) -> Option<&ConfiguredFeature> {
        self.configured_features.get(&self.resolve(name))
    }

    pub fn get_placed_feature(&self, name: &str) -> Option<&PlacedFeature> {
        self.placed_features.get(&self.resolve(name))
    }

    pub fn placed_features(&self) -> impl Iterator<Item = (&ResourceLocation, &PlacedFeature)> {
        self.placed_features.iter()
    }

    pub fn get_biome_modifier(&self, name: &str) -> Option<&BiomeModifier> {
        self.biome_modifiers
            .get(&ResourceLocation::new(&self.domain, name))
    }

    // Writing

    /// Writes every held resource to disk and clears the manager
    ///
    /// Files whose content would not change are left untouched
    pub fn flush(&mut self) -> Result<FlushStats, DataGenError> {
        let mut stats = FlushStats::default();

        self.write_records("assets", "blockstates", &self.blockstates, &mut stats)?;
        self.write_records("assets", "models", &self.models, &mut stats)?;
        for ((kind, id), tag) in &self.tags {
            let path = self.record_path("data", &format!("tags/{}", kind.folder()), id);
            self.write_json(&path, tag, &mut stats)?;
        }
        self.write_records("data", "recipes", &self.recipes, &mut stats)?;
        self.write_records("data", "advancements", &self.advancements, &mut stats)?;
        self.write_records("data", "loot_tables", &self.loot_tables, &mut stats)?;
        self.write_records(
            "data",
            "worldgen/configured_feature",
            &self.configured_features,
            &mut stats,
        )?;
        self.write_records(
            "data",
            "worldgen/placed_feature",
            &self.placed_features,
            &mut stats,
        )?;
        self.write_records("data", "forge/biome_modifier", &self.biome_modifiers, &mut stats)?;

        info!(
            "Flushed {} files to {}, {} unchanged",
            stats.written,
            self.resource_dir.display(),
            stats.unchanged
        );
        self.clear();
        Ok(stats)
    }

    /// Writes the translations to `assets/{domain}/lang/en_us.json` and empties the buffer
    pub fn flush_lang(&self, lang: &mut LangBuffer) -> Result<FlushStats, DataGenError> {
        let mut stats = FlushStats::default();
        if lang.is_empty() {
            return Ok(stats);
        }

        let path = self
            .resource_dir
            .join("assets")
            .join(&self.domain)
            .join("lang")
            .join("en_us.json");
        self.write_json(&path, &*lang, &mut stats)?;
        info!("Flushed {} translations", lang.len());

        lang.clear();
        Ok(stats)
    }

    fn clear(&mut self) {
        self.blockstates.clear();
        self.models.clear();
        self.tags.clear();
        self.recipes.clear();
        self.advancements.clear();
        self.loot_tables.clear();
        self.configured_features.clear();
        self.placed_features.clear();
        self.biome_modifiers.clear();
    }

    fn record_path(&self, root: &str, folder: &str, id: &ResourceLocation) -> PathBuf {
        self.resource_dir
            .join(root)
            .join(&id.namespace)
            .join(folder)
            .join(format!("{}.json", id.path))
    }

    fn write_records<T: Serialize>(
        &self,
        root: &str,
        folder: &str,
        records: &IndexMap<ResourceLocation, T>,
        stats: &mut FlushStats,
    ) -> Result<(), DataGenError> {
        for (id, record) in records {
            let path = self.record_path(root, folder, id);
            self.write_json(&path, record, stats)?;
        }
        Ok(())
    }

    fn write_json<T: Serialize>(
        &self,
        path: &Path,
        value: &T,
        stats: &mut FlushStats,
    ) -> Result<(), DataGenError> {
        let value = with_marker(serde_json::to_value(value)?);
        let json = if self.pretty_print {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };

        if let Ok(existing) = fs::read_to_string(path) {
            if existing == json {
                stats.unchanged += 1;
                return Ok(());
            }
        }

        let mut file = write_file_recursive(path)?;
        file.write_all(json.as_bytes())?;
        debug!("Wrote {}", path.display());
        stats.written += 1;
        Ok(())
    }
}

fn with_marker(value: Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut marked = Map::new();
            marked.insert(
                COMMENT_KEY.to_owned(),
                Value::String(GENERATED_COMMENT.to_owned()),
            );
            marked.extend(fields);
            Value::Object(marked)
        }
        other => other,
    }
}

fn write_file_recursive<P: AsRef<Path>>(path: P) -> IoResult<File> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .read(false)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Deletes every generated json file under `dir` and the directories left empty
///
/// Returns how many files were deleted, a missing `dir` deletes nothing
pub fn clean_generated_resources<P: AsRef<Path>>(dir: P) -> Result<usize, DataGenError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        debug!("Nothing to clean in {}", dir.display());
        return Ok(0);
    }

    let removed = clean_recursive(dir)?;
    info!("Removed {} generated files from {}", removed, dir.display());
    Ok(removed)
}

fn clean_recursive(path: &Path) -> Result<usize, DataGenError> {
    let mut removed = 0;

    for entry in path.read_dir()? {
        let entry = entry?;
        let entry_path = entry.path();

        if entry.metadata()?.is_dir() {
            let removed_inside = clean_recursive(&entry_path)?;
            // Directories that never held generated files are left alone
            if removed_inside > 0 && entry_path.read_dir()?.next().is_none() {
                fs::remove_dir(&entry_path)?;
            }
            removed += removed_inside;
        } else if is_generated(&entry_path) {
            fs::remove_file(&entry_path)?;
            removed += 1;
        }
    }

    Ok(removed)
}

fn is_generated(path: &Path) -> bool {
    if path.extension().map_or(true, |ext| ext != "json") {
        return false;
    }

    match fs::read_to_string(path)
        .ok()
        .and_then(|json| serde_json::from_str::<Value>(&json).ok())
    {
        Some(Value::Object(fields)) =>
            fields.get(COMMENT_KEY).and_then(Value::as_str) == Some(GENERATED_COMMENT),
        _ => false,
    }
}

/// Adds the resources of one block
pub struct BlockContext<'a> {
    rm: &'a mut ResourceManager,
    id: ResourceLocation,
}

impl<'a> BlockContext<'a> {
    pub fn id(&self) -> &ResourceLocation {
        &self.id
    }

    /// The id of the block model, `{ns}:block/{path}`
    pub fn model_id(&self) -> ResourceLocation {
        self.id.with_prefix(ModelKind::Block.folder())
    }

    pub fn with_blockstate(&mut self, state: BlockState) -> &mut Self {
        self.rm.blockstates.insert(self.id.clone(), state);
        self
    }

    pub fn with_block_model(&mut self, model: Model) -> &mut Self {
        let id = self.model_id();
        self.rm.model(id, model);
        self
    }

    /// A cube with `block/{path}` on all sides
    pub fn with_cube_all_model(&mut self) -> &mut Self {
        let model = Model::cube_all(&self.model_id());
        self.with_block_model(model)
    }

    /// An item model that renders the block model
    pub fn with_item_model(&mut self) -> &mut Self {
        let model = Model::parented(&self.model_id());
        self.rm
            .model(self.id.with_prefix(ModelKind::Item.folder()), model);
        self
    }

    /// Adds this block to the block tag `tag`
    pub fn with_tag(&mut self, tag: &str) -> &mut Self {
        let id = self.id.to_string();
        self.rm.block_tag(tag, &[id.as_str()]);
        self
    }

    /// Adds the block item to the item tag `tag`
    pub fn with_item_tag(&mut self, tag: &str) -> &mut Self {
        let id = self.id.to_string();
        self.rm.item_tag(tag, &[id.as_str()]);
        self
    }

    pub fn with_lang(&mut self, lang: &mut LangBuffer, name: &str) -> &mut Self {
        lang.insert(self.id.translation_key("block"), name);
        self
    }

    pub fn with_block_loot(&mut self, pools: Vec<Vec<LootTableEntry>>) -> &mut Self {
        let id = self.id.to_string();
        self.rm.block_loot(&id, pools);
        self
    }

    /// The block drops itself
    pub fn with_self_loot(&mut self) -> &mut Self {
        let entry = LootTableEntry::item(&self.id.to_string());
        self.with_block_loot(vec![vec![entry]])
    }

    /// Adds `{path}_stairs` using the block model of this block as texture
    pub fn make_stairs(&mut self) -> &mut Self {
        let texture = self.model_id();
        let mut stairs = self.rm.block(&self.id.with_suffix("_stairs").to_string());
        let model = stairs.model_id();

        for (suffix, parent) in [
            ("", "minecraft:block/stairs"),
            ("_inner", "minecraft:block/inner_stairs"),
            ("_outer", "minecraft:block/outer_stairs"),
        ] {
            stairs.rm.model(model.with_suffix(suffix), sided(parent, &texture));
        }

        stairs
            .with_blockstate(BlockState::stairs(&model))
            .with_item_model()
            .with_self_loot();
        self
    }

    /// Adds `{path}_slab`, the double slab renders this block
    pub fn make_slab(&mut self) -> &mut Self {
        let texture = self.model_id();
        let slab_id = self.id.with_suffix("_slab");
        let mut slab = self.rm.block(&slab_id.to_string());
        let model = slab.model_id();

        slab.rm
            .model(model.clone(), sided("minecraft:block/slab", &texture));
        slab.rm.model(
            model.with_suffix("_top"),
            sided("minecraft:block/slab_top", &texture),
        );

        let double = set_count(2)
            .with_condition(block_state_property(&format!("{}[type=double]", slab_id)));
        slab.with_blockstate(BlockState::slab(&model, &texture))
            .with_item_model()
            .with_block_loot(vec![vec![LootTableEntry::item(&slab_id.to_string())
                .with_function(double)
                .with_function(explosion_decay())]]);
        self
    }

    /// Adds `{path}_wall` using the block model of this block as texture
    pub fn make_wall(&mut self) -> &mut Self {
        let texture = self.model_id();
        let mut wall = self.rm.block(&self.id.with_suffix("_wall").to_string());
        let model = wall.model_id();

        for (suffix, parent) in [
            ("_post", "minecraft:block/template_wall_post"),
            ("_side", "minecraft:block/template_wall_side"),
            ("_side_tall", "minecraft:block/template_wall_side_tall"),
            ("_inventory", "minecraft:block/wall_inventory"),
        ] {
            wall.rm.model(
                model.with_suffix(suffix),
                Model::new(parent).with_texture("wall", &texture),
            );
        }

        let item_model = Model::parented(&model.with_suffix("_inventory"));
        wall.rm
            .model(wall.id.with_prefix(ModelKind::Item.folder()), item_model);
        wall.with_blockstate(BlockState::wall(&model))
            .with_self_loot();
        self
    }
}

fn sided(parent: &str, texture: &ResourceLocation) -> Model {
    Model::new(parent)
        .with_texture("bottom", texture)
        .with_texture("top", texture)
        .with_texture("side", texture)
}

/// Adds the resources of one item
pub struct ItemContext<'a> {
    rm: &'a mut ResourceManager,
    id: ResourceLocation,
}

impl<'a> ItemContext<'a> {
    pub fn id(&self) -> &ResourceLocation {
        &self.id
    }

    /// A flat model of `item/{path}` parented to `parent`, Ex: `item/handheld`
    pub fn with_item_model(&mut self, parent: &str) -> &mut Self {
        let texture = self.id.with_prefix(ModelKind::Item.folder());
        self.rm
            .model(texture.clone(), Model::new(parent).with_texture("layer0", &texture));
        self
    }

    /// Adds this item to the item tag `tag`
    pub fn with_tag(&mut self, tag: &str) -> &mut Self {
        let id = self.id.to_string();
        self.rm.item_tag(tag, &[id.as_str()]);
        self
    }

    pub fn with_lang(&mut self, lang: &mut LangBuffer, name: &str) -> &mut Self {
        lang.insert(self.id.translation_key("item"), name);
        self
    }
}

/// A registered recipe, used to attach the advancement that unlocks it
pub struct RecipeContext<'a> {
    rm: &'a mut ResourceManager,
    id: ResourceLocation,
}

impl<'a> RecipeContext<'a> {
    pub fn id(&self) -> &ResourceLocation {
        &self.id
    }

    /// Sets the recipe book group, recipes that have none ignore it
    pub fn with_group(&mut self, group: &str) -> &mut Self {
        if let Some(slot) = self
            .rm
            .recipes
            .get_mut(&self.id)
            .and_then(|recipe| recipe.kind.group_mut())
        {
            *slot = Some(group.to_owned());
        }
        self
    }

    /// Only loads the recipe when forge accepts `condition`
    pub fn with_condition(&mut self, condition: RecipeCondition) -> &mut Self {
        if let Some(recipe) = self.rm.recipes.get_mut(&self.id) {
            recipe.conditions.push(condition);
        }
        self
    }

    /// Unlocks the recipe once the player holds `item`, `#ns:path` checks a tag
    ///
    /// Written to `{ns}:recipes/{path}` under the vanilla recipe book root
    pub fn with_advancement(&mut self, item: &str) -> &mut Self {
        let mut criteria = IndexMap::new();
        criteria.insert(
            "has_item".to_owned(),
            inventory_changed(item, &self.rm.domain),
        );
        criteria.insert(
            "has_the_recipe".to_owned(),
            AdvancementConditions::RecipeUnlocked {
                recipe: self.id.clone(),
            },
        );

        let advancement = Advancement {
            parent: Some(ResourceLocation::minecraft("recipes/root")),
            display: None,
            criteria,
            requirements: Some(AdvancementRequirements::any_of(&[&[
                "has_item",
                "has_the_recipe",
            ]])),
            rewards: Some(AdvancementRewards {
                recipes: Some(vec![self.id.clone()]),
                ..Default::default()
            }),
        };

        self.rm
            .advancements
            .insert(self.id.with_prefix("recipes"), advancement);
        self
    }
}

#[test]
fn tags_accumulate_in_order() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    rm.item_tag("h/sticks", &["minecraft:stick"]);
    rm.item_tag("h/sticks", &["#c:wood_sticks?"]);
    rm.item_tag("empty", &[]);

    let sticks = rm.get_tag(TagKind::Item, "h/sticks").unwrap();
    assert_eq!(sticks.values, vec![
        TagEntry::parse("minecraft:stick", "notreepunching"),
        TagEntry::parse("#c:wood_sticks?", "notreepunching"),
    ]);
    assert!(rm.get_tag(TagKind::Item, "empty").unwrap().values.is_empty());
    assert!(rm.get_tag(TagKind::Block, "h/sticks").is_none());
}

#[test]
fn recipes_last_write_wins() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    rm.crafting_shapeless("minecraft:stick", &["#minecraft:planks"], (4, "minecraft:stick"));
    rm.recipe("minecraft:stick", Recipe::empty());

    assert_eq!(rm.recipes().count(), 1);
    assert_eq!(rm.get_recipe("minecraft:stick"), Some(&Recipe::empty()));
}

#[test]
fn recipe_advancement() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    rm.crafting_shapeless("flint_from_gravel", &["minecraft:gravel"; 3], (2, "minecraft:flint"))
        .with_advancement("minecraft:gravel");

    let advancement = rm
        .get_advancement("notreepunching:recipes/flint_from_gravel")
        .unwrap();
    assert_eq!(advancement.parent, Some(ResourceLocation::minecraft("recipes/root")));
    assert!(advancement.undefined_requirements().is_empty());
    assert_eq!(
        serde_json::to_value(&advancement.rewards).unwrap(),
        serde_json::json!({"recipes": ["notreepunching:flint_from_gravel"]})
    );
}

#[test]
fn placed_feature_needs_configured_feature() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    let missing = rm.placed_feature("loose_rocks", "loose_rocks", Vec::new());
    assert!(matches!(missing, Err(DataGenError::MissingReference { .. })));

    rm.configured_feature("loose_rocks", "notreepunching:loose_rocks", FeatureConfig::new());
    assert!(rm
        .placed_feature("loose_rocks", "loose_rocks", Vec::new())
        .is_ok());
    assert!(rm.get_placed_feature("loose_rocks").is_some());
}

#[test]
fn block_loot_replaces() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    rm.block_loot("minecraft:grass", vec![vec![LootTableEntry::item("minecraft:grass")]]);
    rm.block_loot("minecraft:grass", vec![
        vec![
            LootTableEntry::item("minecraft:grass"),
            LootTableEntry::item("notreepunching:plant_fiber"),
        ],
        vec![LootTableEntry::item("minecraft:wheat_seeds")],
    ]);

    let table = rm.get_loot_table("minecraft:blocks/grass").unwrap();
    assert_eq!(table.pools.len(), 2);
    assert_eq!(table.pools[0].entries.len(), 2);
    assert_eq!(table.pools[1].entries.len(), 1);
    assert!(table
        .pools
        .iter()
        .all(|pool| pool.conditions == vec![survives_explosion()]));
}

#[test]
fn stairs_slab_and_wall_resources() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    rm.blockstate("granite_cobblestone")
        .with_cube_all_model()
        .make_stairs()
        .make_slab()
        .make_wall();

    assert_eq!(rm.get_blockstate("granite_cobblestone_stairs").unwrap().len(), 40);
    assert_eq!(rm.get_blockstate("granite_cobblestone_slab").unwrap().len(), 3);
    assert_eq!(rm.get_blockstate("granite_cobblestone_wall").unwrap().len(), 9);

    for model in [
        "block/granite_cobblestone_stairs_inner",
        "block/granite_cobblestone_slab_top",
        "block/granite_cobblestone_wall_side_tall",
        "item/granite_cobblestone_wall",
    ] {
        assert!(rm.get_model(model).is_some(), "missing model {}", model);
    }

    let slab_loot = rm
        .get_loot_table("blocks/granite_cobblestone_slab")
        .unwrap();
    assert_eq!(slab_loot.pools[0].entries[0].functions.len(), 2);
}
