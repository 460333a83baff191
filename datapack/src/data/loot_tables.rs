use indexmap::IndexMap;
use ntp_util::ResourceLocation;
use serde::Serialize;

use crate::data::datatypes::{ItemPredicate, PredicateLocation};

/// A [loot table](https://minecraft.fandom.com/wiki/Loot_table)
#[derive(Serialize, Debug, PartialEq)]
pub struct LootTable {
    pub r#type: LootTableType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<LootFunction>,
    pub pools: Vec<LootTablePool>,
}

impl LootTable {
    pub fn block(pools: Vec<LootTablePool>) -> Self {
        LootTable {
            r#type: LootTableType::Block,
            functions: Vec::new(),
            pools,
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LootTableType {
    #[serde(rename = "minecraft:empty")]
    Empty,
    #[serde(rename = "minecraft:entity")]
    Entity,
    #[serde(rename = "minecraft:block")]
    Block,
    #[serde(rename = "minecraft:chest")]
    Chest,
    #[serde(rename = "minecraft:generic")]
    Generic,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct LootTablePool {
    pub rolls: NumberProvider<i32>,
    pub entries: Vec<LootTableEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<LootCondition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<LootFunction>,
}

impl LootTablePool {
    /// A pool that rolls once over `entries`
    pub fn new(entries: Vec<LootTableEntry>) -> Self {
        LootTablePool {
            rolls: NumberProvider::Singleton(1),
            entries,
            conditions: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: LootCondition) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// One possible drop of a pool
///
/// Every condition must pass for the entry to be picked
#[derive(Serialize, Debug, PartialEq)]
pub struct LootTableEntry {
    #[serde(flatten)]
    pub r#type: LootTableEntryType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<LootCondition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<LootFunction>,
}

impl LootTableEntry {
    /// An entry dropping the item `name`, names without a namespace are vanilla items
    pub fn item(name: &str) -> Self {
        LootTableEntry {
            r#type: LootTableEntryType::Item {
                name: ResourceLocation::from(name),
            },
            conditions: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: LootCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_conditions<I: IntoIterator<Item = LootCondition>>(mut self, conditions: I) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn with_function(mut self, function: LootFunction) -> Self {
        self.functions.push(function);
        self
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum LootTableEntryType {
    #[serde(rename = "minecraft:item")]
    Item { name: ResourceLocation },
    #[serde(rename = "minecraft:tag")]
    Tag { name: ResourceLocation, expand: bool },
    #[serde(rename = "minecraft:empty")]
    Empty,
}

/// A predicate checked while rolling a loot table
///
/// Also used by advancement triggers that check the location of an event
#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(tag = "condition")]
pub enum LootCondition {
    #[serde(rename = "minecraft:block_state_property")]
    BlockStateProperty {
        block: ResourceLocation,
        properties: IndexMap<String, String>,
    },
    #[serde(rename = "minecraft:location_check")]
    LocationCheck { predicate: PredicateLocation },
    #[serde(rename = "minecraft:match_tool")]
    MatchTool { predicate: ItemPredicate },
    #[serde(rename = "minecraft:random_chance")]
    RandomChance { chance: f32 },
    #[serde(rename = "minecraft:survives_explosion")]
    SurvivesExplosion,
}

/// A function applied to the items an entry or pool drops
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct LootFunction {
    #[serde(flatten)]
    pub function: LootFunctionType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<LootCondition>,
}

impl LootFunction {
    pub fn with_condition(mut self, condition: LootCondition) -> Self {
        self.conditions.push(condition);
        self
    }
}

impl From<LootFunctionType> for LootFunction {
    fn from(function: LootFunctionType) -> Self {
        LootFunction {
            function,
            conditions: Vec::new(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(tag = "function")]
pub enum LootFunctionType {
    #[serde(rename = "minecraft:apply_bonus")]
    ApplyBonus {
        enchantment: ResourceLocation,
        formula: ResourceLocation,
        parameters: BonusParameters,
    },
    #[serde(rename = "minecraft:copy_name")]
    CopyName { source: CopySource },
    #[serde(rename = "minecraft:copy_nbt")]
    CopyNbt {
        source: CopySource,
        ops: Vec<CopyNbtOperation>,
    },
    #[serde(rename = "minecraft:explosion_decay")]
    ExplosionDecay,
    #[serde(rename = "minecraft:set_count")]
    SetCount { count: NumberProvider<i32> },
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct BonusParameters {
    #[serde(rename = "bonusMultiplier")]
    pub bonus_multiplier: i32,
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CopySource {
    BlockEntity,
    This,
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct CopyNbtOperation {
    pub source: String,
    pub target: String,
    pub op: CopyNbtOp,
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CopyNbtOp {
    Replace,
    Append,
    Merge,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(untagged)]
pub enum NumberProvider<T> {
    Singleton(T),
    Object(NumberProviderInternal<T>),
}

#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(tag = "type")]
pub enum NumberProviderInternal<T> {
    #[serde(rename = "minecraft:constant")]
    Constant { value: T },
    #[serde(rename = "minecraft:uniform")]
    Uniform {
        min: Box<NumberProvider<T>>,
        max: Box<NumberProvider<T>>,
    },
}

/// Passes when the tool used is in the item tag `tag`
pub fn match_tag(tag: &str) -> LootCondition {
    LootCondition::MatchTool {
        predicate: ItemPredicate {
            tag: Some(ResourceLocation::from(tag)),
            ..Default::default()
        },
    }
}

pub fn random_chance(chance: f32) -> LootCondition {
    LootCondition::RandomChance { chance }
}

pub fn survives_explosion() -> LootCondition {
    LootCondition::SurvivesExplosion
}

/// Parses a block state string such as `minecraft:tall_grass[half=lower]`
///
/// A state without properties checks nothing beyond the block.
pub fn block_state_property(state: &str) -> LootCondition {
    let (block, properties) = match state.split_once('[') {
        Some((block, rest)) => (block, rest.trim_end_matches(']')),
        None => (state, ""),
    };

    LootCondition::BlockStateProperty {
        block: ResourceLocation::from(block),
        properties: properties
            .split(',')
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
            .collect(),
    }
}

/// The uniform fortune bonus vanilla uses for seeds
pub fn fortune_bonus(multiplier: i32) -> LootFunction {
    LootFunctionType::ApplyBonus {
        enchantment: ResourceLocation::minecraft("fortune"),
        formula: ResourceLocation::minecraft("uniform_bonus_count"),
        parameters: BonusParameters {
            bonus_multiplier: multiplier,
        },
    }
    .into()
}

pub fn explosion_decay() -> LootFunction {
    LootFunctionType::ExplosionDecay.into()
}

pub fn copy_block_entity_name() -> LootFunction {
    LootFunctionType::CopyName {
        source: CopySource::BlockEntity,
    }
    .into()
}

/// Copies the whole block entity tag onto the dropped item
pub fn copy_block_entity_nbt() -> LootFunction {
    LootFunctionType::CopyNbt {
        source: CopySource::BlockEntity,
        ops: vec![CopyNbtOperation {
            source: String::new(),
            target: "BlockEntityTag".to_owned(),
            op: CopyNbtOp::Replace,
        }],
    }
    .into()
}

pub fn set_count(count: i32) -> LootFunction {
    LootFunctionType::SetCount {
        count: NumberProvider::Singleton(count),
    }
    .into()
}

#[test]
fn block_state_property_parsing() {
    assert_eq!(
        serde_json::to_string(&block_state_property("minecraft:tall_grass[half=lower]")).unwrap(),
        r#"{"condition":"minecraft:block_state_property","block":"minecraft:tall_grass","properties":{"half":"lower"}}"#
    );

    match block_state_property("notreepunching:granite_cobblestone_slab") {
        LootCondition::BlockStateProperty { block, properties } => {
            assert_eq!(block, "notreepunching:granite_cobblestone_slab");
            assert!(properties.is_empty());
        }
        other => panic!("Unexpected condition {:?}", other),
    }
}

#[test]
fn loot_entry_ser_test() {
    let entry = LootTableEntry::item("minecraft:wheat_seeds")
        .with_conditions([match_tag("notreepunching:sharp_tools"), random_chance(0.125)])
        .with_function(fortune_bonus(2))
        .with_function(explosion_decay());

    assert_eq!(
        serde_json::to_string(&entry).unwrap(),
        r#"{"type":"minecraft:item","name":"minecraft:wheat_seeds","conditions":[{"condition":"minecraft:match_tool","predicate":{"tag":"notreepunching:sharp_tools"}},{"condition":"minecraft:random_chance","chance":0.125}],"functions":[{"function":"minecraft:apply_bonus","enchantment":"minecraft:fortune","formula":"minecraft:uniform_bonus_count","parameters":{"bonusMultiplier":2}},{"function":"minecraft:explosion_decay"}]}"#
    );
}

#[test]
fn conditional_function_ser_test() {
    let function = set_count(2).with_condition(block_state_property(
        "notreepunching:diorite_cobblestone_slab[type=double]",
    ));

    assert_eq!(
        serde_json::to_string(&function).unwrap(),
        r#"{"function":"minecraft:set_count","count":2,"conditions":[{"condition":"minecraft:block_state_property","block":"notreepunching:diorite_cobblestone_slab","properties":{"type":"double"}}]}"#
    );
}

#[test]
fn block_table_ser_test() {
    let table = LootTable::block(vec![
        LootTablePool::new(vec![LootTableEntry::item("notreepunching:ceramic_large_vessel")
            .with_function(copy_block_entity_name())])
        .with_condition(survives_explosion()),
    ]);

    assert_eq!(
        serde_json::to_string(&table).unwrap(),
        r#"{"type":"minecraft:block","pools":[{"rolls":1,"entries":[{"type":"minecraft:item","name":"notreepunching:ceramic_large_vessel","functions":[{"function":"minecraft:copy_name","source":"block_entity"}]}],"conditions":[{"condition":"minecraft:survives_explosion"}]}]}"#
    );
}
