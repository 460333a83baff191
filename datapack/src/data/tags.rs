use ntp_util::ResourceLocation;
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize,
};

/// Which registry a [tag](https://minecraft.fandom.com/wiki/Tag) groups
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TagKind {
    Block,
    Item,
}

impl TagKind {
    /// The folder under `tags/` the tag files of this kind live in
    pub fn folder(&self) -> &'static str {
        match self {
            TagKind::Block => "blocks",
            TagKind::Item => "items",
        }
    }
}

/// The raw json definition of a tag
///
/// Tags only ever grow: values are appended in the order they are declared
#[derive(Serialize, Debug, PartialEq)]
pub struct TagDef {
    pub replace: bool,
    pub values: Vec<TagEntry>,
}

impl TagDef {
    pub fn new() -> Self {
        TagDef {
            replace: false,
            values: Vec::new(),
        }
    }

    pub fn append<I: IntoIterator<Item = TagEntry>>(&mut self, entries: I) {
        self.values.extend(entries);
    }
}

impl Default for TagDef {
    fn default() -> Self {
        TagDef::new()
    }
}

/// One value of a tag
#[derive(Debug, PartialEq, Clone)]
pub enum TagEntry {
    /// A single id, Ex: `minecraft:stone`
    Id(ResourceLocation),
    /// A tag entry, Ex: `#minecraft:logs`
    ///
    /// The '#' is not stored, it is added when serializing
    Tag(ResourceLocation),
    /// An entry that is skipped instead of failing the whole tag when lookup fails
    ///
    /// TagEntry in this context cannot be another FailableEntry,
    /// this is enforced in the Serialize impl
    ///
    /// See [the minecraft wiki](https://minecraft.fandom.com/wiki/Tag#JSON_format) for more details
    FailableEntry(Box<TagEntry>, bool),
}

impl TagEntry {
    /// Parses the short form used when declaring tags
    ///
    /// `#` marks a tag reference and a trailing `?` marks the entry as not required.
    /// Values without a namespace resolve to `domain`.
    pub fn parse(value: &str, domain: &str) -> TagEntry {
        if let Some(optional) = value.strip_suffix('?') {
            return TagEntry::FailableEntry(Box::new(TagEntry::parse(optional, domain)), false);
        }

        match value.strip_prefix('#') {
            Some(tag) => TagEntry::Tag(ResourceLocation::resolve(tag, domain)),
            None => TagEntry::Id(ResourceLocation::resolve(value, domain)),
        }
    }
}

impl Serialize for TagEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        match self {
            TagEntry::Id(id) => serializer.collect_str(id),
            TagEntry::Tag(tag) => serializer.serialize_str(&format!("#{}", tag)),
            TagEntry::FailableEntry(entry, required) => {
                let mut map = serializer.serialize_map(Some(2))?;
                match entry.as_ref() {
                    TagEntry::Id(id) => map.serialize_entry("id", id)?,
                    TagEntry::Tag(tag) => map.serialize_entry("id", &format!("#{}", tag))?,
                    TagEntry::FailableEntry(..) =>
                        return Err(serde::ser::Error::custom(
                            "TagEntry::FailableEntry cannot contain another FailableEntry",
                        )),
                };
                map.serialize_entry("required", required)?;
                map.end()
            }
        }
    }
}

/// A field that can be a reference to either an id, a tag, or a list of ids
///
/// Vanilla has the single id case be sugar for [id] internally but we store them seperately
#[derive(Hash, PartialEq, Eq, Debug, Clone)]
pub enum IdsOrTag {
    SingleTag(ResourceLocation),
    SingleId(ResourceLocation),
    IdList(Vec<ResourceLocation>),
}

impl IdsOrTag {
    /// Parses `#ns:path` as a tag and anything else as a single id
    pub fn parse(value: &str, domain: &str) -> IdsOrTag {
        match value.strip_prefix('#') {
            Some(tag) => IdsOrTag::SingleTag(ResourceLocation::resolve(tag, domain)),
            None => IdsOrTag::SingleId(ResourceLocation::resolve(value, domain)),
        }
    }
}

impl Serialize for IdsOrTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        match self {
            IdsOrTag::SingleTag(location) => serializer.serialize_str(&format!("#{location}")),
            IdsOrTag::SingleId(location) => serializer.collect_str(location),
            IdsOrTag::IdList(locations) => {
                let mut seq = serializer.serialize_seq(Some(locations.len()))?;
                for location in locations {
                    seq.serialize_element(location)?
                }
                seq.end()
            }
        }
    }
}

#[test]
fn tag_entry_parsing() {
    assert_eq!(
        TagEntry::parse("minecraft:stick", "notreepunching"),
        TagEntry::Id(ResourceLocation::minecraft("stick"))
    );
    assert_eq!(
        TagEntry::parse("#notreepunching:h/string", "notreepunching"),
        TagEntry::Tag(ResourceLocation::new("notreepunching", "h/string"))
    );
    assert_eq!(
        TagEntry::parse("#forge:rods/wooden?", "notreepunching"),
        TagEntry::FailableEntry(
            Box::new(TagEntry::Tag(ResourceLocation::new("forge", "rods/wooden"))),
            false
        )
    );
    assert_eq!(
        TagEntry::parse("loose_rocks", "notreepunching"),
        TagEntry::Id(ResourceLocation::new("notreepunching", "loose_rocks"))
    );
}

#[test]
fn tag_serialization() {
    let mut tag = TagDef::new();
    tag.append(
        ["minecraft:stick", "#c:wood_sticks?", "#notreepunching:h/sticks"]
            .iter()
            .map(|v| TagEntry::parse(v, "notreepunching")),
    );

    assert_eq!(
        serde_json::to_string(&tag).unwrap(),
        r##"{"replace":false,"values":["minecraft:stick",{"id":"#c:wood_sticks","required":false},"#notreepunching:h/sticks"]}"##
    );
}

#[test]
fn nested_failable_entries_fail() {
    let entry = TagEntry::FailableEntry(
        Box::new(TagEntry::FailableEntry(
            Box::new(TagEntry::Id(ResourceLocation::minecraft("stone"))),
            false,
        )),
        false,
    );

    assert!(serde_json::to_string(&entry).is_err());
}

#[test]
fn ids_or_tag_test() {
    use serde_json::to_string;

    assert_eq!(
        to_string(&IdsOrTag::parse("#minecraft:is_overworld", "notreepunching")).unwrap(),
        r##""#minecraft:is_overworld""##
    );
    assert_eq!(
        to_string(&IdsOrTag::parse("loose_rocks", "notreepunching")).unwrap(),
        r#""notreepunching:loose_rocks""#
    );
    assert_eq!(
        to_string(&IdsOrTag::IdList(vec![
            ResourceLocation::minecraft("plains"),
            ResourceLocation::minecraft("forest")
        ]))
        .unwrap(),
        r#"["minecraft:plains","minecraft:forest"]"#
    );
}
