use std::fmt::{self, Debug, Display, Formatter};

use serde::{Serialize, Serializer};

/// A resource location is a two-part identifier composed of a namespace and a path separated
/// by a colon. The path may contain several segments separated by `/`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    /// The namespace of this resource location.
    pub namespace: String,
    /// The path portion of this resource location.
    pub path: String,
}

impl ResourceLocation {
    /// Creates a resource location from its two parts.
    pub fn new(namespace: &str, path: &str) -> ResourceLocation {
        ResourceLocation {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        }
    }

    /// Returns a resource location with namespace "minecraft" and the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ntp_util::ResourceLocation;
    /// let stone = ResourceLocation::minecraft("stone");
    ///
    /// assert_eq!(stone.namespace, "minecraft");
    /// assert_eq!(stone.path, "stone");
    /// ```
    #[inline]
    pub fn minecraft(path: &str) -> ResourceLocation {
        ResourceLocation::new("minecraft", path)
    }

    /// Resolves the given string into a resource location.
    ///
    /// If the string is not in the form `namespace:path` then it is assumed that just a path
    /// was provided, and `domain` is used as the namespace. A leading `#` is not stripped, callers
    /// deal with tag references before resolving.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ntp_util::ResourceLocation;
    /// let rock = ResourceLocation::resolve("stone_loose_rock", "notreepunching");
    /// assert_eq!(rock.to_string(), "notreepunching:stone_loose_rock");
    ///
    /// let stick = ResourceLocation::resolve("minecraft:stick", "notreepunching");
    /// assert_eq!(stick.namespace, "minecraft");
    /// assert_eq!(stick.path, "stick");
    ///
    /// let nested = ResourceLocation::resolve("forge:rods/wooden", "notreepunching");
    /// assert_eq!(nested.path, "rods/wooden");
    /// ```
    pub fn resolve(s: &str, domain: &str) -> ResourceLocation {
        match s.split_once(':') {
            Some((namespace, path)) if !namespace.is_empty() => ResourceLocation::new(namespace, path),
            Some((_, path)) => ResourceLocation::new(domain, path),
            None => ResourceLocation::new(domain, s),
        }
    }

    /// Returns a copy of this location with `prefix/` prepended to the path.
    pub fn with_prefix(&self, prefix: &str) -> ResourceLocation {
        ResourceLocation {
            namespace: self.namespace.clone(),
            path: format!("{}/{}", prefix, self.path),
        }
    }

    /// Returns a copy of this location with `suffix` appended to the path.
    pub fn with_suffix(&self, suffix: &str) -> ResourceLocation {
        ResourceLocation {
            namespace: self.namespace.clone(),
            path: format!("{}{}", self.path, suffix),
        }
    }

    /// The last segment of the path.
    pub fn name(&self) -> &str {
        match self.path.rfind('/') {
            Some(index) => &self.path[index + 1 ..],
            None => &self.path,
        }
    }

    /// Builds a translation key such as `block.minecraft.stone` for this location.
    pub fn translation_key(&self, category: &str) -> String {
        format!(
            "{}.{}.{}",
            category,
            self.namespace,
            self.path.replace('/', ".")
        )
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Debug for ResourceLocation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.collect_str(self)
    }
}

/// Parses a full id, ids without a namespace are vanilla ids
impl From<&str> for ResourceLocation {
    fn from(s: &str) -> Self {
        ResourceLocation::resolve(s, "minecraft")
    }
}

impl PartialEq<&str> for ResourceLocation {
    fn eq(&self, other: &&str) -> bool {
        match other.split_once(':') {
            Some((namespace, path)) => self.namespace == namespace && self.path == path,
            None => false,
        }
    }
}

#[test]
fn resolve_empty_namespace_uses_domain() {
    let location = ResourceLocation::resolve(":rock", "notreepunching");
    assert_eq!(location, "notreepunching:rock");
}

#[test]
fn from_str_defaults_to_minecraft() {
    assert_eq!(ResourceLocation::from("stick"), "minecraft:stick");
    assert_eq!(ResourceLocation::from("notreepunching:plant_fiber").namespace, "notreepunching");
}

#[test]
fn prefix_and_suffix() {
    let cobble = ResourceLocation::new("notreepunching", "granite_cobblestone");

    assert_eq!(
        cobble.with_suffix("_stairs"),
        "notreepunching:granite_cobblestone_stairs"
    );
    assert_eq!(
        cobble.with_prefix("block"),
        "notreepunching:block/granite_cobblestone"
    );
    assert_eq!(cobble.with_prefix("block").name(), "granite_cobblestone");
}

#[test]
fn translation_keys_replace_slashes() {
    let location = ResourceLocation::new("notreepunching", "story/root");
    assert_eq!(
        location.translation_key("advancement"),
        "advancement.notreepunching.story.root"
    );
}

#[test]
fn serializes_as_string() {
    let json = serde_json::to_string(&ResourceLocation::minecraft("mineable/pickaxe")).unwrap();
    assert_eq!(json, r#""minecraft:mineable/pickaxe""#);
}
