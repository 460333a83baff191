use log::info;
use ntp_datapack::{
    data::advancement::{
        conditions::{inventory_changed, use_item_on_block, AdvancementConditions},
        display::{AdvancementDisplay, AdvancementDisplayText, AdvancementFrame, AdvancementIcon},
        Advancement,
        AdvancementRequirements,
    },
    LangBuffer,
    ResourceLocation,
    ResourceManager,
};

/// Emits the advancements of one tab, `{domain}:{category}/{name}`
///
/// Titles and descriptions go to the language buffer, the advancements only hold their keys.
pub struct AdvancementBuilder<'a> {
    rm: &'a mut ResourceManager,
    lang: &'a mut LangBuffer,
    category: String,
    background: String,
}

impl<'a> AdvancementBuilder<'a> {
    pub fn new(
        rm: &'a mut ResourceManager,
        lang: &'a mut LangBuffer,
        category: &str,
        background: &str,
    ) -> Self {
        AdvancementBuilder {
            rm,
            lang,
            category: category.to_owned(),
            background: background.to_owned(),
        }
    }

    /// Starts an advancement, nothing is emitted until [AdvancementSpec::build]
    ///
    /// `parent` is the name of another advancement in this tab, `None` makes a root.
    pub fn advancement(
        &mut self,
        name: &str,
        icon: &str,
        title: &str,
        description: &str,
        parent: Option<&str>,
        criteria: Vec<(&str, AdvancementConditions)>,
    ) -> AdvancementSpec<'_, 'a> {
        AdvancementSpec {
            builder: self,
            name: name.to_owned(),
            icon: ResourceLocation::from(icon),
            title: title.to_owned(),
            description: description.to_owned(),
            parent: parent.map(str::to_owned),
            criteria: criteria
                .into_iter()
                .map(|(key, condition)| (key.to_owned(), condition))
                .collect(),
            requirements: None,
            frame: AdvancementFrame::Task,
            toast: true,
            chat: true,
            hidden: false,
        }
    }
}

pub struct AdvancementSpec<'s, 'a> {
    builder: &'s mut AdvancementBuilder<'a>,
    name: String,
    icon: ResourceLocation,
    title: String,
    description: String,
    parent: Option<String>,
    criteria: Vec<(String, AdvancementConditions)>,
    requirements: Option<AdvancementRequirements>,
    frame: AdvancementFrame,
    toast: bool,
    chat: bool,
    hidden: bool,
}

impl<'s, 'a> AdvancementSpec<'s, 'a> {
    /// Every inner list must have one criterion completed
    pub fn requirements(mut self, groups: &[&[&str]]) -> Self {
        self.requirements = Some(AdvancementRequirements::any_of(groups));
        self
    }

    pub fn frame(mut self, frame: AdvancementFrame) -> Self {
        self.frame = frame;
        self
    }

    pub fn toast(mut self, toast: bool) -> Self {
        self.toast = toast;
        self
    }

    pub fn chat(mut self, chat: bool) -> Self {
        self.chat = chat;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Registers the advancement and its two translations, returns its id
    pub fn build(self) -> ResourceLocation {
        let builder = self.builder;
        let domain = builder.rm.domain().to_owned();
        let key = format!("{}.advancements.{}.{}", domain, builder.category, self.name);

        builder.lang.insert(format!("{}.title", key), self.title);
        builder.lang.insert(format!("{}.description", key), self.description);

        let advancement = Advancement {
            parent: self.parent.map(|parent| {
                ResourceLocation::new(&domain, &format!("{}/{}", builder.category, parent))
            }),
            display: Some(AdvancementDisplay {
                icon: AdvancementIcon {
                    item: self.icon,
                    nbt: None,
                },
                title: AdvancementDisplayText::translate(format!("{}.title", key)),
                description: AdvancementDisplayText::translate(format!("{}.description", key)),
                frame: self.frame,
                show_toast: self.toast,
                announce_to_chat: self.chat,
                hidden: self.hidden,
                background: Some(builder.background.clone()),
            }),
            criteria: self.criteria.into_iter().collect(),
            requirements: self.requirements,
            rewards: None,
        };

        let id = ResourceLocation::new(&domain, &format!("{}/{}", builder.category, self.name));
        builder.rm.advancement(&id.to_string(), advancement);
        id
    }
}

/// The `story` tab, from picking up a loose rock to the first mattock
pub fn do_advancements(common: &mut ResourceManager, lang: &mut LangBuffer) {
    info!("Generating advancements");

    let domain = common.domain().to_owned();
    let has = |item: &str| inventory_changed(item, &domain);

    let mut story = AdvancementBuilder::new(
        common,
        lang,
        "story",
        "minecraft:textures/gui/advancements/backgrounds/stone.png",
    );

    story
        .advancement(
            "root",
            "notreepunching:flint_pickaxe",
            "No Tree Punching",
            "I tried to punch tree. It didn't work and now my fingers are covered in splinters...",
            None,
            vec![
                ("has_loose_rock", has("#notreepunching:loose_rocks")),
                ("has_gravel", has("minecraft:gravel")),
                ("has_sticks", has("minecraft:stick")),
            ],
        )
        .requirements(&[&["has_loose_rock", "has_gravel", "has_sticks"]])
        .toast(false)
        .chat(false)
        .build();

    story
        .advancement(
            "find_loose_rock",
            "notreepunching:stone_loose_rock",
            "Dull Rocks",
            "Pick up a loose rock.",
            Some("root"),
            vec![("has_loose_rock", has("#notreepunching:loose_rocks"))],
        )
        .build();
    story
        .advancement(
            "find_gravel",
            "minecraft:gravel",
            "Discount Cobblestone",
            "Find some gravel, it may come in handy.",
            Some("root"),
            vec![
                ("has_gravel", has("minecraft:gravel")),
                ("has_flint", has("minecraft:flint")),
            ],
        )
        .requirements(&[&["has_gravel", "has_flint"]])
        .build();
    story
        .advancement(
            "find_sticks",
            "minecraft:stick",
            "A Big Stick",
            "Obtain sticks by breaking leaves.",
            Some("root"),
            vec![("has_stick", has("minecraft:stick"))],
        )
        .build();

    story
        .advancement(
            "find_flint",
            "minecraft:flint",
            "Shiny Rocks!",
            "Obtain some flint by digging through gravel.",
            Some("find_gravel"),
            vec![("has_flint", has("minecraft:flint"))],
        )
        .build();
    story
        .advancement(
            "knapping",
            "notreepunching:flint_shard",
            "Knapit!",
            "Use a piece of flint on some exposed stone, to break it into small flint shards.",
            Some("find_flint"),
            vec![("has_flint_shard", has("notreepunching:flint_shard"))],
        )
        .build();
    story
        .advancement(
            "plant_fiber",
            "notreepunching:plant_fiber",
            "Plant Based Tool Bindings",
            "With a primitive flint knife, obtain plant fiber by cutting down tall grasses.",
            Some("knapping"),
            vec![("has_plant_fiber", has("notreepunching:plant_fiber"))],
        )
        .build();
    story
        .advancement(
            "flint_axe",
            "notreepunching:flint_axe",
            "And My Axe!",
            "Build your first tool capable of harvesting wood!",
            Some("plant_fiber"),
            vec![("has_flint_axe", has("notreepunching:flint_axe"))],
        )
        .build();

    story
        .advancement(
            "macuahuitl",
            "notreepunching:macuahuitl",
            "Macaroniwhatnow?",
            "Craft a macuahuitl",
            Some("flint_axe"),
            vec![("has_macuahuitl", has("notreepunching:macuahuitl"))],
        )
        .build();
    story
        .advancement(
            "flint_pickaxe",
            "notreepunching:flint_pickaxe",
            "My First Pickaxe",
            "Craft your first pickaxe from flint, plant fiber, and sticks!",
            Some("flint_axe"),
            vec![("has_flint_pickaxe", has("notreepunching:flint_pickaxe"))],
        )
        .build();

    story
        .advancement(
            "use_clay_tool",
            "notreepunching:clay_large_vessel",
            "You're a Potter, Harry",
            "Use a clay tool on a block of clay to create pottery of various kinds.",
            Some("find_sticks"),
            vec![(
                "damage_clay_tool",
                use_item_on_block("notreepunching:clay_tool", "notreepunching:pottery", &domain),
            )],
        )
        .build();
    story
        .advancement(
            "fire_pottery",
            "notreepunching:ceramic_large_vessel",
            "Ceramics",
            "Fire some pottery into useful devices!",
            Some("use_clay_tool"),
            vec![("has_ceramics", has("#notreepunching:ceramics"))],
        )
        .build();

    story
        .advancement(
            "mattock",
            "notreepunching:iron_mattock",
            "Getting a Better Upgrade",
            "Craft a mattock, a hoe-axe-shovel-all-in-one multitool!",
            Some("flint_pickaxe"),
            vec![("has_mattock", has("#notreepunching:mattocks"))],
        )
        .build();
}

#[test]
fn builder_keys_and_parents() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    let mut lang = LangBuffer::new();

    let id = AdvancementBuilder::new(&mut rm, &mut lang, "story", "minecraft:textures/block/stone.png")
        .advancement(
            "find_flint",
            "minecraft:flint",
            "Shiny Rocks!",
            "Obtain some flint.",
            Some("find_gravel"),
            vec![("has_flint", inventory_changed("minecraft:flint", "notreepunching"))],
        )
        .frame(AdvancementFrame::Goal)
        .build();

    assert_eq!(id, "notreepunching:story/find_flint");
    assert_eq!(lang.len(), 2);
    assert_eq!(
        lang.get("notreepunching.advancements.story.find_flint.title"),
        Some("Shiny Rocks!")
    );

    let advancement = rm.get_advancement("story/find_flint").unwrap();
    assert_eq!(
        advancement.parent,
        Some(ResourceLocation::new("notreepunching", "story/find_gravel"))
    );
    assert_eq!(
        serde_json::to_value(&advancement.display).unwrap()["title"],
        serde_json::json!({"translate": "notreepunching.advancements.story.find_flint.title"})
    );
}

#[test]
fn story_tree_is_consistent() {
    let mut rm = ResourceManager::new("notreepunching", "unused");
    let mut lang = LangBuffer::new();
    do_advancements(&mut rm, &mut lang);

    assert_eq!(rm.advancements().count(), 13);
    assert_eq!(lang.len(), 26);

    for (id, advancement) in rm.advancements() {
        assert!(
            advancement.undefined_requirements().is_empty(),
            "{} requires undefined criteria",
            id
        );
        if let Some(parent) = &advancement.parent {
            assert!(
                rm.get_advancement(&parent.to_string()).is_some(),
                "{} has a missing parent {}",
                id,
                parent
            );
        }
    }

    let root = rm.get_advancement("story/root").unwrap();
    assert!(root.parent.is_none());
}
