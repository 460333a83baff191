use ntp_util::ResourceLocation;
use serde::Serialize;

/// The display element of an [Advancement](super::Advancement)
#[derive(Serialize, Debug, PartialEq)]
pub struct AdvancementDisplay {
    pub icon: AdvancementIcon,
    pub title: AdvancementDisplayText,
    pub description: AdvancementDisplayText,
    pub frame: AdvancementFrame,
    pub show_toast: bool,
    pub announce_to_chat: bool,
    pub hidden: bool,
    /// Only read from root advancements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// The icon of an [AdvancementDisplay]
#[derive(Serialize, Debug, PartialEq)]
pub struct AdvancementIcon {
    pub item: ResourceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbt: Option<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AdvancementFrame {
    Task,
    Challenge,
    Goal,
}

impl Default for AdvancementFrame {
    fn default() -> Self {
        AdvancementFrame::Task
    }
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum AdvancementDisplayText {
    String(String),
    Translate { translate: String },
}

impl AdvancementDisplayText {
    pub fn translate<S: Into<String>>(key: S) -> Self {
        AdvancementDisplayText::Translate {
            translate: key.into(),
        }
    }
}

#[test]
fn display_ser_test() {
    let display = AdvancementDisplay {
        icon: AdvancementIcon {
            item: ResourceLocation::new("notreepunching", "flint_axe"),
            nbt: None,
        },
        title: AdvancementDisplayText::translate("notreepunching.advancements.story.flint_axe.title"),
        description: AdvancementDisplayText::String("Chop chop".to_owned()),
        frame: AdvancementFrame::Goal,
        show_toast: true,
        announce_to_chat: false,
        hidden: false,
        background: None,
    };

    assert_eq!(
        serde_json::to_string(&display).unwrap(),
        r#"{"icon":{"item":"notreepunching:flint_axe"},"title":{"translate":"notreepunching.advancements.story.flint_axe.title"},"description":"Chop chop","frame":"goal","show_toast":true,"announce_to_chat":false,"hidden":false}"#
    );
}
