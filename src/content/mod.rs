//! Site copy and link lists, loaded from the bundled content document.

pub mod lint;

use serde::{Deserialize, Serialize};

use crate::error::ContentResult;
use crate::types::{ChapterEntry, LinkEntry, LinkGroup};

const BUNDLED_CONTENT: &str = include_str!("../../assets/site_content.json");

pub const CHAPTERS_TITLE: &str = "Chapters";
pub const COMMUNITY_TITLE: &str = "Community";
pub const MORE_TITLE: &str = "More";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub interactive_hero: InteractiveHeroContent,
    pub footer: FooterContent,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Content embedded in the binary at build time.
    pub fn bundled() -> ContentResult<Self> {
        Self::from_json(BUNDLED_CONTENT)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub actions: Vec<LinkEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractiveHeroContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub actions: Vec<LinkEntry>,
    pub toggle: ToggleLabels,
    /// Heading over the chapter list while it is shown.
    pub chapters_title: String,
    pub chapters: Vec<ChapterEntry>,
}

/// Captions for the learning path trigger in each disclosure state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToggleLabels {
    pub show: String,
    pub hide: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub chapters: Vec<LinkEntry>,
    pub community: Vec<LinkEntry>,
    pub more: Vec<LinkEntry>,
    #[serde(default)]
    pub personal: Vec<LinkEntry>,
    pub copyright: String,
}

impl FooterContent {
    /// The footer columns in display order. Personal links trail the
    /// "More" column.
    pub fn groups(&self) -> Vec<LinkGroup> {
        let more = self.more.iter().chain(&self.personal).cloned().collect();
        vec![
            LinkGroup {
                title: CHAPTERS_TITLE.to_string(),
                links: self.chapters.clone(),
            },
            LinkGroup {
                title: COMMUNITY_TITLE.to_string(),
                links: self.community.clone(),
            },
            LinkGroup {
                title: MORE_TITLE.to_string(),
                links: more,
            },
        ]
    }

    pub fn link_count(&self) -> usize {
        self.chapters.len() + self.community.len() + self.more.len() + self.personal.len()
    }
}
