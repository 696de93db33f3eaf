use serde::{Deserialize, Serialize};

/// `target` attribute for links that leave the site.
pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// `rel` attribute that withholds referrer and opener from external pages.
pub const NO_LEAK_REL: &str = "noopener noreferrer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Path handled by the site router in the current context.
    Internal,
    /// Absolute URL, opened in a new browsing context.
    External,
}

impl LinkKind {
    /// A target is external when it is protocol-relative (`//host`) or
    /// starts with a scheme such as `https:` or `mailto:`. Leading spaces and
    /// control characters, and tabs or newlines anywhere, are ignored the way
    /// browsers ignore them when following an `href`.
    pub fn of(target: &str) -> Self {
        let target: String = target
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect();

        let mut lead = target.chars();
        if matches!((lead.next(), lead.next()), (Some('/' | '\\'), Some('/' | '\\'))) {
            return LinkKind::External;
        }

        let has_scheme = target.split_once(':').is_some_and(|(scheme, _)| {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        });
        if has_scheme {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub label: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl LinkEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn kind(&self) -> LinkKind {
        LinkKind::of(&self.target)
    }

    pub fn is_external(&self) -> bool {
        self.kind() == LinkKind::External
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub label: String,
}

impl ChapterEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// Pairs each chapter with its 1-based position in the slice.
pub fn numbered(chapters: &[ChapterEntry]) -> impl Iterator<Item = (usize, &ChapterEntry)> {
    chapters
        .iter()
        .enumerate()
        .map(|(index, chapter)| (index + 1, chapter))
}

/// A titled column of links.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkGroup {
    pub title: String,
    pub links: Vec<LinkEntry>,
}
