//! Authoring checks for the content document.
//!
//! Findings are reported only; nothing here alters what gets rendered.

use thiserror::Error;

use super::SiteContent;
use crate::types::LinkEntry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    #[error("link has an empty label")]
    EmptyLabel,
    #[error("link '{0}' has an empty target")]
    EmptyTarget(String),
    #[error("link '{label}' uses plain http: {target}")]
    PlainHttp { label: String, target: String },
    #[error("chapter {0} has an empty label")]
    EmptyChapter(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Where the entry lives, e.g. `footer.community[2]`.
    pub location: String,
    pub issue: LintIssue,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.issue)
    }
}

pub fn check(content: &SiteContent) -> Vec<Finding> {
    let mut findings = Vec::new();

    let link_lists: [(&str, &[LinkEntry]); 6] = [
        ("hero.actions", content.hero.actions.as_slice()),
        ("interactive_hero.actions", content.interactive_hero.actions.as_slice()),
        ("footer.chapters", content.footer.chapters.as_slice()),
        ("footer.community", content.footer.community.as_slice()),
        ("footer.more", content.footer.more.as_slice()),
        ("footer.personal", content.footer.personal.as_slice()),
    ];
    for (section, links) in link_lists {
        for (idx, link) in links.iter().enumerate() {
            for issue in check_link(link) {
                findings.push(Finding {
                    location: format!("{section}[{idx}]"),
                    issue,
                });
            }
        }
    }

    for (idx, chapter) in content.interactive_hero.chapters.iter().enumerate() {
        if chapter.label.trim().is_empty() {
            findings.push(Finding {
                location: format!("interactive_hero.chapters[{idx}]"),
                issue: LintIssue::EmptyChapter(idx + 1),
            });
        }
    }

    findings
}

fn check_link(link: &LinkEntry) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    if link.label.trim().is_empty() {
        issues.push(LintIssue::EmptyLabel);
    }
    if link.target.trim().is_empty() {
        issues.push(LintIssue::EmptyTarget(link.label.clone()));
    } else if link.target.starts_with("http://") {
        issues.push(LintIssue::PlainHttp {
            label: link.label.clone(),
            target: link.target.clone(),
        });
    }
    issues
}
