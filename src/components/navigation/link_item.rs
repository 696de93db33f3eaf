use dioxus::prelude::*;
use crate::types::{LinkEntry, NEW_CONTEXT_TARGET, NO_LEAK_REL};

/// One activatable link. External targets open in a new browsing context
/// and get neither referrer nor opener; internal paths stay in place.
#[component]
pub fn LinkItem(link: LinkEntry, class: String) -> Element {
    let label = link.label.clone();
    let target = link.target.clone();

    let body = rsx! {
        if let Some(icon) = link.icon.clone() {
            span { class: "link-icon", "{icon}" }
        }
        span { class: "link-label", "{label}" }
    };

    if link.is_external() {
        rsx! {
            a {
                class: "{class}",
                href: "{target}",
                target: NEW_CONTEXT_TARGET,
                rel: NO_LEAK_REL,
                {body}
            }
        }
    } else {
        rsx! {
            a {
                class: "{class}",
                href: "{target}",
                {body}
            }
        }
    }
}
