use dioxus::prelude::*;
use crate::components::navigation::LinkItem;
use crate::content::InteractiveHeroContent;
use crate::hooks::{use_disclosure, Disclosure, DisclosureState};
use crate::types::{numbered, ChapterEntry};

/// Hero banner with a learning path that the reader can show or hide.
/// Each instance owns its own disclosure state.
#[component]
pub fn InteractiveHeroSection(hero: InteractiveHeroContent) -> Element {
    let disclosure = use_disclosure();

    rsx! {
        InteractiveHero { hero: hero, disclosure: disclosure }
    }
}

/// Hero markup driven by a disclosure created with `use_disclosure`.
#[component]
pub fn InteractiveHero(hero: InteractiveHeroContent, disclosure: Disclosure) -> Element {
    let mut disclosure = disclosure;

    let title = hero.title.clone();
    let subtitle = hero.subtitle.clone();
    let toggle_label = if disclosure.is_expanded() {
        hero.toggle.hide.clone()
    } else {
        hero.toggle.show.clone()
    };

    rsx! {
        header { class: "hero hero--interactive",
            div { class: "hero-content",
                h1 { class: "hero-title", "{title}" }
                p { class: "hero-subtitle", "{subtitle}" }
                div { class: "hero-buttons",
                    for (idx, link) in hero.actions.iter().enumerate() {
                        LinkItem { key: "{idx}", link: link.clone(), class: "hero-button".to_string() }
                    }
                    button {
                        class: "hero-button hero-button--toggle",
                        r#type: "button",
                        onclick: move |_| disclosure.toggle(),
                        "{toggle_label}"
                    }
                }
                ChapterPanel {
                    title: hero.chapters_title.clone(),
                    chapters: hero.chapters.clone(),
                    state: disclosure.state(),
                }
            }
        }
    }
}

/// The titled chapter list, present only while expanded. Positions come
/// from the order of `chapters` on every render.
#[component]
pub fn ChapterPanel(title: String, chapters: Vec<ChapterEntry>, state: DisclosureState) -> Element {
    if !state.is_expanded() {
        return rsx! {};
    }

    rsx! {
        div { class: "hero-chapters",
            h2 { class: "chapters-title", "{title}" }
            ol { class: "chapter-list",
                for (position, chapter) in numbered(&chapters) {
                    li {
                        key: "{position}",
                        class: "chapter-item",
                        span { class: "chapter-number", "{position}" }
                        span { class: "chapter-label", "{chapter.label}" }
                    }
                }
            }
        }
    }
}
