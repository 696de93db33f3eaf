use dioxus::prelude::*;
use crate::components::navigation::LinkItem;
use crate::content::HeroContent;

#[component]
pub fn HeroSection(hero: HeroContent) -> Element {
    let title = hero.title.clone();
    let subtitle = hero.subtitle.clone();

    rsx! {
        header { class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "{title}" }
                p { class: "hero-subtitle", "{subtitle}" }
                if let Some(description) = hero.description.clone() {
                    p { class: "hero-description", "{description}" }
                }
                div { class: "hero-buttons",
                    for (idx, link) in hero.actions.iter().enumerate() {
                        LinkItem { key: "{idx}", link: link.clone(), class: "hero-button".to_string() }
                    }
                }
            }
        }
    }
}
