use dioxus::prelude::*;
use crate::components::layout::{FooterSection, HeroSection, InteractiveHeroSection};
use crate::content::SiteContent;

#[component]
pub fn Home() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        main { class: "page",
            InteractiveHeroSection { hero: content.interactive_hero.clone() }
        }
        FooterSection { footer: content.footer.clone() }
    }
}

#[component]
pub fn Overview() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        main { class: "page",
            HeroSection { hero: content.hero.clone() }
        }
        FooterSection { footer: content.footer.clone() }
    }
}
