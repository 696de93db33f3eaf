use dioxus::prelude::*;
use crate::components::navigation::LinkList;
use crate::content::FooterContent;

#[component]
pub fn FooterSection(footer: FooterContent) -> Element {
    let groups = footer.groups();
    let copyright = footer.copyright.clone();

    rsx! {
        footer { class: "footer",
            div { class: "footer-sections",
                for (idx, group) in groups.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "footer-section",
                        h3 { class: "footer-section-title", "{group.title}" }
                        LinkList { links: group.links.clone(), item_class: "footer-link".to_string() }
                    }
                }
            }
            // Static attribution, independent of the link lists
            div { class: "footer-copyright",
                p { "{copyright}" }
            }
        }
    }
}
