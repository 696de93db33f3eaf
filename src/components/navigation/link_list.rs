use dioxus::prelude::*;
use crate::components::navigation::LinkItem;
use crate::types::LinkEntry;

#[component]
pub fn LinkList(links: Vec<LinkEntry>, item_class: String) -> Element {
    rsx! {
        ul { class: "link-list",
            for (idx, link) in links.iter().enumerate() {
                li {
                    key: "{idx}",
                    class: "link-list-item",
                    LinkItem { link: link.clone(), class: item_class.clone() }
                }
            }
        }
    }
}
