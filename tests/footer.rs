mod common;

use common::{anchor_tags, assert_anchor_matches, assert_in_order};
use dioxus::prelude::*;
use humanoid_book_site::components::layout::FooterSection;
use humanoid_book_site::components::navigation::LinkList;
use humanoid_book_site::content::SiteContent;
use humanoid_book_site::types::LinkEntry;

fn bundled_footer_html() -> (humanoid_book_site::content::FooterContent, String) {
    let footer = SiteContent::bundled().unwrap().footer;
    let html = dioxus_ssr::render_element(rsx! { FooterSection { footer: footer.clone() } });
    (footer, html)
}

#[test]
fn footer_renders_fourteen_links_under_three_headings() {
    let (_, html) = bundled_footer_html();

    assert_eq!(anchor_tags(&html).len(), 14);
    assert_eq!(html.matches("<h3").count(), 3);
    assert_eq!(html.matches("class=\"footer-section\"").count(), 3);
    assert_in_order(&html, ["Chapters", "Community", "More"]);
}

#[test]
fn footer_links_keep_group_and_entry_order() {
    let (footer, html) = bundled_footer_html();

    let groups = footer.groups();
    let expected: Vec<&LinkEntry> = groups.iter().flat_map(|g| g.links.iter()).collect();
    let tags = anchor_tags(&html);
    assert_eq!(tags.len(), expected.len());

    for (tag, link) in tags.iter().zip(&expected) {
        assert_anchor_matches(tag, link);
    }
    assert_in_order(&html, expected.iter().map(|link| link.label.as_str()));
}

#[test]
fn personal_links_trail_the_more_column() {
    let (footer, html) = bundled_footer_html();

    let more_heading = html.find("More").unwrap();
    let last_more = footer.more.last().unwrap();
    let first_personal = footer.personal.first().unwrap();
    assert_in_order(
        &html[more_heading..],
        [last_more.label.as_str(), first_personal.label.as_str()],
    );
}

#[test]
fn copyright_line_follows_the_links() {
    let (footer, html) = bundled_footer_html();

    let last_link = footer.personal.last().unwrap();
    assert_in_order(&html, [last_link.label.as_str(), "Copyright"]);
    assert!(html.contains("footer-copyright"));
}

#[test]
fn link_list_keeps_duplicates_and_unvalidated_entries() {
    let links = vec![
        LinkEntry::new("Intro", "/docs/intro"),
        LinkEntry::new("Intro", "/docs/intro"),
        LinkEntry::new("Broken", ""),
        LinkEntry::new("Source", "https://github.com/humanoid-robotics-book/book").with_icon("★"),
        LinkEntry::new("Padded", " https://evil.example.com"),
        LinkEntry::new("Package", "git+https://github.com/humanoid-robotics-book/book"),
    ];
    let html = dioxus_ssr::render_element(rsx! {
        LinkList { links: links.clone(), item_class: "footer-link".to_string() }
    });

    let tags = anchor_tags(&html);
    assert_eq!(tags.len(), 6);
    for (tag, link) in tags.iter().zip(&links) {
        assert_anchor_matches(tag, link);
    }
    assert_eq!(html.matches("Intro").count(), 2);
    assert_eq!(html.matches("link-icon").count(), 1);
    assert_in_order(&html, ["Intro", "Intro", "Broken", "★", "Source", "Padded", "Package"]);
}

#[test]
fn rendering_is_deterministic() {
    let (_, first) = bundled_footer_html();
    let (_, second) = bundled_footer_html();
    assert_eq!(first, second);
}
