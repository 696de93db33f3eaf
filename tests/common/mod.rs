#![allow(dead_code)]

use humanoid_book_site::types::LinkEntry;

/// Text as it may appear in rendered HTML.
pub fn html_forms(text: &str) -> [String; 2] {
    [text.to_string(), text.replace('&', "&amp;")]
}

pub fn find_from(html: &str, text: &str, from: usize) -> Option<usize> {
    html_forms(text)
        .iter()
        .filter_map(|form| html[from..].find(form.as_str()).map(|pos| pos + from))
        .min()
}

/// Asserts that every label shows up, in the given order.
pub fn assert_in_order<'a>(html: &str, labels: impl IntoIterator<Item = &'a str>) {
    let mut cursor = 0;
    for label in labels {
        let pos = find_from(html, label, cursor)
            .unwrap_or_else(|| panic!("'{label}' missing or out of order in {html}"));
        cursor = pos + label.chars().next().map_or(1, char::len_utf8);
    }
}

/// The opening tags of every anchor, in document order.
pub fn anchor_tags(html: &str) -> Vec<&str> {
    html.split("<a ")
        .skip(1)
        .map(|rest| rest.split('>').next().unwrap_or(rest))
        .collect()
}

/// Checks one opening anchor tag against the link it was rendered from.
pub fn assert_anchor_matches(tag: &str, link: &LinkEntry) {
    assert!(
        tag.contains(&format!("href=\"{}\"", link.target)),
        "expected href {} in <a {tag}>",
        link.target
    );
    let opens_new_context = tag.contains("target=\"_blank\"");
    let withholds_opener = tag.contains("rel=\"noopener noreferrer\"");
    if link.is_external() {
        assert!(opens_new_context && withholds_opener, "external link not isolated: <a {tag}>");
    } else {
        assert!(!opens_new_context && !withholds_opener, "internal link isolated: <a {tag}>");
    }
}
