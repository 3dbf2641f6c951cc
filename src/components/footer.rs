use crate::config::APP_NAME;
use crate::view::{Element, Node};

static LINK_COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Company", ["About", "Careers", "Press"]),
    ("Support", ["Account", "Help Center", "Contact Us"]),
    ("Legals", ["Terms & Conditions", "Privacy Policy", "Licensing"]),
];

/// Static page footer. Identical for every role.
pub fn footer() -> Node {
    let brand = Element::new("div")
        .class("footer-logo")
        .child(
            Element::new("img")
                .attr("src", "../assets/images/logo/logo.png")
                .attr("alt", format!("{APP_NAME} Logo")),
        )
        .child(Element::new("p").text("© 2025 Hospital CMS. All Rights Reserved."));

    let columns = LINK_COLUMNS.iter().map(|(title, links)| {
        Element::new("div")
            .class("footer-column")
            .child(Element::new("h4").text(*title))
            .children(
                links
                    .iter()
                    .map(|label| Element::new("a").attr("href", "#").text(*label)),
            )
    });

    Element::new("footer")
        .class("footer")
        .child(
            Element::new("div")
                .class("footer-container")
                .child(brand)
                .child(Element::new("div").class("footer-links").children(columns)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_lists_all_link_columns() {
        let node = footer();
        let headings: Vec<String> = node
            .find_by_tag("h4")
            .into_iter()
            .map(|h| Node::from(h.clone()).text_content())
            .collect();
        assert_eq!(headings, vec!["Company", "Support", "Legals"]);
        assert_eq!(node.find_by_tag("a").len(), 9);
    }

    #[test]
    fn footer_has_no_actions_and_escapes_links() {
        let node = footer();
        assert!(node.actions().is_empty());
        assert!(node.render().contains("Terms &amp; Conditions"));
    }
}
