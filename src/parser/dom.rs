//! Node-tree helpers shared by the free-text layouts.

use regex::Regex;
use scraper::{ElementRef, Html, Node};

/// Parent elements of every text node matching `re`, in document order.
pub fn text_containers<'a>(
    document: &'a Html,
    re: &'a Regex,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    document
        .root_element()
        .descendants()
        .filter(move |node| node.value().as_text().is_some_and(|t| re.is_match(t)))
        .filter_map(|node| node.parent().and_then(ElementRef::wrap))
}

/// Text content of the node `n` positions after `container` among its
/// siblings. Only text and element nodes count as positions, so comments
/// never shift the index; whitespace-only text nodes do.
pub fn nth_sibling_text(container: ElementRef<'_>, n: usize) -> Option<String> {
    let parent = container.parent()?;
    let siblings: Vec<_> = parent
        .children()
        .filter(|c| c.value().is_text() || c.value().is_element())
        .collect();
    let at = siblings.iter().position(|c| c.id() == container.id())?;
    let target = siblings.get(at + n)?;

    match target.value() {
        Node::Text(text) => Some(text.to_string()),
        Node::Element(_) => ElementRef::wrap(*target).map(|el| el.text().collect()),
        _ => None,
    }
}
