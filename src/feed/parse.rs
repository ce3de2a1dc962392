use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use super::error::MalformedFeed;
use super::types::{ChannelRecord, ItemRecord};

/// Parse an RSS document into a [`ChannelRecord`] holding every item.
///
/// Only direct children are consulted: `channel` under the root element,
/// channel fields and `item`s under `channel`, item fields under `item`.
pub fn parse(xml: &str) -> Result<ChannelRecord, MalformedFeed> {
    // RSS 0.91 feeds ship a DOCTYPE
    let opts = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = Document::parse_with_options(xml, opts)?;

    let channel = first_child(doc.root_element(), "channel").ok_or(MalformedFeed::NoChannel)?;

    let record = ChannelRecord {
        title: field(channel, "title"),
        link: field(channel, "link"),
        description: field(channel, "description"),
        last_build_date: field(channel, "lastBuildDate"),
        pub_date: field(channel, "pubDate"),
        language: field(channel, "language"),
        categories: categories(channel),
        managing_editor: field(channel, "managingEditor"),
        items: children_named(channel, "item").map(parse_item).collect(),
    };
    debug!(title = %record.title, items = record.items.len(), "parsed channel");
    Ok(record)
}

fn parse_item(item: Node<'_, '_>) -> ItemRecord {
    ItemRecord {
        title: field(item, "title"),
        author: field(item, "author"),
        pub_date: field(item, "pubDate"),
        link: field(item, "link"),
        categories: categories(item),
        description: field(item, "description"),
    }
}

/// Text of an optional element, or `default` when the element is absent or
/// has no leading text.
pub fn text_or_default(node: Option<Node<'_, '_>>, default: &str) -> String {
    node.and_then(leading_text).unwrap_or_else(|| default.to_string())
}

// Text nodes before the first child element, joined; comments and PIs are skipped.
fn leading_text(node: Node<'_, '_>) -> Option<String> {
    let mut text: Option<String> = None;
    let leading = node.children().take_while(|c| !c.is_element()).filter(|c| c.is_text());
    for t in leading.filter_map(|c| c.text()) {
        text.get_or_insert_with(String::new).push_str(t);
    }
    text
}

fn field(parent: Node<'_, '_>, name: &str) -> String {
    text_or_default(first_child(parent, name), "")
}

// Textless categories stay in the list as "".
fn categories(parent: Node<'_, '_>) -> Vec<String> {
    children_named(parent, "category").map(|c| text_or_default(Some(c), "")).collect()
}

fn first_child<'a, 'input>(parent: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    children_named(parent, name).next()
}

// Plain local-name match; prefixed elements such as `atom:link` never match.
fn children_named<'a, 'input>(parent: Node<'a, 'input>, name: &str) -> impl Iterator<Item = Node<'a, 'input>> {
    parent.children().filter(move |c| {
        c.is_element() && c.tag_name().namespace().is_none() && c.tag_name().name() == name
    })
}
