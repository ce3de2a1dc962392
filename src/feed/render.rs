use serde::Serialize;

use super::types::{ChannelRecord, ItemRecord};

/// Output of a single render call; both shapes come from the same record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Lines(Vec<String>),
    Json(String),
}

// JSON view of a channel: only these four keys, in this order.
#[derive(Serialize)]
struct JsonFeed<'a> {
    title: &'a str,
    link: &'a str,
    description: &'a str,
    items: &'a [ItemRecord],
}

/// Render `record` as text lines or as pretty JSON, keeping at most
/// `max(limit, 0)` items when a limit is given.
///
/// JSON output keeps non-ASCII characters as raw UTF-8; they are not written
/// as `\uXXXX` escapes.
pub fn render(record: &ChannelRecord, limit: Option<i64>, as_json: bool) -> Result<Rendered, serde_json::Error> {
    let items = limited(&record.items, limit);
    if as_json {
        let feed = JsonFeed {
            title: &record.title,
            link: &record.link,
            description: &record.description,
            items,
        };
        return Ok(Rendered::Json(serde_json::to_string_pretty(&feed)?));
    }
    Ok(Rendered::Lines(text_lines(record, items)))
}

/// The leading `max(limit, 0)` items, or all of them without a limit.
pub fn limited(items: &[ItemRecord], limit: Option<i64>) -> &[ItemRecord] {
    match limit {
        Some(n) => {
            let keep = usize::try_from(n.max(0)).unwrap_or(usize::MAX);
            &items[..keep.min(items.len())]
        }
        None => items,
    }
}

fn text_lines(record: &ChannelRecord, items: &[ItemRecord]) -> Vec<String> {
    let mut out = vec![format!("Feed: {}", record.title), format!("Link: {}", record.link)];
    push_labeled(&mut out, "Last Build Date", &record.last_build_date);
    push_labeled(&mut out, "Publish Date", &record.pub_date);
    push_labeled(&mut out, "Language", &record.language);
    push_categories(&mut out, &record.categories);
    push_labeled(&mut out, "Editor", &record.managing_editor);
    push_labeled(&mut out, "Description", &record.description);
    out.push(String::new());

    for item in items {
        out.push(format!("Title: {}", item.title));
        push_labeled(&mut out, "Author", &item.author);
        push_labeled(&mut out, "Published", &item.pub_date);
        out.push(format!("Link: {}", item.link));
        push_categories(&mut out, &item.categories);
        out.push(item.description.clone());
    }
    out
}

// Optional lines are skipped when empty.
fn push_labeled(out: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        out.push(format!("{label}: {value}"));
    }
}

// Keyed on the list, not the joined text: a lone textless category still prints.
fn push_categories(out: &mut Vec<String>, categories: &[String]) {
    if !categories.is_empty() {
        out.push(format!("Categories: {}", categories.join(", ")));
    }
}
