use serde::Serialize;

/// Normalized channel metadata. Absent elements are stored as "" / empty vec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRecord {
    pub title: String,
    pub link: String,
    pub description: String,
    pub last_build_date: String,
    pub pub_date: String,
    pub language: String,
    pub categories: Vec<String>,
    pub managing_editor: String,
    pub items: Vec<ItemRecord>,
}

// Field order is the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub title: String,
    pub author: String,
    pub pub_date: String,
    pub link: String,
    pub categories: Vec<String>,
    pub description: String,
}
