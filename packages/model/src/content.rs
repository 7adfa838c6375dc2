use std::fmt;

use serde::Deserialize;

use crate::{present, translate::Translate};

const SEPARATOR: &str = "separator";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(id) => write!(f, "{id}"),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// A selectable row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: ItemId,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub translated_label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

impl Entry {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            translated_label: None,
            icon: None,
            html: None,
        }
    }

    pub fn label(mut self, key: impl Into<String>) -> Self {
        self.label = Some(key.into());
        self
    }

    pub fn translated_label(mut self, text: impl Into<String>) -> Self {
        self.translated_label = Some(text.into());
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn html(mut self, markup: impl Into<String>) -> Self {
        self.html = Some(markup.into());
        self
    }

    /// Resolve the displayed text: `html`, then `translated_label`, then the
    /// translation of `label`.
    pub fn text(&self, translator: &dyn Translate) -> ItemText {
        if let Some(html) = present(&self.html) {
            ItemText::Html(html.to_string())
        } else if let Some(text) = present(&self.translated_label) {
            ItemText::Text(text.to_string())
        } else if let Some(key) = present(&self.label) {
            ItemText::Text(translator.translate(key))
        } else {
            ItemText::Text(String::new())
        }
    }

    pub fn icon_name(&self) -> Option<&str> {
        present(&self.icon)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemText {
    /// Raw markup, inserted without escaping.
    Html(String),
    Text(String),
}

/// One entry in a dropdown's list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawContentItem")]
pub enum ContentItem {
    Separator,
    Entry(Entry),
}

impl ContentItem {
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            ContentItem::Separator => None,
            ContentItem::Entry(entry) => Some(entry),
        }
    }

    pub fn data_id(&self) -> Option<String> {
        self.entry().map(|entry| entry.id.to_string())
    }

    pub fn focus_index(&self) -> i32 {
        match self {
            ContentItem::Separator => -1,
            ContentItem::Entry(_) => 0,
        }
    }
}

impl From<Entry> for ContentItem {
    fn from(entry: Entry) -> Self {
        Self::Entry(entry)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawContentItem {
    Sentinel(String),
    Entry(Entry),
}

impl TryFrom<RawContentItem> for ContentItem {
    type Error = String;

    fn try_from(raw: RawContentItem) -> Result<Self, Self::Error> {
        match raw {
            RawContentItem::Sentinel(sentinel) if sentinel == SEPARATOR => Ok(Self::Separator),
            RawContentItem::Sentinel(other) => Err(format!(
                "unknown content item \"{other}\", expected \"{SEPARATOR}\" or an entry"
            )),
            RawContentItem::Entry(entry) => Ok(Self::Entry(entry)),
        }
    }
}

/// What a single row displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Divider,
    Entry {
        id: String,
        icon: Option<String>,
        text: ItemText,
    },
}

impl Row {
    pub fn new(item: &ContentItem, translator: &dyn Translate) -> Self {
        match item {
            ContentItem::Separator => Row::Divider,
            ContentItem::Entry(entry) => Row::Entry {
                id: entry.id.to_string(),
                icon: entry.icon_name().map(str::to_string),
                text: entry.text(translator),
            },
        }
    }
}

pub fn rows<'a>(
    content: &'a [ContentItem],
    translator: &'a dyn Translate,
) -> impl Iterator<Item = Row> + 'a {
    content.iter().map(move |item| Row::new(item, translator))
}
