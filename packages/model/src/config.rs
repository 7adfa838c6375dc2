use serde::Deserialize;
use thiserror::Error;

use crate::{content::ContentItem, present, translate::Translate};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("dropdown configuration is missing")]
    Missing,
    #[error("dropdown configuration has no `id`")]
    MissingId,
    #[error("dropdown configuration needs a `label` or a `translatedLabel`")]
    MissingLabel,
}

/// Dropdown configuration as supplied by the embedding page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub translated_label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub content: Option<Vec<ContentItem>>,
    #[serde(default)]
    pub options: Option<RawOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    #[serde(default)]
    pub header_class: Option<String>,
    #[serde(default)]
    pub body_class: Option<String>,
    #[serde(default)]
    pub caret: Option<bool>,
}

/// A validated dropdown configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    id: String,
    label: Label,
    icon: Option<String>,
    class: String,
    content: Vec<ContentItem>,
    options: Options,
}

impl Config {
    pub fn new(raw: Option<RawConfig>) -> Result<Self, ConfigError> {
        let raw = raw.ok_or(ConfigError::Missing)?;
        let id = present(&raw.id).ok_or(ConfigError::MissingId)?.to_string();
        let label = if let Some(text) = present(&raw.translated_label) {
            Label::Translated(text.to_string())
        } else if let Some(key) = present(&raw.label) {
            Label::Key(key.to_string())
        } else {
            return Err(ConfigError::MissingLabel);
        };
        let options = raw.options.unwrap_or_default();

        Ok(Self {
            id,
            label,
            icon: present(&raw.icon).map(str::to_string),
            class: raw.class.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            options: Options {
                header_class: options.header_class.unwrap_or_default(),
                body_class: options.body_class.unwrap_or_default(),
                caret: options.caret.unwrap_or(false),
            },
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    /// Displayed verbatim.
    Translated(String),
    /// A translation key, looked up on every render.
    Key(String),
}

impl Label {
    pub fn resolve(&self, translator: &dyn Translate) -> String {
        match self {
            Label::Translated(text) => text.clone(),
            Label::Key(key) => translator.translate(key),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub header_class: String,
    pub body_class: String,
    pub caret: bool,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::{Config, ConfigError, Label, RawConfig};
    use crate::{content::Entry, translate::Catalog, ContentItem};

    /// `null` is a missing configuration.
    fn parse(json: &str) -> Result<Config, ConfigError> {
        Config::new(serde_json::from_str(json).unwrap())
    }

    fn raw() -> RawConfig {
        RawConfig {
            id: Some("file-menu".to_string()),
            label: Some("menu.file".to_string()),
            ..RawConfig::default()
        }
    }

    #[test]
    fn missing_config() {
        assert!(matches!(Config::new(None), Err(ConfigError::Missing)));
        assert!(matches!(
            parse("null"),
            Err(ConfigError::Missing)
        ));
    }

    #[test]
    fn missing_id() {
        for id in [None, Some(String::new())] {
            let raw = RawConfig { id, ..raw() };

            assert!(matches!(
                Config::new(Some(raw)),
                Err(ConfigError::MissingId)
            ));
        }
    }

    #[test]
    fn missing_label() {
        let raw = RawConfig {
            label: None,
            translated_label: Some(String::new()),
            ..raw()
        };

        assert!(matches!(
            Config::new(Some(raw)),
            Err(ConfigError::MissingLabel)
        ));
    }

    #[test]
    fn id_is_checked_before_label() {
        assert!(matches!(
            Config::new(Some(RawConfig::default())),
            Err(ConfigError::MissingId)
        ));
    }

    #[test]
    fn either_label_is_enough() {
        let key_only = Config::new(Some(raw())).unwrap();
        let translated_only = Config::new(Some(RawConfig {
            label: None,
            translated_label: Some("File".to_string()),
            ..raw()
        }))
        .unwrap();

        assert_eq!(key_only.label(), &Label::Key("menu.file".to_string()));
        assert_eq!(
            translated_only.label(),
            &Label::Translated("File".to_string())
        );
    }

    #[test]
    fn translated_label_wins() {
        let config = Config::new(Some(RawConfig {
            translated_label: Some("File".to_string()),
            ..raw()
        }))
        .unwrap();
        let catalog: Catalog = [("menu.file", "Datei")].into_iter().collect();

        assert_eq!(config.label().resolve(&catalog), "File");
    }

    #[test]
    fn key_is_translated() {
        let config = Config::new(Some(raw())).unwrap();
        let catalog: Catalog = [("menu.file", "Datei")].into_iter().collect();

        assert_eq!(config.label().resolve(&catalog), "Datei");
    }

    #[test]
    fn defaults() {
        let config = Config::new(Some(raw())).unwrap();

        assert_eq!(config.class(), "");
        assert_eq!(config.icon(), None);
        assert!(!config.has_content());
        assert!(!config.options().caret);
        assert_eq!(config.options().header_class, "");
    }

    #[test]
    fn from_json() {
        let config = parse(indoc! {r#"
            {
                "id": "x",
                "label": "k",
                "icon": "gear",
                "class": "toolbar",
                "content": [
                    { "id": 1, "label": "a" },
                    "separator",
                    { "id": 2, "translatedLabel": "B" }
                ],
                "options": { "headerClass": "flat", "caret": true }
            }
        "#})
        .unwrap();

        assert_eq!(config.id(), "x");
        assert_eq!(config.icon(), Some("gear"));
        assert_eq!(config.class(), "toolbar");
        assert_eq!(
            config.content(),
            [
                Entry::new(1).label("a").into(),
                ContentItem::Separator,
                Entry::new(2).translated_label("B").into(),
            ]
        );
        assert_eq!(config.options().header_class, "flat");
        assert_eq!(config.options().body_class, "");
        assert!(config.options().caret);
    }

    #[test]
    fn non_string_id_is_rejected() {
        assert!(serde_json::from_str::<RawConfig>(r#"{ "id": 3 }"#).is_err());
    }
}
