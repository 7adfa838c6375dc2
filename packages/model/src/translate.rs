use std::collections::HashMap;

use serde::Deserialize;

/// Maps translation keys to display strings.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F: Fn(&str) -> String> Translate for F {
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// A flat table of translations.
///
/// Keys without a translation resolve to themselves, so untranslated
/// labels are still visible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog(HashMap<String, String>);

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.0.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::{Catalog, Translate};

    #[test]
    fn lookup() {
        let catalog: Catalog = [("menu.open", "Open")].into_iter().collect();

        assert_eq!(catalog.translate("menu.open"), "Open");
    }

    #[test]
    fn missing_key_falls_back() {
        assert_eq!(Catalog::new().translate("menu.close"), "menu.close");
    }

    #[test]
    fn from_json() {
        let catalog = Catalog::from_json(indoc! {r#"
            {
                "file.new": "New",
                "file.save": "Save"
            }
        "#})
        .unwrap();

        assert_eq!(catalog.translate("file.new"), "New");
        assert_eq!(catalog.translate("file.save"), "Save");
    }

    #[test]
    fn closure() {
        let upper = |key: &str| key.to_uppercase();

        assert_eq!(upper.translate("abc"), "ABC");
    }
}
