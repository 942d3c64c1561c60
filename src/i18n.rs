use std::collections::HashMap;

use rust_embed::Embed;
use serde_json::Value;
use thiserror::Error;

#[derive(Embed)]
#[folder = "locales"]
pub struct Locales;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("Locale file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse locale file: {0}")]
    ParseError(String),
}

/// Synchronous text lookup keyed by dotted paths such as `coding.portfolio.title`.
pub trait Translator {
    /// Returns the string for `key`, or the key itself when it is missing.
    fn t(&self, key: &str) -> String;
    /// Returns the list stored under `key`, empty when it is missing.
    fn t_list(&self, key: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    strings: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn from_json(source: &str) -> Result<Self, I18nError> {
        let value = serde_json::from_str::<Value>(source)
            .map_err(|e| I18nError::ParseError(e.to_string()))?;
        let mut catalog = Self::default();
        catalog.flatten(String::new(), &value);
        Ok(catalog)
    }

    pub fn load(locale: &str) -> Result<Self, I18nError> {
        let name = format!("{locale}.json");
        let file = Locales::get(&name).ok_or_else(|| I18nError::NotFound(name.clone()))?;
        let source = std::str::from_utf8(&file.data)
            .map_err(|e| I18nError::ParseError(format!("{name}: {e}")))?;
        Self::from_json(source)
    }

    /// The English catalog. Falls back to an empty catalog, which echoes keys.
    pub fn english() -> Self {
        Self::load("en").unwrap_or_else(|e| {
            log::error!("{e}");
            Self::default()
        })
    }

    fn flatten(&mut self, prefix: String, value: &Value) {
        let join = |key: &str| {
            if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{prefix}.{key}")
            }
        };
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    self.flatten(join(k), v);
                }
            }
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for (i, v) in items.iter().enumerate() {
                    if let Some(s) = scalar(v) {
                        list.push(s);
                    }
                    self.flatten(join(&i.to_string()), v);
                }
                self.lists.insert(prefix, list);
            }
            other => {
                if let Some(s) = scalar(other) {
                    self.strings.insert(prefix, s);
                }
            }
        }
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(s) => s.clone(),
            None => {
                log::debug!("missing translation: {key}");
                key.to_string()
            }
        }
    }

    fn t_list(&self, key: &str) -> Vec<String> {
        match self.lists.get(key) {
            Some(list) => list.clone(),
            None => {
                log::debug!("missing translation list: {key}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "coding": {
            "keyFeatures": "Key features",
            "portfolio": {
                "title": "Portfolio Website",
                "features": ["Responsive layout", "Project galleries"]
            }
        },
        "stats": { "years": 12, "remote": true }
    }"#;

    #[test]
    fn test_nested_lookup() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.t("coding.portfolio.title"), "Portfolio Website");
        assert_eq!(catalog.t("coding.keyFeatures"), "Key features");
        assert_eq!(catalog.t("stats.years"), "12");
        assert_eq!(catalog.t("stats.remote"), "true");
    }

    #[test]
    fn test_array_lookup() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.t("coding.portfolio.features.1"), "Project galleries");
        assert_eq!(
            catalog.t_list("coding.portfolio.features"),
            vec!["Responsive layout", "Project galleries"]
        );
    }

    #[test]
    fn test_missing_key_echoes() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.t("coding.missing"), "coding.missing");
        assert!(catalog.t_list("coding.missing").is_empty());
        // objects are not strings
        assert_eq!(catalog.t("coding.portfolio"), "coding.portfolio");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(I18nError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_locale() {
        assert_eq!(
            Catalog::load("xx"),
            Err(I18nError::NotFound("xx.json".to_string()))
        );
    }

    #[test]
    fn test_english_catalog() {
        let catalog = Catalog::english();
        assert_eq!(catalog.t("coding.portfolio.title"), "Portfolio Website");
        assert!(!catalog.t_list("coding.portfolio.features").is_empty());
    }
}
