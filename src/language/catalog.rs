//! Message catalogs: per-culture JSON files flattened to dot-delimited keys.
//!
//! A catalog directory holds one JSON file per culture (`en.json`,
//! `de-DE.json`, ...); nested objects flatten to keys like
//! `Customer.NameHelp`. Lookup walks the culture chain (`de-DE` → `de`)
//! before falling back to the key itself.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::language::{Culture, LanguageContext, LanguageProvider};

#[derive(Debug, Default)]
pub struct MessageCatalog {
    cultures: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single text, creating the culture on first use.
    pub fn insert(
        &mut self,
        culture: &str,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.cultures
            .entry(culture.to_string())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Load all `<culture>.json` files from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        if !dir.exists() {
            bail!("Messages directory '{}' does not exist.", dir.display());
        }
        if !dir.is_dir() {
            bail!("'{}' is not a directory.", dir.display());
        }

        let mut catalog = Self::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) == Some("json")
                && let Some(culture) = path.file_stem().and_then(|s| s.to_str())
            {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read message file: {:?}", path))?;
                let json: Value = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse message file: {:?}", path))?;

                let texts = catalog.cultures.entry(culture.to_string()).or_default();
                flatten_json(&json, String::new(), texts);
            }
        }
        Ok(catalog)
    }

    /// Look up a key, walking the culture chain towards the neutral culture.
    pub fn lookup(&self, culture: &Culture, key: &str) -> Option<&str> {
        let mut current = Some(culture.clone());
        while let Some(culture) = current {
            if let Some(text) = self
                .cultures
                .get(culture.as_str())
                .and_then(|texts| texts.get(key))
            {
                return Some(text);
            }
            current = culture.parent();
        }
        None
    }
}

impl LanguageProvider for MessageCatalog {
    fn text(&self, key: &str, ctx: &LanguageContext<'_>) -> String {
        self.lookup(ctx.culture, key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}

fn flatten_json(value: &Value, prefix: String, result: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        // Non-string leaves carry no display text
        _ => {}
    }
}
