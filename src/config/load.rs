use super::types::{ConfigTable, RouteEntryConfig};
use anyhow::Context;
use std::path::Path;

/// Loads a route configuration table from a declarative file.
///
/// The format is picked by extension: `.yaml`/`.yml`, `.toml`, anything
/// else is treated as JSON. The top level must be a mapping of resource
/// keys to entries; a key mapped to nothing (`avatar:` in YAML) is an
/// entry with every field left to its default. Entry order in the file is
/// preserved in the returned table.
pub fn load_config(path: &Path) -> anyhow::Result<ConfigTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route configuration {}", path.display()))?;

    let table = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => parse_yaml(&content),
        Some("toml") => parse_toml(&content),
        _ => parse_json(&content),
    };

    table.with_context(|| format!("invalid route configuration in {}", path.display()))
}

fn parse_yaml(content: &str) -> anyhow::Result<ConfigTable> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let mapping = value
        .as_mapping()
        .ok_or_else(|| anyhow::anyhow!("top level must be a mapping of resource keys"))?;

    let mut table = ConfigTable::new();
    for (key, entry) in mapping {
        let key = key
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("resource keys must be strings"))?;
        let entry: RouteEntryConfig = if entry.is_null() {
            RouteEntryConfig::default()
        } else {
            serde_yaml::from_value(entry.clone())
                .with_context(|| format!("resource '{key}'"))?
        };
        table.insert(key.to_string(), entry);
    }
    Ok(table)
}

fn parse_json(content: &str) -> anyhow::Result<ConfigTable> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let object = value
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("top level must be an object of resource keys"))?;

    let mut table = ConfigTable::new();
    for (key, entry) in object {
        let entry: RouteEntryConfig = if entry.is_null() {
            RouteEntryConfig::default()
        } else {
            serde_json::from_value(entry.clone())
                .with_context(|| format!("resource '{key}'"))?
        };
        table.insert(key.clone(), entry);
    }
    Ok(table)
}

fn parse_toml(content: &str) -> anyhow::Result<ConfigTable> {
    let root: toml::Table = content.parse()?;

    let mut table = ConfigTable::new();
    for (key, entry) in root {
        let entry: RouteEntryConfig = entry
            .try_into()
            .with_context(|| format!("resource '{key}'"))?;
        table.insert(key, entry);
    }
    Ok(table)
}
