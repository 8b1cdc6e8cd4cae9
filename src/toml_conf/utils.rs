use std::collections::BTreeMap;

use error_stack::{IntoReport, Report, Result, ResultExt};
use log::warn;
use toml::Value;

use super::config_struct::{ConfigError, DesklinkConfig, Main, ShortcutEntry, ShortcutName};

pub const MAIN_SECTION: &str = "main";

type ConfigResult<T> = Result<T, ConfigError>;

pub fn serialize(config: &DesklinkConfig) -> ConfigResult<String> {
    let main_table = toml::to_string(&config.main)
        .report()
        .change_context(ConfigError::Serializer)
        .attach_printable_lazy(|| {
            format!("Error during serialization of main {:?}", &config.main)
        })?;

    let mut all = format!("[{}]\n{}", MAIN_SECTION, main_table);
    // BTreeMap keeps entries sorted by name
    for (name, entry) in config.shortcuts.iter() {
        let entry_str = toml::to_string(entry)
            .report()
            .change_context(ConfigError::Serializer)
            .attach_printable_lazy(|| {
                format!("err during serialization of key {} value {:?}", name, entry)
            })?;
        all.push_str(&format!("\n[{}]\n{}", quote_key(name), entry_str));
    }
    Ok(all)
}

pub fn deserialize(content: &str) -> ConfigResult<(Main, BTreeMap<ShortcutName, ShortcutEntry>)> {
    let value = content
        .parse::<Value>()
        .report()
        .change_context(ConfigError::Deserializer)?;

    let table = match value.as_table() {
        Some(table) => table,
        None => return Err(Report::new(ConfigError::Deserializer)),
    };

    let main = match table.get(MAIN_SECTION) {
        Some(main_value) => main_value.clone().try_into::<Main>().unwrap_or_else(|err| {
            warn!(
                "Error during deserialization of toml main section {}, setting default for main",
                err
            );
            Main::default()
        }),
        None => {
            warn!("No [{}] section found, using defaults", MAIN_SECTION);
            Main::default()
        }
    };

    let shortcuts = table
        .iter()
        .filter_map(|(name, v)| {
            if name == MAIN_SECTION {
                return None;
            }
            let entry = match v.clone().try_into::<ShortcutEntry>() {
                Ok(it) => it,
                Err(err) => {
                    warn!("Skipping shortcut {} - {}", name, err);
                    return None;
                }
            };
            Some((name.to_string(), entry))
        })
        .collect::<BTreeMap<ShortcutName, ShortcutEntry>>();

    Ok((main, shortcuts))
}

fn quote_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        format!("\"{}\"", key.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
