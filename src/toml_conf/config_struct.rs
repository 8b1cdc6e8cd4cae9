use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    ConfigFile,
    Deserializer,
    Serializer,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFile => write!(f, "ConfigFileError"),
            ConfigError::Deserializer => write!(f, "DeserializerError"),
            ConfigError::Serializer => write!(f, "SerializerError"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl ErrorLevel {
    pub fn as_level_filter(&self) -> log::LevelFilter {
        match self {
            ErrorLevel::Trace => log::LevelFilter::Trace,
            ErrorLevel::Debug => log::LevelFilter::Debug,
            ErrorLevel::Info => log::LevelFilter::Info,
            ErrorLevel::Warn => log::LevelFilter::Warn,
            ErrorLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutEntry {
    pub exe_path: String,
    pub icon_path: Option<String>,
    pub run_args: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Main {
    pub icon_path: Option<String>,
    pub desktop_dir: Option<String>,
    pub error_level: Option<ErrorLevel>,
}

pub type ShortcutName = String;

#[derive(Debug, Default, PartialEq)]
pub struct DesklinkConfig {
    pub main: Main,
    pub shortcuts: BTreeMap<ShortcutName, ShortcutEntry>,
}
