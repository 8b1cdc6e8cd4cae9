use std::{
    error::Error,
    fmt,
    path::PathBuf,
};

use error_stack::{Report, Result};
use log::Level;

use crate::{
    args::ArgsClap,
    shortcut::{
        creator::{CreatedShortcut, ShortcutCreator},
        descriptor::ShortcutRequest,
    },
    toml_conf::{config::ConfigProvider, config_struct::DesklinkConfig},
};

pub type ResultManagerErr<T> = Result<T, DesklinkManagerError>;

/// Builds the creator once the destination folder override is known.
pub type ShortcutCreatorCtor = Box<dyn Fn(Option<PathBuf>) -> ShortcutCreator>;

pub struct DesklinkManager {
    pub config: DesklinkConfig,
    pub args: ArgsClap,
    pub config_provider: Box<dyn ConfigProvider>,
    pub creator_ctor: ShortcutCreatorCtor,
    pub state: DesklinkManagerState,
}

pub trait DesklinkThings {
    fn load_config(&mut self) -> ResultManagerErr<&mut Self>;
    fn attach_logger(&mut self) -> ResultManagerErr<&mut Self>;
    fn collect_requests(&mut self) -> ResultManagerErr<&mut Self>;
    fn create_shortcuts(&mut self) -> ResultManagerErr<&mut Self>;
    fn save_config(&mut self) -> ResultManagerErr<&mut Self>;
    fn bind(
        &mut self,
        cb: impl Fn(&mut DesklinkManager) -> ResultManagerErr<&mut Self>,
        log_level: Level,
    ) -> &mut Self;
    fn or_log_err(
        &mut self,
        cb: impl Fn(&mut DesklinkManager) -> ResultManagerErr<&mut Self>,
        log_level: Level,
    ) -> &mut Self;
    fn finish(&mut self) -> ResultManagerErr<Vec<CreatedShortcut>>;
}

#[derive(Debug, PartialEq)]
pub enum DesklinkManagerError {
    LoadConfigError,
    SaveConfigError,
    NothingToCreate,
    ShortcutsFailed(usize),
    MissingExeForSave,
    ReservedShortcutName(String),
    ConfigNotLoaded,
}

impl fmt::Display for DesklinkManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesklinkManagerError::LoadConfigError => write!(f, "LoadConfigError"),
            DesklinkManagerError::SaveConfigError => write!(f, "SaveConfigError"),
            DesklinkManagerError::NothingToCreate => write!(
                f,
                "Nothing to create, pass --exe or add shortcuts to the config file"
            ),
            DesklinkManagerError::ShortcutsFailed(count) => {
                write!(f, "{} shortcut(s) could not be created", count)
            }
            DesklinkManagerError::MissingExeForSave => {
                write!(f, "Only a shortcut created with --exe can be saved")
            }
            DesklinkManagerError::ReservedShortcutName(name) => {
                write!(f, "Shortcut name {} is reserved in the config file", name)
            }
            DesklinkManagerError::ConfigNotLoaded => {
                write!(f, "Config file could not be loaded, refusing to overwrite it")
            }
        }
    }
}

impl Error for DesklinkManagerError {}

#[derive(Default, Debug)]
pub struct DesklinkManagerState {
    pub skip_next: bool,
    pub logger_attached: bool,
    pub config_load_failed: bool,
    pub requests: Vec<ShortcutRequest>,
    pub created: Vec<CreatedShortcut>,
    pub failure: Option<Report<DesklinkManagerError>>,
}
