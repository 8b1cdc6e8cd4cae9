#[cfg(test)]
use mockall::automock;

use error_stack::{IntoReport, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

use super::config_struct::{ConfigError, DesklinkConfig};
use super::utils::{deserialize, serialize};

pub type ConfigResult<T> = Result<T, ConfigError>;

pub struct DesklinkConfigProvider {
    filename: PathBuf,
}

#[cfg_attr(test, automock)]
pub trait ConfigProvider {
    fn load_from_file(&self) -> ConfigResult<DesklinkConfig>;
    fn save_to_file(&self, config: &DesklinkConfig) -> ConfigResult<()>;
}

impl ConfigProvider for DesklinkConfigProvider {
    fn load_from_file(&self) -> ConfigResult<DesklinkConfig> {
        let content = fs::read_to_string(&self.filename)
            .report()
            .change_context(ConfigError::ConfigFile)
            .attach_printable_lazy(|| format!("Error reading {}", self.filename.display()))?;

        let (main, shortcuts) = deserialize(&content)
            .attach_printable_lazy(|| format!("Error parsing {}", self.filename.display()))?;
        Ok(DesklinkConfig { main, shortcuts })
    }

    fn save_to_file(&self, config: &DesklinkConfig) -> ConfigResult<()> {
        let content = serialize(config)?;
        fs::write(&self.filename, content.as_bytes())
            .report()
            .change_context(ConfigError::ConfigFile)
            .attach_printable_lazy(|| format!("Error writing {}", self.filename.display()))?;
        Ok(())
    }
}

impl DesklinkConfigProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        DesklinkConfigProvider {
            filename: path.as_ref().to_path_buf(),
        }
    }
}
