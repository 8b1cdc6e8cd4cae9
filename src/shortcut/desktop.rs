use std::path::PathBuf;

use error_stack::Report;
#[cfg(test)]
use mockall::automock;

use super::shortcut_error::{DesktopError, DesktopResult};

const DESKTOP_FOLDER: &str = "Desktop";

/// Where shortcuts land.
#[cfg_attr(test, automock)]
pub trait DesktopLocator {
    fn desktop_dir(&self) -> DesktopResult<PathBuf>;
}

/// `<home>/Desktop`. The folder itself is not checked.
pub struct HomeDesktop;

impl DesktopLocator for HomeDesktop {
    fn desktop_dir(&self) -> DesktopResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DESKTOP_FOLDER))
            .ok_or_else(|| Report::new(DesktopError::HomeDirNotFound))
    }
}

pub struct FixedDesktop(pub PathBuf);

impl DesktopLocator for FixedDesktop {
    fn desktop_dir(&self) -> DesktopResult<PathBuf> {
        Ok(self.0.clone())
    }
}

pub fn desktop_locator_for(desktop_dir: Option<PathBuf>) -> Box<dyn DesktopLocator> {
    match desktop_dir {
        Some(dir) => Box::new(FixedDesktop(dir)),
        None => Box::new(HomeDesktop),
    }
}
