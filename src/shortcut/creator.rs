use std::path::PathBuf;

use error_stack::{Report, ResultExt};
use log::{debug, info};

use super::{
    descriptor::{ShortcutDescriptor, ShortcutRequest},
    desktop::DesktopLocator,
    link_creator::LinkCreator,
    shortcut_error::{ShortcutError, ShortcutResult},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedShortcut {
    pub name: String,
    pub file_name: String,
    pub path: PathBuf,
}

pub struct ShortcutCreator {
    link_creator: Box<dyn LinkCreator>,
    desktop_locator: Box<dyn DesktopLocator>,
}

impl ShortcutCreator {
    pub fn new(
        link_creator: Box<dyn LinkCreator>,
        desktop_locator: Box<dyn DesktopLocator>,
    ) -> Self {
        Self {
            link_creator,
            desktop_locator,
        }
    }

    pub fn create_shortcut(&self, request: &ShortcutRequest) -> ShortcutResult<CreatedShortcut> {
        if !request.exe_path.exists() {
            return Err(Report::new(ShortcutError::TargetMissing(
                request.exe_path.clone(),
            )));
        }

        let desktop_dir = self
            .desktop_locator
            .desktop_dir()
            .change_context(ShortcutError::DesktopNotFound)?;

        let descriptor =
            ShortcutDescriptor::resolve(request, &desktop_dir, self.link_creator.extension())?;
        debug!("Shortcut descriptor {:#?}", descriptor);

        self.link_creator
            .create_link(&descriptor)
            .change_context(ShortcutError::LinkCreation(descriptor.file_name()))
            .attach_printable_lazy(|| {
                format!(
                    "Target {} destination {}",
                    descriptor.target.display(),
                    descriptor.destination.display()
                )
            })?;

        info!(
            "Shortcut {} created at {}",
            descriptor.name,
            descriptor.destination.display()
        );
        Ok(CreatedShortcut {
            file_name: descriptor.file_name(),
            name: descriptor.name,
            path: descriptor.destination,
        })
    }

    /// Creates every request; one failure does not stop the rest.
    pub fn create_all(
        &self,
        requests: &[ShortcutRequest],
    ) -> Vec<ShortcutResult<CreatedShortcut>> {
        requests
            .iter()
            .map(|request| {
                self.create_shortcut(request).map_err(|err| {
                    debug!("{:?}", err);
                    err
                })
            })
            .collect()
    }
}
