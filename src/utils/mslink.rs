use error_stack::{IntoReport, ResultExt};
use log::debug;
use mslnk::ShellLink;

use crate::shortcut::{
    descriptor::ShortcutDescriptor,
    link_creator::LinkCreator,
    shortcut_error::{LinkError, LinkResult},
};

pub struct MsLinkCreator;

impl LinkCreator for MsLinkCreator {
    fn extension(&self) -> &'static str {
        "lnk"
    }

    fn create_link(&self, descriptor: &ShortcutDescriptor) -> LinkResult<()> {
        let mut sl = ShellLink::new(&descriptor.target)
            .report()
            .change_context(LinkError::ShellLink)
            .attach_printable_lazy(|| format!("Target {}", descriptor.target.display()))?;

        if !descriptor.working_dir.as_os_str().is_empty() {
            sl.set_working_dir(Some(descriptor.working_dir.display().to_string()));
        }
        sl.set_icon_location(descriptor.icon.as_ref().map(|it| it.display().to_string()));
        sl.set_arguments(descriptor.arguments.clone());
        sl.set_name(descriptor.description.clone());

        debug!("Writing ms link {}", descriptor.destination.display());
        sl.create_lnk(&descriptor.destination)
            .report()
            .change_context(LinkError::WriteFile)
            .attach_printable_lazy(|| {
                format!("Ms link path {}", descriptor.destination.display())
            })?;
        Ok(())
    }
}
