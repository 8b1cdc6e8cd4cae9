#[cfg(test)]
use mockall::automock;

use super::descriptor::ShortcutDescriptor;
use super::shortcut_error::LinkResult;

/// Writes a shortcut file for a resolved descriptor.
#[cfg_attr(test, automock)]
pub trait LinkCreator {
    /// File extension of the produced shortcut, without the dot.
    fn extension(&self) -> &'static str;
    fn create_link(&self, descriptor: &ShortcutDescriptor) -> LinkResult<()>;
}

#[cfg(target_os = "windows")]
pub fn platform_link_creator() -> Box<dyn LinkCreator> {
    Box::new(crate::utils::mslink::MsLinkCreator)
}

#[cfg(not(target_os = "windows"))]
pub fn platform_link_creator() -> Box<dyn LinkCreator> {
    Box::new(super::desktop_entry::DesktopEntryCreator)
}
