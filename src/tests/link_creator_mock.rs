use std::fs;

use error_stack::{IntoReport, ResultExt};

use crate::shortcut::{link_creator::MockLinkCreator, shortcut_error::LinkError};

/// Mock that behaves like a real creator: writes the target path into the destination.
pub fn link_creator_mock_writing_files() -> Box<MockLinkCreator> {
    let mut link_creator = Box::new(MockLinkCreator::new());
    link_creator.expect_extension().return_const("lnk");
    link_creator.expect_create_link().returning(|desc| {
        if let Some(parent) = desc.destination.parent() {
            fs::create_dir_all(parent)
                .report()
                .change_context(LinkError::CreateDir)?;
        }
        fs::write(&desc.destination, desc.target.display().to_string())
            .report()
            .change_context(LinkError::WriteFile)
    });
    link_creator
}
