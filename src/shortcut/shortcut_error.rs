use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use error_stack::Result;

pub type ShortcutResult<T> = Result<T, ShortcutError>;
pub type LinkResult<T> = Result<T, LinkError>;
pub type DesktopResult<T> = Result<T, DesktopError>;

#[derive(Debug, PartialEq)]
pub enum ShortcutError {
    TargetMissing(PathBuf),
    DesktopNotFound,
    EmptyShortcutName,
    InvalidShortcutName(String),
    LinkCreation(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ShortcutError::*;
        match self {
            TargetMissing(path) => write!(f, "Error: file {} does not exist.", path.display()),
            DesktopNotFound => write!(f, "Could not locate the desktop folder"),
            EmptyShortcutName => write!(f, "Shortcut name is empty"),
            InvalidShortcutName(name) => {
                write!(f, "Shortcut name {:?} contains a path separator", name)
            }
            LinkCreation(name) => write!(f, "Failed to create shortcut {}", name),
        }
    }
}

impl Error for ShortcutError {}

#[derive(Debug, PartialEq)]
pub enum LinkError {
    ShellLink,
    CreateDir,
    WriteFile,
    SetPermissions,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::ShellLink => write!(f, "ShellLink"),
            LinkError::CreateDir => write!(f, "CreateDir"),
            LinkError::WriteFile => write!(f, "WriteFile"),
            LinkError::SetPermissions => write!(f, "SetPermissions"),
        }
    }
}

impl Error for LinkError {}

#[derive(Debug, PartialEq)]
pub enum DesktopError {
    HomeDirNotFound,
}

impl fmt::Display for DesktopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Home directory not found")
    }
}

impl Error for DesktopError {}
