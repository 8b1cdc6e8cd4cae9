use std::path::{Path, PathBuf};

use error_stack::Report;

use super::shortcut_error::{ShortcutError, ShortcutResult};

/// What the caller asks for. Everything except `exe_path` is optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShortcutRequest {
    pub exe_path: PathBuf,
    pub shortcut_name: Option<String>,
    pub icon_path: Option<PathBuf>,
    pub arguments: Option<String>,
    pub description: Option<String>,
}

// builders for tests; the manager fills requests field by field
#[cfg(test)]
impl ShortcutRequest {
    pub fn new(exe_path: impl AsRef<Path>) -> Self {
        Self {
            exe_path: exe_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.shortcut_name = Some(name.into());
        self
    }

    pub fn with_icon(mut self, icon: impl AsRef<Path>) -> Self {
        self.icon_path = Some(icon.as_ref().to_path_buf());
        self
    }
}

/// Fully resolved shortcut, ready to be handed to a `LinkCreator`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutDescriptor {
    pub name: String,
    pub destination: PathBuf,
    pub target: PathBuf,
    /// Empty when the target path has no parent component.
    pub working_dir: PathBuf,
    pub icon: Option<PathBuf>,
    pub arguments: Option<String>,
    pub description: Option<String>,
}

impl ShortcutDescriptor {
    pub fn resolve(
        request: &ShortcutRequest,
        desktop_dir: &Path,
        extension: &str,
    ) -> ShortcutResult<Self> {
        let name = match &request.shortcut_name {
            Some(name) => name.to_owned(),
            None => derive_shortcut_name(&request.exe_path)?,
        };
        validate_shortcut_name(&name)?;

        let file_name = format!("{}.{}", name, extension);
        let working_dir = request
            .exe_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self {
            destination: desktop_dir.join(&file_name),
            target: request.exe_path.clone(),
            working_dir,
            icon: request.icon_path.clone(),
            arguments: request.arguments.clone(),
            description: request.description.clone(),
            name,
        })
    }

    pub fn file_name(&self) -> String {
        self.destination
            .file_name()
            .map(|it| it.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Base file name of the executable with its last extension stripped.
pub fn derive_shortcut_name(exe_path: &Path) -> ShortcutResult<String> {
    exe_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .ok_or_else(|| Report::new(ShortcutError::EmptyShortcutName))
        .map_err(|err| err.attach_printable(format!("No file name in {}", exe_path.display())))
}

fn validate_shortcut_name(name: &str) -> ShortcutResult<()> {
    if name.trim().is_empty() {
        return Err(Report::new(ShortcutError::EmptyShortcutName));
    }
    if name.contains(['/', '\\']) {
        return Err(Report::new(ShortcutError::InvalidShortcutName(
            name.to_string(),
        )));
    }
    Ok(())
}
