//! XDG desktop entries, used where Windows shell links are not available.

use std::fmt::{self, Write as FmtWrite};
use std::fs;
use std::path::Path;

use error_stack::{IntoReport, ResultExt};
use log::debug;

use super::{
    descriptor::ShortcutDescriptor,
    link_creator::LinkCreator,
    shortcut_error::{LinkError, LinkResult},
};

pub struct DesktopEntryCreator;

impl LinkCreator for DesktopEntryCreator {
    fn extension(&self) -> &'static str {
        "desktop"
    }

    fn create_link(&self, descriptor: &ShortcutDescriptor) -> LinkResult<()> {
        let path = &descriptor.destination;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .report()
                .change_context(LinkError::CreateDir)
                .attach_printable_lazy(|| format!("Desktop folder {}", parent.display()))?;
        }

        let content = render_desktop_entry(descriptor);
        fs::write(path, content)
            .report()
            .change_context(LinkError::WriteFile)
            .attach_printable_lazy(|| format!("Desktop entry {}", path.display()))?;

        // desktops refuse to launch entries that are not executable
        set_executable(path)?;

        debug!("Wrote desktop entry to {}", path.display());
        Ok(())
    }
}

pub fn render_desktop_entry(descriptor: &ShortcutDescriptor) -> String {
    let mut content = String::new();
    // writing into a String cannot fail
    let _ = write_entry(&mut content, descriptor);
    content
}

fn write_entry(content: &mut String, descriptor: &ShortcutDescriptor) -> fmt::Result {
    writeln!(content, "[Desktop Entry]")?;
    writeln!(content, "Type=Application")?;
    writeln!(content, "Name={}", escape_value(&descriptor.name))?;
    if let Some(ref comment) = descriptor.description {
        writeln!(content, "Comment={}", escape_value(comment))?;
    }

    let mut exec = quote_exec_arg(&descriptor.target.display().to_string());
    if let Some(ref arguments) = descriptor.arguments {
        exec.push(' ');
        exec.push_str(arguments);
    }
    // `%` starts a field code in Exec
    let exec = exec.replace('%', "%%");
    writeln!(content, "Exec={}", escape_value(&exec))?;

    if !descriptor.working_dir.as_os_str().is_empty() {
        let working_dir = descriptor.working_dir.display().to_string();
        writeln!(content, "Path={}", escape_value(&working_dir))?;
    }
    if let Some(ref icon) = descriptor.icon {
        writeln!(content, "Icon={}", escape_value(&icon.display().to_string()))?;
    }
    writeln!(content, "Terminal=false")
}

/// Escapes a string value of a desktop entry key.
/// Applied on top of Exec quoting, so a backslash inside a quoted Exec
/// argument ends up escaped twice.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn quote_exec_arg(arg: &str) -> String {
    let needs_quotes = arg
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '$' | '\\'));
    if !needs_quotes {
        return arg.to_string();
    }
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '`' | '$' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(unix)]
fn set_executable(path: &Path) -> LinkResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .report()
        .change_context(LinkError::SetPermissions)?
        .permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
        .report()
        .change_context(LinkError::SetPermissions)
        .attach_printable_lazy(|| format!("chmod {}", path.display()))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> LinkResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::shortcut::descriptor::ShortcutRequest;

    fn descriptor(desktop: &Path, exe: &str) -> ShortcutDescriptor {
        let mut request = ShortcutRequest::new(exe).with_icon("/usr/share/icons/sudoku.png");
        request.arguments = Some("--fullscreen".to_string());
        ShortcutDescriptor::resolve(&request, desktop, "desktop").unwrap()
    }

    #[test]
    fn renders_all_fields() {
        let desc = descriptor(Path::new("/desk"), "/opt/sudoku/sudoku");
        let content = render_desktop_entry(&desc);

        assert!(content.starts_with("[Desktop Entry]\n"));
        assert!(content.contains("Type=Application\n"));
        assert!(content.contains("Name=sudoku\n"));
        assert!(content.contains("Exec=/opt/sudoku/sudoku --fullscreen\n"));
        assert!(content.contains("Path=/opt/sudoku\n"));
        assert!(content.contains("Icon=/usr/share/icons/sudoku.png\n"));
        assert!(content.contains("Terminal=false\n"));
        assert!(!content.contains("Comment="));
    }

    #[test]
    fn quotes_targets_with_spaces() {
        let desc = descriptor(Path::new("/desk"), "/opt/my games/sudoku");
        let content = render_desktop_entry(&desc);

        assert!(content.contains("Exec=\"/opt/my games/sudoku\" --fullscreen\n"));
        assert!(content.contains("Path=/opt/my games\n"));
    }

    #[test]
    fn skips_empty_working_dir() {
        let request = ShortcutRequest::new("sudoku");
        let desc = ShortcutDescriptor::resolve(&request, Path::new("/desk"), "desktop").unwrap();
        assert_eq!(desc.working_dir, PathBuf::new());
        assert!(!render_desktop_entry(&desc).contains("Path="));
    }

    #[test]
    fn renders_percent_and_backslash_escaped() {
        let desc = descriptor(Path::new("/desk"), "/opt/100%/sudoku");
        let content = render_desktop_entry(&desc);
        assert!(content.contains("Exec=/opt/100%%/sudoku --fullscreen\n"));
        assert!(content.contains("Path=/opt/100%\n"));

        // quoted once for Exec, then once more as a string value
        let desc = descriptor(Path::new("/desk"), r"/opt/we\ird/sudoku");
        let content = render_desktop_entry(&desc);
        assert!(content.contains(r#"Exec="/opt/we\\\\ird/sudoku" --fullscreen"#));
        assert!(content.contains("Path=/opt/we\\\\ird\n"));
    }

    #[test]
    fn control_characters_escaped_in_values() {
        let mut desc = descriptor(Path::new("/desk"), "/opt/sudoku/sudoku");
        desc.description = Some("Play\tsudoku\nall night".to_string());
        desc.name = "Su\rdoku".to_string();
        let content = render_desktop_entry(&desc);

        assert!(content.contains("Comment=Play\\tsudoku\\nall night\n"));
        assert!(content.contains("Name=Su\\rdoku\n"));
        assert_eq!(content.lines().count(), 8);
    }

    #[test]
    fn writes_file_creating_missing_desktop() {
        let temp_dir = TempDir::new().unwrap();
        let desktop = temp_dir.path().join("Desktop");
        let desc = descriptor(&desktop, "/opt/sudoku/sudoku");

        DesktopEntryCreator.create_link(&desc).unwrap();

        let written = desktop.join("sudoku.desktop");
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains("Name=sudoku"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&written).unwrap().permissions().mode();
            assert_eq!(mode & 0o755, 0o755);
        }
    }

    #[test]
    fn second_write_overwrites_same_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut desc = descriptor(temp_dir.path(), "/opt/sudoku/sudoku");

        DesktopEntryCreator.create_link(&desc).unwrap();
        desc.description = Some("second".to_string());
        DesktopEntryCreator.create_link(&desc).unwrap();

        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
        let content = fs::read_to_string(&desc.destination).unwrap();
        assert!(content.contains("Comment=second"));
    }
}
