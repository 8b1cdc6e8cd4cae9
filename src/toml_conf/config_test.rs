#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fs;

    use tempfile::TempDir;

    use crate::toml_conf::{
        config::{ConfigProvider, DesklinkConfigProvider},
        config_struct::{ConfigError, DesklinkConfig, ErrorLevel, Main, ShortcutEntry},
        utils::{deserialize, serialize},
    };

    #[test]
    fn check_correctness_of_deserialization() {
        let content = r#"
        [main]
        iconPath = "C:/tools/sudoku/icone.ico"
        desktopDir = "D:/Desktop"
        errorLevel = "debug"

        [Sudoku]
        exePath = "C:/tools/sudoku/sudoku.exe"
        runArgs = "--fullscreen"

        ["Sudoku GO"]
        exePath = "C:/tools/sudoku-go/sudoku.exe"
        iconPath = "C:/tools/sudoku-go/go.ico"
        description = "Play sudoku"
        latawiec = true

        [Broken]
        iconPath = "C:/no/exe/here.ico"
    "#;
        let (main, shortcuts) = deserialize(content).unwrap();

        let main_test = Main {
            icon_path: Some("C:/tools/sudoku/icone.ico".to_owned()),
            desktop_dir: Some("D:/Desktop".to_owned()),
            error_level: Some(ErrorLevel::Debug),
        };
        let mut shortcuts_test = BTreeMap::new();
        shortcuts_test.insert(
            "Sudoku".to_owned(),
            ShortcutEntry {
                exe_path: "C:/tools/sudoku/sudoku.exe".to_owned(),
                run_args: Some("--fullscreen".to_owned()),
                ..ShortcutEntry::default()
            },
        );
        shortcuts_test.insert(
            "Sudoku GO".to_owned(),
            ShortcutEntry {
                exe_path: "C:/tools/sudoku-go/sudoku.exe".to_owned(),
                icon_path: Some("C:/tools/sudoku-go/go.ico".to_owned()),
                description: Some("Play sudoku".to_owned()),
                run_args: None,
            },
        );

        assert_eq!(main_test, main);
        assert_eq!(shortcuts_test, shortcuts);
    }

    #[test]
    fn missing_or_broken_main_falls_back_to_defaults() {
        let (main, shortcuts) = deserialize(
            r#"
        [Sudoku]
        exePath = "/opt/sudoku"
    "#,
        )
        .unwrap();
        assert_eq!(main, Main::default());
        assert_eq!(shortcuts.len(), 1);

        let (main, _) = deserialize(
            r#"
        [main]
        errorLevel = "loud"
    "#,
        )
        .unwrap();
        assert_eq!(main, Main::default());
    }

    #[test]
    fn invalid_toml_is_deserializer_error() {
        let err = deserialize("[main\nicon = ").unwrap_err();
        assert_eq!(err.current_context(), &ConfigError::Deserializer);
    }

    #[test]
    fn serialized_main_comes_first_and_entries_are_sorted() {
        let mut config = DesklinkConfig::default();
        config.main.error_level = Some(ErrorLevel::Warn);
        for name in ["zeta", "Alpha", "My App"] {
            config.shortcuts.insert(
                name.to_owned(),
                ShortcutEntry {
                    exe_path: format!("/opt/{}", name),
                    ..ShortcutEntry::default()
                },
            );
        }

        let content = serialize(&config).unwrap();

        assert!(content.starts_with("[main]\nerrorLevel = \"warn\"\n"));
        let alpha = content.find("[Alpha]").unwrap();
        let my_app = content.find("[\"My App\"]").unwrap();
        let zeta = content.find("[zeta]").unwrap();
        assert!(alpha < my_app && my_app < zeta);

        let (main, shortcuts) = deserialize(&content).unwrap();
        assert_eq!(config.main, main);
        assert_eq!(config.shortcuts, shortcuts);
    }

    #[test]
    fn provider_saves_and_loads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("desklink.toml");
        let provider = DesklinkConfigProvider::new(&path);

        let mut config = DesklinkConfig::default();
        config.main.icon_path = Some("/icons/icone.ico".to_owned());
        config.shortcuts.insert(
            "sudoku".to_owned(),
            ShortcutEntry {
                exe_path: "/opt/sudoku/sudoku".to_owned(),
                ..ShortcutEntry::default()
            },
        );
        provider.save_to_file(&config).unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("iconPath = \"/icons/icone.ico\""));
        assert_eq!(provider.load_from_file().unwrap(), config);
    }

    #[test]
    fn provider_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let provider = DesklinkConfigProvider::new(temp_dir.path().join("absent.toml"));

        let err = provider.load_from_file().unwrap_err();
        assert_eq!(err.current_context(), &ConfigError::ConfigFile);
    }
}
