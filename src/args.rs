use clap::Parser;

use crate::toml_conf::config_struct::ErrorLevel;

pub const DEFAULT_CONFIG_FILE: &str = "desklink.toml";

/// Creates desktop shortcuts for executables
#[derive(Parser, Debug, Default, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct ArgsClap {
    /// Executable the shortcut points to. Without it every entry of the config file is created
    #[clap(short, long, value_parser)]
    pub exe: Option<String>,

    /// Shortcut name, defaults to the executable file name without extension
    #[clap(short, long, value_parser, requires = "exe")]
    pub name: Option<String>,

    /// Icon shown by the shortcut
    #[clap(short, long, value_parser)]
    pub icon: Option<String>,

    /// Arguments passed to the executable
    #[clap(short, long, value_parser, allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Folder the shortcut is written to, defaults to <home>/Desktop
    #[clap(short, long, value_parser)]
    pub desktop: Option<String>,

    /// Config file
    #[clap(short, long, value_parser, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Debug level please use one of following: trace, debug, info, warn, error
    #[clap(short, long, value_enum)]
    pub level: Option<ErrorLevel>,

    /// Remember the --exe shortcut in the config file
    #[clap(short, long, action, requires = "exe")]
    pub save: bool,
}

pub fn parse_args() -> ArgsClap {
    ArgsClap::parse()
}
