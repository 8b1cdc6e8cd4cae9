use std::process::ExitCode;

use args::parse_args;
use manager::manager_header::DesklinkManager;
use shortcut::{
    creator::ShortcutCreator, desktop::desktop_locator_for,
    link_creator::platform_link_creator,
};
use toml_conf::config::DesklinkConfigProvider;

mod args;
mod manager {
    pub mod manager;
    pub mod manager_header;
}
mod shortcut {
    pub mod creator;
    pub mod descriptor;
    pub mod desktop;
    #[cfg(not(target_os = "windows"))]
    pub mod desktop_entry;
    pub mod link_creator;
    pub mod shortcut_error;
}
mod toml_conf {
    pub mod config;
    pub mod config_struct;
    pub mod config_test;
    pub mod utils;
}
mod utils {
    pub mod init_logger;
    #[cfg(target_os = "windows")]
    pub mod mslink;
}

fn main() -> ExitCode {
    let args = parse_args();
    let config_provider = Box::new(DesklinkConfigProvider::new(&args.config));
    let mut manager = DesklinkManager::new(
        args,
        config_provider,
        Box::new(|desktop| {
            ShortcutCreator::new(platform_link_creator(), desktop_locator_for(desktop))
        }),
    );

    match manager.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
