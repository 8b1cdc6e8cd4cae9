use std::fs::OpenOptions;

use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::toml_conf::config_struct::ErrorLevel;

pub const LOG_FILE: &str = "desklink.log";

pub fn init_logger(error_level: ErrorLevel) {
    let level = error_level.as_level_filter();
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
        Err(err) => eprintln!("Logger error, cannot open {}: {:?}", LOG_FILE, err),
    }

    if let Err(err) = CombinedLogger::init(loggers) {
        eprintln!("Logger error {:?}", err);
    }
}

#[cfg(test)]
pub fn mock_init_logger(_error_level: ErrorLevel) {}
