use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use log::{debug, error, info, log, trace, warn, Level};

use crate::{
    args::ArgsClap,
    manager::manager_header::{
        DesklinkManager, DesklinkManagerError, DesklinkManagerState, DesklinkThings,
        ResultManagerErr, ShortcutCreatorCtor,
    },
    shortcut::{creator::CreatedShortcut, descriptor::ShortcutRequest},
    toml_conf::{
        config::ConfigProvider,
        config_struct::{DesklinkConfig, ErrorLevel, ShortcutEntry},
        utils::MAIN_SECTION,
    },
};

#[cfg(test)]
use crate::utils::init_logger::mock_init_logger as init_logger;
#[cfg(not(test))]
use crate::utils::init_logger::init_logger;

impl DesklinkManager {
    pub fn new(
        args: ArgsClap,
        config_provider: Box<dyn ConfigProvider>,
        creator_ctor: ShortcutCreatorCtor,
    ) -> Self {
        Self {
            config: DesklinkConfig::default(),
            args,
            config_provider,
            creator_ctor,
            state: DesklinkManagerState::default(),
        }
    }

    /// load config -> logger -> requests -> shortcuts -> save
    pub fn run(&mut self) -> ResultManagerErr<Vec<CreatedShortcut>> {
        self.or_log_err(|this| this.load_config(), Level::Warn)
            .bind(|this| this.collect_requests(), Level::Error)
            .bind(|this| this.create_shortcuts(), Level::Error)
            .bind(|this| this.save_config(), Level::Error)
            .finish()
    }

    fn entry_request(&self, name: &str, entry: &ShortcutEntry) -> ShortcutRequest {
        ShortcutRequest {
            exe_path: PathBuf::from(&entry.exe_path),
            shortcut_name: Some(name.to_string()),
            icon_path: self
                .args
                .icon
                .as_ref()
                .or(entry.icon_path.as_ref())
                .or(self.config.main.icon_path.as_ref())
                .map(PathBuf::from),
            arguments: self.args.args.clone().or_else(|| entry.run_args.clone()),
            description: entry.description.clone(),
        }
    }

    fn desktop_override(&self) -> Option<PathBuf> {
        self.args
            .desktop
            .as_ref()
            .or(self.config.main.desktop_dir.as_ref())
            .map(PathBuf::from)
    }
}

impl DesklinkThings for DesklinkManager {
    fn load_config(&mut self) -> ResultManagerErr<&mut Self> {
        if !Path::new(&self.args.config).exists() {
            self.attach_logger()?;
            info!("No config file {}, using defaults", self.args.config);
            return Ok(self);
        }

        let config = self
            .config_provider
            .load_from_file()
            .change_context(DesklinkManagerError::LoadConfigError)
            .or_else(|err| {
                self.state.config_load_failed = true;
                self.attach_logger()?;
                Err(err)
            })?;
        self.config = config;
        self.attach_logger()?;
        info!("config {} loaded", self.args.config);
        trace!("Full config: \n {:#?}", self.config);
        Ok(self)
    }

    fn attach_logger(&mut self) -> ResultManagerErr<&mut Self> {
        if self.state.logger_attached {
            return Ok(self);
        }
        let level = self
            .args
            .level
            .or(self.config.main.error_level)
            .unwrap_or(ErrorLevel::Info);

        init_logger(level);
        self.state.logger_attached = true;
        Ok(self)
    }

    fn collect_requests(&mut self) -> ResultManagerErr<&mut Self> {
        let requests = match &self.args.exe {
            Some(exe) => vec![ShortcutRequest {
                exe_path: PathBuf::from(exe),
                shortcut_name: self.args.name.clone(),
                icon_path: self
                    .args
                    .icon
                    .as_ref()
                    .or(self.config.main.icon_path.as_ref())
                    .map(PathBuf::from),
                arguments: self.args.args.clone(),
                description: None,
            }],
            None => self
                .config
                .shortcuts
                .iter()
                .map(|(name, entry)| self.entry_request(name, entry))
                .collect(),
        };

        if requests.is_empty() {
            return Err(Report::new(DesklinkManagerError::NothingToCreate))
                .attach_printable(format!("Config file {}", self.args.config));
        }
        debug!("Shortcut requests {:#?}", requests);
        self.state.requests = requests;
        Ok(self)
    }

    fn create_shortcuts(&mut self) -> ResultManagerErr<&mut Self> {
        let creator = (self.creator_ctor)(self.desktop_override());
        let mut failed = 0;

        for result in creator.create_all(&self.state.requests) {
            match result {
                Ok(created) => {
                    println!("Shortcut '{}' created on desktop.", created.file_name);
                    debug!("Shortcut written to {}", created.path.display());
                    self.state.created.push(created);
                }
                Err(err) => {
                    error!("{}", err);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(Report::new(DesklinkManagerError::ShortcutsFailed(failed)));
        }
        Ok(self)
    }

    fn save_config(&mut self) -> ResultManagerErr<&mut Self> {
        if !self.args.save {
            return Ok(self);
        }
        // saving over a file we could not read would drop its other entries
        if self.state.config_load_failed {
            return Err(Report::new(DesklinkManagerError::ConfigNotLoaded))
                .attach_printable(format!("Config file {}", self.args.config));
        }
        let exe = self
            .args
            .exe
            .clone()
            .ok_or_else(|| Report::new(DesklinkManagerError::MissingExeForSave))?;
        let name = match self.state.created.first() {
            Some(created) => created.name.clone(),
            None => return Err(Report::new(DesklinkManagerError::MissingExeForSave)),
        };
        if name == MAIN_SECTION {
            return Err(Report::new(DesklinkManagerError::ReservedShortcutName(name)));
        }

        self.config.shortcuts.insert(
            name.clone(),
            ShortcutEntry {
                exe_path: exe,
                icon_path: self.args.icon.clone(),
                run_args: self.args.args.clone(),
                description: None,
            },
        );
        info!("Saving shortcut {} to {}", name, self.args.config);
        self.config_provider
            .save_to_file(&self.config)
            .change_context(DesklinkManagerError::SaveConfigError)?;
        Ok(self)
    }

    fn bind(
        &mut self,
        cb: impl Fn(&mut DesklinkManager) -> ResultManagerErr<&mut Self>,
        log_level: Level,
    ) -> &mut Self {
        if self.state.skip_next {
            return self;
        }
        if let Err(err) = cb(self).map(|_| ()) {
            self.state.skip_next = true;
            log!(log_level, "{}", err);
            debug!("Error {:?}", err);
            self.state.failure = Some(err);
        }
        self
    }

    fn or_log_err(
        &mut self,
        cb: impl Fn(&mut DesklinkManager) -> ResultManagerErr<&mut Self>,
        log_level: Level,
    ) -> &mut Self {
        if let Err(err) = cb(self).map(|_| ()) {
            log!(log_level, "{}", err);
            debug!("Error {:?}", err);
        }
        self
    }

    fn finish(&mut self) -> ResultManagerErr<Vec<CreatedShortcut>> {
        match self.state.failure.take() {
            Some(err) => Err(err),
            None => {
                if self.state.created.is_empty() {
                    warn!("No shortcut created");
                }
                Ok(std::mem::take(&mut self.state.created))
            }
        }
    }
}
