//! Configuration management

use crate::{Result, ScanError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration for the entry pad
///
/// Manages persistent settings: the debounce window, manual-edit policy,
/// bell feedback, and the submission command.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.scanpad.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from disk or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    ///
    /// Creates the file with defaults if it does not exist. Tests use this
    /// with a temporary directory so they never touch the real config.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(path)
                .map_err(|e| ScanError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(path)
                .map_err(|e| ScanError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self {
            ini,
            path: path.to_path_buf(),
        })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| ScanError::Config(format!("Failed to save config: {}", e)))
    }

    /// Get config file path (~/.scanpad.cfg)
    fn config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".scanpad.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("scanner"))
            .set("debounce_ms", "50")
            .set("manual_edit", "true")
            .set("bell", "false");

        ini.with_section(Some("submit"));

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    // Pad-specific configuration getters

    /// Idle window after the last keystroke before a burst completes
    ///
    /// 50 ms distinguishes a scanner burst (single-digit milliseconds
    /// between characters) from deliberate typing.
    pub fn debounce_ms(&self) -> u64 {
        self.get_int("scanner", "debounce_ms", 50).max(1) as u64
    }

    /// Debounce window as a Duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms())
    }

    /// May the user edit the pending buffer (backspace, ctrl+u)?
    ///
    /// When false the field is effectively read-only, driven solely by
    /// the capture buffer.
    pub fn manual_edit(&self) -> bool {
        self.get_bool("scanner", "manual_edit", true)
    }

    /// Ring the terminal bell on each accepted scan?
    pub fn bell(&self) -> bool {
        self.get_bool("scanner", "bell", false)
    }

    /// External command receiving the JSON batch on stdin, if configured
    pub fn submit_command(&self) -> Option<String> {
        let command = self.get_string("submit", "command", "");
        if command.trim().is_empty() {
            None
        } else {
            Some(command)
        }
    }
}
