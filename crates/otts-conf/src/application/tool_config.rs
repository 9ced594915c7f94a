//! Tool configuration schema.
//!
//! Describes where the daemon's files live, which programs to run and how
//! long to wait.  Every field has a default so the tool works without any
//! configuration file; loading from disk lives in
//! `infrastructure::storage::config`.
//!
//! ```toml
//! [general]
//! log_level = "warn"
//!
//! [paths]
//! system_conf_dir = "/etc/opentts"
//!
//! [festival]
//! host = "localhost"
//! port = 1314
//!
//! [commands]
//! daemon = "openttsd"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub festival: FestivalConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Installation directories of the daemon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Directory holding the system-wide `openttsd.conf`.
    #[serde(default = "default_system_conf_dir")]
    pub system_conf_dir: PathBuf,
    /// Pristine configuration tree copied into new user configurations.
    #[serde(default = "default_pristine_conf_dir")]
    pub pristine_conf_dir: PathBuf,
    /// Directory holding `test.wav`.
    #[serde(default = "default_sound_data_dir")]
    pub sound_data_dir: PathBuf,
    /// Directory holding `openttsd.desktop`.
    #[serde(default = "default_desktop_dir")]
    pub desktop_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FestivalConfig {
    #[serde(default = "default_festival_host")]
    pub host: String,
    #[serde(default = "default_festival_port")]
    pub port: u16,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl FestivalConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// External programs invoked by the tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandsConfig {
    #[serde(default = "default_daemon")]
    pub daemon: String,
    #[serde(default = "default_say")]
    pub say: String,
    #[serde(default = "default_espeak")]
    pub espeak: String,
    #[serde(default = "default_aplay")]
    pub aplay: String,
    #[serde(default = "default_paplay")]
    pub paplay: String,
    #[serde(default = "default_python")]
    pub python: String,
    /// Python module whose importability is checked.
    #[serde(default = "default_python_module")]
    pub python_module: String,
    #[serde(default = "default_init_script")]
    pub init_script: String,
    #[serde(default = "default_killall")]
    pub killall: String,
    #[serde(default = "default_tar")]
    pub tar: String,
}

/// Pauses while the daemon starts or writes debug output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_collect_delay_ms")]
    pub collect_delay_ms: u64,
}

impl TimingConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn collect_delay(&self) -> Duration {
        Duration::from_millis(self.collect_delay_ms)
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_system_conf_dir() -> PathBuf {
    PathBuf::from("/etc/opentts")
}
fn default_pristine_conf_dir() -> PathBuf {
    PathBuf::from("/usr/share/opentts/conf")
}
fn default_sound_data_dir() -> PathBuf {
    PathBuf::from("/usr/share/sounds/opentts")
}
fn default_desktop_dir() -> PathBuf {
    PathBuf::from("/usr/share/opentts/desktop")
}
fn default_festival_host() -> String {
    "localhost".to_string()
}
fn default_festival_port() -> u16 {
    1314
}
fn default_connect_timeout_ms() -> u64 {
    3000
}
fn default_daemon() -> String {
    "openttsd".to_string()
}
fn default_say() -> String {
    "otts-say".to_string()
}
fn default_espeak() -> String {
    "espeak".to_string()
}
fn default_aplay() -> String {
    "aplay".to_string()
}
fn default_paplay() -> String {
    "paplay".to_string()
}
fn default_python() -> String {
    "python3".to_string()
}
fn default_python_module() -> String {
    "opentts".to_string()
}
fn default_init_script() -> String {
    "/etc/init.d/openttsd".to_string()
}
fn default_killall() -> String {
    "killall".to_string()
}
fn default_tar() -> String {
    "tar".to_string()
}
fn default_settle_delay_ms() -> u64 {
    2000
}
fn default_collect_delay_ms() -> u64 {
    5000
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            system_conf_dir: default_system_conf_dir(),
            pristine_conf_dir: default_pristine_conf_dir(),
            sound_data_dir: default_sound_data_dir(),
            desktop_dir: default_desktop_dir(),
        }
    }
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            host: default_festival_host(),
            port: default_festival_port(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            daemon: default_daemon(),
            say: default_say(),
            espeak: default_espeak(),
            aplay: default_aplay(),
            paplay: default_paplay(),
            python: default_python(),
            python_module: default_python_module(),
            init_script: default_init_script(),
            killall: default_killall(),
            tar: default_tar(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            collect_delay_ms: default_collect_delay_ms(),
        }
    }
}
