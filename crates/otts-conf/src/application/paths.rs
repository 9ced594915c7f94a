//! Locations of configuration files, sounds and debug output.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use super::tool_config::PathsConfig;

/// Name of the daemon's main configuration file in either configuration tree.
pub const CONF_FILE_NAME: &str = "openttsd.conf";
/// Desktop entry installed into the autostart directory.
pub const DESKTOP_FILE_NAME: &str = "openttsd.desktop";
/// Sound played by the audio checks.
pub const TEST_SOUND_NAME: &str = "test.wav";

/// Which daemon instance an operation is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The per-user daemon configured under `~/.opentts`.
    User,
    /// The system-wide daemon; changes need root.
    System,
}

impl Target {
    pub const CHOICES: [&'static str; 2] = ["user", "system"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::User => "user",
            Target::System => "system",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Target::User),
            "system" => Ok(Target::System),
            other => Err(format!("unknown target '{other}'")),
        }
    }
}

/// Resolved file-system locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// The operator's home directory.
    pub home: PathBuf,
    /// Scratch directory for debug output (`$TMPDIR` or `/tmp`).
    pub temp: PathBuf,
    pub system_conf_dir: PathBuf,
    pub pristine_conf_dir: PathBuf,
    pub sound_data_dir: PathBuf,
    pub desktop_dir: PathBuf,
}

impl Paths {
    pub fn new(home: PathBuf, temp: PathBuf, config: &PathsConfig) -> Self {
        Self {
            home,
            temp,
            system_conf_dir: config.system_conf_dir.clone(),
            pristine_conf_dir: config.pristine_conf_dir.clone(),
            sound_data_dir: config.sound_data_dir.clone(),
            desktop_dir: config.desktop_dir.clone(),
        }
    }

    /// `~/.opentts`: user configuration and log directory.
    pub fn user_daemon_dir(&self) -> PathBuf {
        self.home.join(".opentts")
    }

    /// `~/.opentts/conf`.
    pub fn user_conf_dir(&self) -> PathBuf {
        self.user_daemon_dir().join("conf")
    }

    pub fn conf_dir(&self, target: Target) -> PathBuf {
        match target {
            Target::User => self.user_conf_dir(),
            Target::System => self.system_conf_dir.clone(),
        }
    }

    pub fn conf_file(&self, target: Target) -> PathBuf {
        self.conf_dir(target).join(CONF_FILE_NAME)
    }

    pub fn autostart_dir(&self) -> PathBuf {
        self.home.join(".config").join("autostart")
    }

    pub fn desktop_file(&self) -> PathBuf {
        self.desktop_dir.join(DESKTOP_FILE_NAME)
    }

    pub fn test_sound(&self) -> PathBuf {
        self.sound_data_dir.join(TEST_SOUND_NAME)
    }

    /// Directory the daemon writes debug output to when started with `-D`.
    pub fn debug_dir(&self) -> PathBuf {
        self.temp.join("openttsd-debug")
    }

    /// Archive collecting debug output, e.g. `openttsd-debug-7-3-2026.tar.gz`.
    pub fn debug_archive(&self, date: NaiveDate) -> PathBuf {
        self.temp.join(format!(
            "openttsd-debug-{}-{}-{}.tar.gz",
            date.day(),
            date.month(),
            date.year()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Paths {
        Paths::new(
            PathBuf::from("/home/alice"),
            PathBuf::from("/tmp"),
            &PathsConfig::default(),
        )
    }

    #[test]
    fn test_user_conf_file_under_home() {
        assert_eq!(
            paths().conf_file(Target::User),
            PathBuf::from("/home/alice/.opentts/conf/openttsd.conf")
        );
    }

    #[test]
    fn test_system_conf_file_from_config() {
        assert_eq!(
            paths().conf_file(Target::System),
            PathBuf::from("/etc/opentts/openttsd.conf")
        );
    }

    #[test]
    fn test_autostart_dir() {
        assert_eq!(
            paths().autostart_dir(),
            PathBuf::from("/home/alice/.config/autostart")
        );
    }

    #[test]
    fn test_debug_archive_name_uses_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(
            paths().debug_archive(date),
            PathBuf::from("/tmp/openttsd-debug-7-3-2026.tar.gz")
        );
    }

    #[test]
    fn test_target_round_trips_through_str() {
        for choice in Target::CHOICES {
            let target: Target = choice.parse().unwrap();
            assert_eq!(target.as_str(), choice);
        }
        assert!("root".parse::<Target>().is_err());
    }
}
