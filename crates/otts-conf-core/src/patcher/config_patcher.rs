//! Line-oriented substitution of setting values in `openttsd.conf`.
//!
//! Every line that [`assigns`] one of the requested settings is replaced by
//! `"<name>   <value>"`; every other line is copied through byte-for-byte.
//! The file is handled as raw bytes, so comments in any encoding survive.
//! Lines are never inserted or removed, so the output always has exactly as
//! many lines as the input.
//!
//! # On-disk update sequence
//!
//! ```text
//! read original ──► patch_text() ──► write <path>.bak ──► write temp file ──► rename over <path>
//! ```
//!
//! The backup and the temporary file both get the permissions of the
//! original.  The temporary file lives in the same directory as the target so
//! the final rename is atomic.  A failure at any step before the rename leaves the
//! original file untouched.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::line::assigns;
use crate::domain::setting::SettingRequest;

/// Suffix appended to the configuration path for the pre-modification copy.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Separator written between the setting name and its value.
const VALUE_SEPARATOR: &[u8] = b"   ";

const CRLF: &[u8] = b"\r\n";
const LF: &[u8] = b"\n";

/// Error type for patching a configuration file on disk.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup copy could not be written.
    #[error("failed to write backup {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The patched content could not be written or moved into place.
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of applying a request to configuration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// The patched content.
    pub content: Vec<u8>,
    /// `(line number, setting name)` of every rewritten line, 1-based.
    pub rewritten: Vec<(usize, String)>,
    /// Requested settings that matched no line, in request order.
    pub unmatched: Vec<String>,
}

/// Applies `request` to `input` and returns the patched content.
///
/// Each line is checked against the requested settings in request order and
/// rewritten for the first one it assigns.  The line terminator (`\n`,
/// `\r\n`, or none on an unterminated last line) is preserved.
pub fn patch_text(input: &[u8], request: &SettingRequest) -> PatchOutcome {
    let mut content = Vec::with_capacity(input.len());
    let mut rewritten = Vec::new();

    for (index, line) in input.split_inclusive(|&b| b == b'\n').enumerate() {
        let (body, terminator) = split_terminator(line);

        match request.iter().find(|(name, _)| assigns(body, name)) {
            Some((name, value)) => {
                debug!(line = index + 1, setting = name, "rewriting assignment");
                content.extend_from_slice(name.as_bytes());
                content.extend_from_slice(VALUE_SEPARATOR);
                content.extend_from_slice(value.serialize().as_bytes());
                content.extend_from_slice(terminator);
                rewritten.push((index + 1, name.to_string()));
            }
            None => content.extend_from_slice(line),
        }
    }

    let unmatched = request
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !rewritten.iter().any(|(_, n)| n.as_str() == *name))
        .map(str::to_string)
        .collect();

    PatchOutcome {
        content,
        rewritten,
        unmatched,
    }
}

/// Returns the backup path for `path`: the same path with `.bak` appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Rewrites configuration files in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigPatcher;

impl ConfigPatcher {
    pub fn new() -> Self {
        Self
    }

    /// Applies `request` to the file at `path`, leaving the original content
    /// in `<path>.bak`.
    ///
    /// Settings that match no line are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError`] if the file cannot be read, the backup cannot be
    /// written, or the new content cannot be written and renamed into place.
    pub fn patch(&self, path: &Path, request: &SettingRequest) -> Result<(), PatchError> {
        let read_error = |source| PatchError::Read {
            path: path.to_path_buf(),
            source,
        };
        let original = std::fs::read(path).map_err(read_error)?;
        let permissions = std::fs::metadata(path).map_err(read_error)?.permissions();

        let outcome = patch_text(&original, request);

        let backup = backup_path(path);
        write_backup(&backup, &original, permissions).map_err(|source| PatchError::Backup {
            path: backup.clone(),
            source,
        })?;

        replace_contents(path, &outcome.content).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        for name in &outcome.unmatched {
            warn!(setting = %name, path = %path.display(), "setting not found in config file");
        }
        info!(
            path = %path.display(),
            rewritten = outcome.rewritten.len(),
            backup = %backup.display(),
            "config file patched"
        );
        Ok(())
    }
}

/// Splits a line ending at `\n` (or at end of input) into body and terminator.
fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    if let Some(body) = line.strip_suffix(CRLF) {
        (body, CRLF)
    } else if let Some(body) = line.strip_suffix(LF) {
        (body, LF)
    } else {
        (line, &line[line.len()..])
    }
}

/// Writes the pre-modification copy with the original file's permissions.
fn write_backup(
    backup: &Path,
    original: &[u8],
    permissions: std::fs::Permissions,
) -> std::io::Result<()> {
    std::fs::write(backup, original)?;
    std::fs::set_permissions(backup, permissions)
}

/// Writes `contents` to a sibling temporary file and renames it over `path`,
/// carrying over the permissions of the file being replaced.
fn replace_contents(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    let permissions = std::fs::metadata(path)?.permissions();
    std::fs::set_permissions(tmp.path(), permissions)?;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::setting::SettingValue;

    fn request(pairs: &[(&str, SettingValue)]) -> SettingRequest {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn test_single_value_line_is_rewritten() {
        // Arrange
        let req = request(&[("DefaultModule", SettingValue::from("espeak"))]);

        // Act
        let out = patch_text(b"DefaultModule oldvalue\n", &req);

        // Assert
        assert_eq!(out.content, b"DefaultModule   espeak\n");
        assert_eq!(out.rewritten, vec![(1, "DefaultModule".to_string())]);
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn test_pass_through_lines_keep_exact_bytes() {
        let input = "# comment with trailing spaces   \n\n  LogLevel  3\t\n";
        let req = request(&[("DefaultRate", SettingValue::Integer(50))]);

        let out = patch_text(input.as_bytes(), &req);

        assert_eq!(out.content, input.as_bytes());
        assert_eq!(out.unmatched, vec!["DefaultRate".to_string()]);
    }

    #[test]
    fn test_unterminated_last_line_stays_unterminated() {
        let req = request(&[("DefaultRate", SettingValue::Integer(50))]);
        let out = patch_text(b"LogLevel 3\nDefaultRate 0", &req);
        assert_eq!(out.content, b"LogLevel 3\nDefaultRate   50");
    }

    #[test]
    fn test_crlf_terminator_is_preserved() {
        let req = request(&[("DefaultPitch", SettingValue::Integer(-20))]);
        let out = patch_text(b"DefaultPitch 0\r\nLogLevel 3\r\n", &req);
        assert_eq!(out.content, b"DefaultPitch   -20\r\nLogLevel 3\r\n");
    }

    #[test]
    fn test_boolean_values_use_numeric_codes() {
        let req = request(&[
            ("DebugAll", SettingValue::Boolean(true)),
            ("CacheEnable", SettingValue::Boolean(false)),
        ]);

        let out = patch_text(b"DebugAll 0\nCacheEnable 1\n", &req);

        assert_eq!(out.content, b"DebugAll   1\nCacheEnable   2\n");
    }

    #[test]
    fn test_first_requested_setting_wins_on_shared_line() {
        // Arrange: both requested names appear on the same line.
        let req = request(&[
            ("A", SettingValue::from("x")),
            ("B", SettingValue::from("y")),
        ]);

        // Act
        let out = patch_text(b"A B\n", &req);

        // Assert
        assert_eq!(out.content, b"A   x\n");
        assert_eq!(out.rewritten.len(), 1);
    }

    #[test]
    fn test_every_qualifying_line_is_rewritten() {
        let req = request(&[("DefaultRate", SettingValue::Integer(10))]);
        let out = patch_text(b"DefaultRate 0\n# DefaultRate 5\n", &req);
        assert_eq!(out.content, b"DefaultRate   10\nDefaultRate   10\n");
        assert_eq!(out.rewritten.len(), 2);
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        let req = request(&[("DefaultRate", SettingValue::Integer(10))]);
        let out = patch_text(b"", &req);
        assert_eq!(out.content, b"");
        assert_eq!(out.unmatched, vec!["DefaultRate".to_string()]);
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        let path = Path::new("/etc/opentts/openttsd.conf");
        assert_eq!(
            backup_path(path),
            PathBuf::from("/etc/opentts/openttsd.conf.bak")
        );
    }

    #[test]
    fn test_patch_missing_file_returns_read_error() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.conf");
        let req = request(&[("DefaultRate", SettingValue::Integer(10))]);

        // Act
        let result = ConfigPatcher::new().patch(&path, &req);

        // Assert: no backup is produced for a file that could not be read
        assert!(matches!(result, Err(PatchError::Read { .. })));
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn test_patch_writes_file_and_backup() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openttsd.conf");
        let original = "# DefaultRate sets speed\nDefaultRate 0\n";
        std::fs::write(&path, original).unwrap();
        let req = request(&[("DefaultRate", SettingValue::Integer(30))]);

        // Act
        ConfigPatcher::new().patch(&path, &req).unwrap();

        // Assert
        let patched = std::fs::read_to_string(&path).unwrap();
        assert_eq!(patched, "# DefaultRate sets speed\nDefaultRate   30\n");
        let backup = std::fs::read_to_string(backup_path(&path)).unwrap();
        assert_eq!(backup, original);
    }

    #[test]
    fn test_patch_leaves_no_temporary_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openttsd.conf");
        std::fs::write(&path, "DefaultRate 0\n").unwrap();
        let req = request(&[("DefaultRate", SettingValue::Integer(30))]);

        ConfigPatcher::new().patch(&path, &req).unwrap();

        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["openttsd.conf", "openttsd.conf.bak"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_patch_preserves_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openttsd.conf");
        std::fs::write(&path, "DefaultRate 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();
        let req = request(&[("DefaultRate", SettingValue::Integer(30))]);

        ConfigPatcher::new().patch(&path, &req).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_single_word_holding_the_name_is_rewritten() {
        // Arrange
        let req = request(&[("DefaultRate", SettingValue::Integer(50))]);

        // Act
        let out = patch_text(b"#DefaultRate\nDefaultRateX 5\n", &req);

        // Assert: the word with a value after it has two unknown words
        assert_eq!(out.content, b"DefaultRate   50\nDefaultRateX 5\n");
    }

    #[test]
    fn test_patch_keeps_non_utf8_comment_bytes() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openttsd.conf");
        let original: &[u8] = b"# Auteur: Fr\xe9d\xe9ric\nDefaultRate 0\n";
        std::fs::write(&path, original).unwrap();
        let req = request(&[("DefaultRate", SettingValue::Integer(50))]);

        // Act
        ConfigPatcher::new().patch(&path, &req).unwrap();

        // Assert
        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"# Auteur: Fr\xe9d\xe9ric\nDefaultRate   50\n"
        );
        assert_eq!(std::fs::read(backup_path(&path)).unwrap(), original);
    }

    #[cfg(unix)]
    #[test]
    fn test_backup_keeps_original_permissions() {
        use std::os::unix::fs::PermissionsExt;

        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openttsd.conf");
        std::fs::write(&path, "DefaultRate 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();
        let req = request(&[("DefaultRate", SettingValue::Integer(30))]);

        // Act
        ConfigPatcher::new().patch(&path, &req).unwrap();

        // Assert
        let mode = std::fs::metadata(backup_path(&path))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
