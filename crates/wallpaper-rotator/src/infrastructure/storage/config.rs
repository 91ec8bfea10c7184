//! TOML configuration loading for both entry points.
//!
//! Config files live next to the executable unless the
//! `WALLPAPER_ROTATOR_CONFIG` environment variable names another path:
//!
//! - `config.toml` – read by `wallpaper-schedule` (strict).
//! - `desktop_wallpaper.toml` – read by `wallpaper-rotate` (lenient).
//!
//! Example with every recognised key:
//!
//! ```toml
//! [Paths]
//! image_folder = 'C:\Users\me\Pictures\Wallpapers'
//! invoker_exe = 'C:\Tools\launcher.exe'   # wallpaper-schedule only
//!
//! [Timing]
//! interval_minutes = 30
//!
//! [TaskScheduler]
//! task_name = "WallpaperChanger"           # wallpaper-schedule only
//!
//! [ImageFormats]
//! extensions = "jpg,jpeg,png,bmp"
//! ```
//!
//! Use single-quoted (literal) TOML strings for Windows paths so backslashes
//! are not treated as escapes.
//!
//! # Loading policies
//!
//! - [`load_schedule_settings`] is strict: a missing file, a missing
//!   `Paths.image_folder` or any unparsable value is a [`ConfigError`], and
//!   the binary exits with code 1.
//! - [`load_rotation_settings`] is lenient: a missing or broken file yields the
//!   built-in defaults; the returned [`ConfigSource`] says which case applied
//!   so the binary can print the matching notice.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use rotator_core::{
    parse_extension_list, RotationSettings, ScheduleSettings, DEFAULT_EXTENSIONS,
    DEFAULT_INTERVAL_MINUTES, DEFAULT_TASK_NAME,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Config file read by the scheduled entry point.
pub const SCHEDULE_CONFIG_FILE: &str = "config.toml";

/// Config file read by the continuous entry point.
pub const ROTATE_CONFIG_FILE: &str = "desktop_wallpaper.toml";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "WALLPAPER_ROTATOR_CONFIG";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The directory of the running executable could not be determined.
    #[error("could not determine the program directory: {0}")]
    NoProgramDir(#[source] std::io::Error),

    /// No file exists at the config path.
    #[error("config file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// A file system I/O error other than "not found" occurred.
    #[error("I/O error accessing config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid TOML, lacks a required key, or holds a
    /// value of the wrong type.
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ── File schema types ─────────────────────────────────────────────────────────

/// `config.toml` as read by the scheduled entry point.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScheduleConfigFile {
    #[serde(rename = "Paths")]
    pub paths: SchedulePaths,
    #[serde(rename = "Timing", default)]
    pub timing: TimingSection,
    #[serde(rename = "TaskScheduler", default)]
    pub task_scheduler: TaskSchedulerSection,
    #[serde(rename = "ImageFormats", default)]
    pub image_formats: ImageFormatsSection,
}

/// `[Paths]` for the scheduled entry point; `image_folder` is required.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SchedulePaths {
    pub image_folder: PathBuf,
    /// Also accepted as `python_exe`, the key older config files use.
    #[serde(default, alias = "python_exe")]
    pub invoker_exe: Option<PathBuf>,
}

/// `desktop_wallpaper.toml` as read by the continuous entry point.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RotateConfigFile {
    #[serde(rename = "Paths", default)]
    pub paths: RotatePaths,
    #[serde(rename = "Timing", default)]
    pub timing: TimingSection,
    #[serde(rename = "ImageFormats", default)]
    pub image_formats: ImageFormatsSection,
}

/// `[Paths]` for the continuous entry point; every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RotatePaths {
    #[serde(default)]
    pub image_folder: Option<PathBuf>,
}

/// `[Timing]`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimingSection {
    /// Minutes between wallpaper changes.  Zero is rejected at parse time.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: NonZeroU32,
}

/// `[TaskScheduler]`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaskSchedulerSection {
    #[serde(default = "default_task_name")]
    pub task_name: String,
}

/// `[ImageFormats]`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ImageFormatsSection {
    /// Comma-separated suffixes without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_interval_minutes() -> NonZeroU32 {
    DEFAULT_INTERVAL_MINUTES
}
fn default_task_name() -> String {
    DEFAULT_TASK_NAME.to_string()
}
fn default_extensions() -> String {
    DEFAULT_EXTENSIONS.to_string()
}

impl Default for TimingSection {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
        }
    }
}

impl Default for TaskSchedulerSection {
    fn default() -> Self {
        Self {
            task_name: default_task_name(),
        }
    }
}

impl Default for ImageFormatsSection {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl ScheduleConfigFile {
    pub fn into_settings(self) -> ScheduleSettings {
        ScheduleSettings {
            rotation: RotationSettings {
                image_folder: self.paths.image_folder,
                interval_minutes: self.timing.interval_minutes,
                extensions: parse_extension_list(&self.image_formats.extensions),
            },
            task_name: self.task_scheduler.task_name,
            invoker_path: self.paths.invoker_exe,
        }
    }
}

impl RotateConfigFile {
    /// Converts to settings; an absent `image_folder` becomes `program_dir`.
    pub fn into_settings(self, program_dir: &Path) -> RotationSettings {
        RotationSettings {
            image_folder: self
                .paths
                .image_folder
                .unwrap_or_else(|| program_dir.to_path_buf()),
            interval_minutes: self.timing.interval_minutes,
            extensions: parse_extension_list(&self.image_formats.extensions),
        }
    }
}

// ── Locating the config file ──────────────────────────────────────────────────

/// Directory containing the running executable.
///
/// # Errors
///
/// Returns [`ConfigError::NoProgramDir`] if the executable path is unknown.
pub fn program_dir() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::NoProgramDir)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ConfigError::NoProgramDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

/// Resolves the config path: `WALLPAPER_ROTATOR_CONFIG` if set and non-empty,
/// otherwise `file_name` inside [`program_dir`].
///
/// # Errors
///
/// Returns [`ConfigError::NoProgramDir`] when falling back to the program
/// directory fails.
pub fn config_file_path(file_name: &str) -> Result<PathBuf, ConfigError> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(program_dir()?.join(file_name)),
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Strict loading (scheduled entry point) ────────────────────────────────────

/// Parses scheduled-mode settings from TOML text read from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the text is malformed or lacks
/// `Paths.image_folder`.
pub fn parse_schedule_settings(content: &str, path: &Path) -> Result<ScheduleSettings, ConfigError> {
    let file: ScheduleConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into_settings())
}

/// Loads scheduled-mode settings.  No fallback: every problem is an error.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if there is no file at `path`,
/// [`ConfigError::Io`] for other read failures, and [`ConfigError::Parse`] for
/// malformed content.
pub fn load_schedule_settings(path: &Path) -> Result<ScheduleSettings, ConfigError> {
    let content = read_config(path)?;
    let settings = parse_schedule_settings(&content, path)?;
    debug!("loaded schedule settings from {}", path.display());
    Ok(settings)
}

// ── Lenient loading (continuous entry point) ──────────────────────────────────

/// Where lenient settings came from.
#[derive(Debug)]
pub enum ConfigSource {
    /// Parsed from the file at this path.
    File(PathBuf),
    /// No file at this path; built-in defaults were used.
    Missing(PathBuf),
    /// The file could not be read or parsed; built-in defaults were used.
    Invalid(ConfigError),
}

/// Settings produced by [`load_rotation_settings`].
#[derive(Debug)]
pub struct LenientLoad {
    pub settings: RotationSettings,
    pub source: ConfigSource,
}

/// Loads continuous-mode settings, substituting the built-in defaults
/// (images next to the program, 30 minutes, jpg/jpeg/png/bmp) when the file
/// is missing or broken.  Never fails.
pub fn load_rotation_settings(path: &Path, program_dir: &Path) -> LenientLoad {
    let parsed = read_config(path).and_then(|content| {
        toml::from_str::<RotateConfigFile>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    });

    match parsed {
        Ok(file) => LenientLoad {
            settings: file.into_settings(program_dir),
            source: ConfigSource::File(path.to_path_buf()),
        },
        Err(ConfigError::NotFound { path }) => LenientLoad {
            settings: RotationSettings::with_defaults(program_dir),
            source: ConfigSource::Missing(path),
        },
        Err(e) => LenientLoad {
            settings: RotationSettings::with_defaults(program_dir),
            source: ConfigSource::Invalid(e),
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
