//! Settings a rotation run is started with.
//!
//! Settings are built once at process entry (by the config loader in the
//! `wallpaper-rotator` crate) and then passed by reference to every component
//! that needs them.  They are never mutated after construction.
//!
//! Two shapes exist:
//!
//! - [`RotationSettings`] – everything needed to pick and apply a wallpaper.
//!   Used on its own by the continuous entry point.
//! - [`ScheduleSettings`] – rotation settings plus the fields only the
//!   scheduled entry point needs to register its recurring task.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Interval used when the config does not set `Timing.interval_minutes`.
pub const DEFAULT_INTERVAL_MINUTES: NonZeroU32 = match NonZeroU32::new(30) {
    Some(minutes) => minutes,
    None => panic!("default interval must be non-zero"),
};

/// Extension list used when the config does not set `ImageFormats.extensions`.
pub const DEFAULT_EXTENSIONS: &str = "jpg,jpeg,png,bmp";

/// Task name used when the config does not set `TaskScheduler.task_name`.
pub const DEFAULT_TASK_NAME: &str = "WallpaperChanger";

/// Splits a comma-separated extension list.
///
/// Entries are kept exactly as written, surrounding whitespace included.
/// Consumers trim each entry at the point where it is matched against a
/// file name (see [`crate::domain::catalog::matches_extension`]).
///
/// ```
/// use rotator_core::parse_extension_list;
///
/// assert_eq!(parse_extension_list("jpg, png"), vec!["jpg", " png"]);
/// ```
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Converts the configured interval into the sleep between two rotations.
pub fn interval_from_minutes(minutes: NonZeroU32) -> Duration {
    Duration::from_secs(u64::from(minutes.get()) * 60)
}

/// Settings for picking and applying a wallpaper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSettings {
    /// Folder scanned (non-recursively) for candidate images.
    pub image_folder: PathBuf,
    /// Minutes between two wallpaper changes.
    pub interval_minutes: NonZeroU32,
    /// Raw extension entries, untrimmed, in configured order.
    pub extensions: Vec<String>,
}

impl RotationSettings {
    /// Built-in defaults: images are looked up next to the program itself.
    pub fn with_defaults(program_dir: &Path) -> Self {
        Self {
            image_folder: program_dir.to_path_buf(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            extensions: parse_extension_list(DEFAULT_EXTENSIONS),
        }
    }

    /// Sleep duration between two rotations.
    pub fn interval(&self) -> Duration {
        interval_from_minutes(self.interval_minutes)
    }

    /// Human-readable extension list, e.g. `"jpg, jpeg, png, bmp"`.
    pub fn formats_display(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| ext.trim())
            .filter(|ext| !ext.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Settings for the scheduled (one-shot) entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSettings {
    pub rotation: RotationSettings,
    /// Name the recurring task is registered under.
    pub task_name: String,
    /// Optional launcher placed in front of the program in the task's
    /// command line.  `None` means the task runs the program directly.
    pub invoker_path: Option<PathBuf>,
}
