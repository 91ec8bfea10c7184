//! Mock wallpaper setter for unit testing.
//!
//! The real setter changes the desktop background of whoever runs the tests.
//! `MockWallpaperSetter` records every requested path in a `Mutex<Vec<_>>`
//! instead, so assertions can check exactly what would have been applied and
//! in which order.
//!
//! Set `should_fail = true` to simulate the OS rejecting the call.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::rotate::{WallpaperError, WallpaperSetter};

/// A setter that records calls without touching the desktop.
#[derive(Debug, Default)]
pub struct MockWallpaperSetter {
    /// Every path passed to `set_wallpaper`, successful calls only.
    pub applied: Mutex<Vec<PathBuf>>,
    /// When `true`, every call returns `WallpaperError::Rejected`.
    pub should_fail: bool,
}

impl MockWallpaperSetter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful calls so far.
    pub fn apply_count(&self) -> usize {
        self.applied.lock().expect("lock poisoned").len()
    }
}

impl WallpaperSetter for MockWallpaperSetter {
    fn set_wallpaper(&self, image: &Path) -> Result<(), WallpaperError> {
        if self.should_fail {
            return Err(WallpaperError::Rejected {
                path: image.to_path_buf(),
                reason: "injected failure".to_string(),
            });
        }
        self.applied
            .lock()
            .expect("lock poisoned")
            .push(image.to_path_buf());
        Ok(())
    }
}
