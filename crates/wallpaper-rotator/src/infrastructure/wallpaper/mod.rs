//! Desktop wallpaper adapters.
//!
//! Implements [`WallpaperSetter`] for the compile target:
//!
//! | Module    | OS          | API used                                       |
//! |-----------|-------------|------------------------------------------------|
//! | `windows` | Windows     | `SystemParametersInfoW(SPI_SETDESKWALLPAPER)`  |
//! | –         | anything else | none; always `WallpaperError::UnsupportedPlatform` |
//!
//! The chosen implementation is re-exported as `NativeWallpaperSetter` so the
//! binaries never name the OS.  [`mock::MockWallpaperSetter`] is always
//! compiled so tests on any platform can use it.

use std::path::Path;

use crate::application::rotate::{WallpaperError, WallpaperSetter};

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the Win32 setter as `NativeWallpaperSetter` on Windows.
#[cfg(target_os = "windows")]
pub use self::windows::WindowsWallpaperSetter as NativeWallpaperSetter;

/// Re-export the fallback as `NativeWallpaperSetter` elsewhere.
#[cfg(not(target_os = "windows"))]
pub use self::UnsupportedWallpaperSetter as NativeWallpaperSetter;

/// Setter for targets without a supported wallpaper facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedWallpaperSetter;

impl UnsupportedWallpaperSetter {
    pub fn new() -> Self {
        Self
    }
}

impl WallpaperSetter for UnsupportedWallpaperSetter {
    fn set_wallpaper(&self, _image: &Path) -> Result<(), WallpaperError> {
        Err(WallpaperError::UnsupportedPlatform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_setter_always_fails() {
        let setter = UnsupportedWallpaperSetter::new();
        let result = setter.set_wallpaper(Path::new("/pics/a.jpg"));
        assert!(matches!(result, Err(WallpaperError::UnsupportedPlatform)));
    }
}
