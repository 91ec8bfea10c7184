//! Windows wallpaper setter via `SystemParametersInfoW`.
//!
//! Calls `SystemParametersInfoW(SPI_SETDESKWALLPAPER, 0, path,
//! SPIF_UPDATEINIFILE | SPIF_SENDCHANGE)`:
//!
//! - `SPI_SETDESKWALLPAPER` (20) – set the desktop wallpaper.
//! - `SPIF_UPDATEINIFILE` (1) – persist it to the user profile, so it
//!   survives logout.
//! - `SPIF_SENDCHANGE` (2) – broadcast `WM_SETTINGCHANGE`, so the shell
//!   repaints immediately.
//!
//! # Safety
//!
//! This module uses `unsafe` code exclusively for the Win32 FFI call.

#![cfg(target_os = "windows")]

use std::ffi::c_void;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows::Win32::UI::WindowsAndMessaging::{
    SystemParametersInfoW, SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SPI_SETDESKWALLPAPER,
};

use crate::application::rotate::{WallpaperError, WallpaperSetter};

/// Sets the wallpaper for the current user session through user32.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsWallpaperSetter;

impl WindowsWallpaperSetter {
    pub fn new() -> Self {
        Self
    }
}

/// Encodes `path` as a NUL-terminated UTF-16 string.
fn to_wide(path: &Path) -> Result<Vec<u16>, WallpaperError> {
    let mut wide: Vec<u16> = path.as_os_str().encode_wide().collect();
    if wide.contains(&0) {
        return Err(WallpaperError::InvalidPath(path.to_path_buf()));
    }
    wide.push(0);
    Ok(wide)
}

impl WallpaperSetter for WindowsWallpaperSetter {
    fn set_wallpaper(&self, image: &Path) -> Result<(), WallpaperError> {
        let mut wide = to_wide(image)?;

        // SAFETY: `wide` is a NUL-terminated UTF-16 buffer that outlives the
        // call; SPI_SETDESKWALLPAPER only reads from it.
        unsafe {
            SystemParametersInfoW(
                SPI_SETDESKWALLPAPER,
                0,
                Some(wide.as_mut_ptr().cast::<c_void>()),
                SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
            )
        }
        .map_err(|e| WallpaperError::Rejected {
            path: image.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
