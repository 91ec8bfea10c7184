//! Rotation use cases: pick an image from the catalog and apply it.
//!
//! Two drivers share the same select-and-apply step ([`apply_random`]):
//!
//! - [`rotate_once`] scans a fresh [`ImageCatalog`] and applies one image.
//!   The scheduled entry point calls it once per process; the OS task
//!   scheduler provides the repetition.
//! - [`run_continuous`] reuses a catalog scanned once at startup, applying an
//!   image and then sleeping for the interval, until the shutdown future
//!   resolves.
//!
//! # Failure model
//!
//! An empty catalog is not an error: it yields [`RotationOutcome::NoImages`]
//! and no wallpaper call is made.  A failing wallpaper call is an error
//! ([`WallpaperError`]) and is never retried.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rotator_core::{ImageCatalog, RotationSettings};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for wallpaper apply operations.
#[derive(Debug, Error)]
pub enum WallpaperError {
    /// The path cannot be handed to the OS (e.g. contains an interior NUL).
    #[error("image path cannot be passed to the OS: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The OS call returned failure.
    #[error("OS refused to set wallpaper {}: {reason}", path.display())]
    Rejected { path: PathBuf, reason: String },

    /// No wallpaper facility exists for the compile target.
    #[error("setting the desktop wallpaper is not supported on this platform")]
    UnsupportedPlatform,
}

/// Applies an image as the desktop background.
///
/// Implementations must persist the change to the user profile and broadcast
/// it so the new wallpaper shows immediately and survives a new login.
pub trait WallpaperSetter: Send + Sync {
    /// Sets `image` (an absolute path) as the desktop wallpaper.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError`] if the OS call fails.
    fn set_wallpaper(&self, image: &Path) -> Result<(), WallpaperError>;
}

/// Result of one select-and-apply cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    /// The image at this path is now the wallpaper.
    Applied(PathBuf),
    /// The catalog was empty; nothing was applied.
    NoImages,
}

impl RotationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// File name of the applied image, for status lines.
    pub fn file_name(&self) -> Option<String> {
        match self {
            Self::Applied(path) => Some(display_name(path)),
            Self::NoImages => None,
        }
    }
}

/// Why [`run_continuous`] returned without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The shutdown future resolved during a sleep.
    Shutdown,
    /// The catalog was empty, so there was nothing to rotate.
    NoImages,
}

/// Base name of `path` for user-facing messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Picks one image from `catalog` and applies it through `setter`.
///
/// # Errors
///
/// Propagates the [`WallpaperError`] from `setter`.
pub fn apply_random<S>(catalog: &ImageCatalog, setter: &S) -> Result<RotationOutcome, WallpaperError>
where
    S: WallpaperSetter + ?Sized,
{
    let Some(image) = catalog.pick() else {
        debug!("catalog is empty; skipping wallpaper call");
        return Ok(RotationOutcome::NoImages);
    };

    setter.set_wallpaper(image)?;
    info!("wallpaper set to {}", image.display());
    Ok(RotationOutcome::Applied(image.to_path_buf()))
}

/// Performs exactly one select-and-apply cycle on a freshly scanned catalog.
///
/// # Errors
///
/// Propagates the [`WallpaperError`] from `setter`.
pub fn rotate_once<S>(settings: &RotationSettings, setter: &S) -> Result<RotationOutcome, WallpaperError>
where
    S: WallpaperSetter + ?Sized,
{
    let catalog = ImageCatalog::scan(&settings.image_folder, &settings.extensions);
    apply_random(&catalog, setter)
}

/// Applies a random image from `catalog`, then sleeps for `interval`, forever.
///
/// `on_applied` is called with the applied path after every successful cycle.
/// The sleep is the only suspension point; it races `shutdown`, and when
/// `shutdown` resolves the loop returns [`LoopExit::Shutdown`].  The wallpaper
/// in effect at that moment stays set.
///
/// `shutdown` is polled once before the first apply, so a signal listener
/// such as `tokio::signal::ctrl_c()` is installed before any OS call and an
/// interrupt arriving during the first apply ends the loop cleanly.
///
/// # Errors
///
/// Returns the first [`WallpaperError`]; the loop does not recover from it.
pub async fn run_continuous<S, F, R>(
    catalog: &ImageCatalog,
    setter: &S,
    interval: Duration,
    shutdown: F,
    mut on_applied: R,
) -> Result<LoopExit, WallpaperError>
where
    S: WallpaperSetter + ?Sized,
    F: Future<Output = ()>,
    R: FnMut(&Path),
{
    tokio::pin!(shutdown);

    tokio::select! {
        biased;
        () = &mut shutdown => {
            info!("shutdown requested before first rotation");
            return Ok(LoopExit::Shutdown);
        }
        () = std::future::ready(()) => {}
    }

    loop {
        match apply_random(catalog, setter)? {
            RotationOutcome::Applied(path) => on_applied(&path),
            RotationOutcome::NoImages => return Ok(LoopExit::NoImages),
        }

        tokio::select! {
            () = tokio::time::sleep(interval) => {}
            () = &mut shutdown => {
                info!("shutdown requested; stopping rotation");
                return Ok(LoopExit::Shutdown);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::wallpaper::mock::MockWallpaperSetter;
    use std::num::NonZeroU32;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::task::Poll;

    fn three_image_catalog() -> ImageCatalog {
        ImageCatalog::from_paths(vec![
            PathBuf::from("/pics/a.jpg"),
            PathBuf::from("/pics/b.jpg"),
            PathBuf::from("/pics/c.png"),
        ])
    }

    // ── apply_random ──────────────────────────────────────────────────────────

    #[test]
    fn test_apply_random_applies_exactly_one_catalog_member() {
        // Arrange
        let catalog = three_image_catalog();
        let setter = MockWallpaperSetter::new();

        // Act
        let outcome = apply_random(&catalog, &setter).expect("apply");

        // Assert
        let applied = setter.applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert!(catalog.contains(&applied[0]));
        assert_eq!(outcome, RotationOutcome::Applied(applied[0].clone()));
    }

    #[test]
    fn test_apply_random_on_empty_catalog_makes_no_call() {
        let setter = MockWallpaperSetter::new();

        let outcome = apply_random(&ImageCatalog::default(), &setter).expect("apply");

        assert_eq!(outcome, RotationOutcome::NoImages);
        assert!(!outcome.is_applied());
        assert!(setter.applied.lock().unwrap().is_empty());
    }

    #[test]
    fn test_apply_random_propagates_setter_failure() {
        // Arrange
        let setter = MockWallpaperSetter {
            should_fail: true,
            ..Default::default()
        };

        // Act
        let result = apply_random(&three_image_catalog(), &setter);

        // Assert
        assert!(matches!(result, Err(WallpaperError::Rejected { .. })));
    }

    // ── rotate_once ───────────────────────────────────────────────────────────

    #[test]
    fn test_rotate_once_scans_folder_and_applies_match() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("b.PNG"), b"").unwrap();
        let mut settings = RotationSettings::with_defaults(dir.path());
        settings.extensions = rotator_core::parse_extension_list("jpg,png");
        let setter = MockWallpaperSetter::new();

        // Act
        let outcome = rotate_once(&settings, &setter).expect("rotate");

        // Assert
        assert_eq!(outcome.file_name().as_deref(), Some("a.jpg"));
        assert_eq!(setter.applied.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_rotate_once_with_no_matches_reports_no_images() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        let settings = RotationSettings::with_defaults(dir.path());
        let setter = MockWallpaperSetter::new();

        let outcome = rotate_once(&settings, &setter).expect("rotate");

        assert_eq!(outcome, RotationOutcome::NoImages);
        assert!(setter.applied.lock().unwrap().is_empty());
    }

    #[test]
    fn test_outcome_file_name_is_base_name() {
        let outcome = RotationOutcome::Applied(PathBuf::from("/pics/nested/sunset.jpg"));
        assert_eq!(outcome.file_name().as_deref(), Some("sunset.jpg"));
        assert_eq!(RotationOutcome::NoImages.file_name(), None);
    }

    // ── run_continuous ────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_run_continuous_spaces_applies_by_interval() {
        // Arrange
        let setter = Arc::new(MockWallpaperSetter::new());
        let stamps: Arc<Mutex<Vec<tokio::time::Instant>>> = Arc::default();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let interval = rotator_core::interval_from_minutes(NonZeroU32::new(2).unwrap());

        let handle = tokio::spawn({
            let setter = Arc::clone(&setter);
            let stamps = Arc::clone(&stamps);
            async move {
                let catalog = three_image_catalog();
                run_continuous(
                    &catalog,
                    setter.as_ref(),
                    interval,
                    async move {
                        let _ = stop_rx.await;
                    },
                    |_| stamps.lock().unwrap().push(tokio::time::Instant::now()),
                )
                .await
            }
        });

        // Act – let three cycles happen (t = 0, 120, 240), then stop.
        tokio::time::sleep(Duration::from_secs(250)).await;
        stop_tx.send(()).unwrap();
        let exit = handle.await.unwrap().expect("loop must not fail");

        // Assert
        assert_eq!(exit, LoopExit::Shutdown);
        let stamps = stamps.lock().unwrap();
        assert_eq!(stamps.len(), 3);
        for pair in stamps.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::from_secs(120));
        }
        assert_eq!(setter.applied.lock().unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_continuous_with_pending_shutdown_applies_nothing() {
        let setter = MockWallpaperSetter::new();
        let catalog = three_image_catalog();

        let exit = run_continuous(
            &catalog,
            &setter,
            Duration::from_secs(60),
            std::future::ready(()),
            |_| {},
        )
        .await
        .expect("loop");

        assert_eq!(exit, LoopExit::Shutdown);
        assert!(setter.applied.lock().unwrap().is_empty());
    }

    /// Raises an interrupt from inside the first wallpaper call, but only if
    /// the shutdown listener was already installed at that moment.
    struct InterruptingSetter {
        listening: Arc<AtomicBool>,
        interrupted: Arc<AtomicBool>,
        listening_at_apply: Mutex<Vec<bool>>,
        inner: MockWallpaperSetter,
    }

    impl WallpaperSetter for InterruptingSetter {
        fn set_wallpaper(&self, image: &Path) -> Result<(), WallpaperError> {
            let listening = self.listening.load(Ordering::SeqCst);
            self.listening_at_apply.lock().unwrap().push(listening);
            if listening {
                self.interrupted.store(true, Ordering::SeqCst);
            }
            self.inner.set_wallpaper(image)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_during_first_apply_stops_loop_cleanly() {
        // Arrange
        let listening = Arc::new(AtomicBool::new(false));
        let interrupted = Arc::new(AtomicBool::new(false));
        let setter = InterruptingSetter {
            listening: Arc::clone(&listening),
            interrupted: Arc::clone(&interrupted),
            listening_at_apply: Mutex::new(Vec::new()),
            inner: MockWallpaperSetter::new(),
        };
        // Installs its listener on first poll, like `tokio::signal::ctrl_c()`.
        let shutdown = std::future::poll_fn(move |_| {
            listening.store(true, Ordering::SeqCst);
            if interrupted.load(Ordering::SeqCst) {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        });

        // Act
        let exit = run_continuous(
            &three_image_catalog(),
            &setter,
            Duration::from_secs(60),
            shutdown,
            |_| {},
        )
        .await
        .expect("loop");

        // Assert
        assert_eq!(exit, LoopExit::Shutdown);
        assert_eq!(*setter.listening_at_apply.lock().unwrap(), vec![true]);
        assert_eq!(setter.inner.apply_count(), 1);
    }

    #[tokio::test]
    async fn test_run_continuous_ends_with_error_when_setter_fails() {
        // Arrange
        let setter = MockWallpaperSetter {
            should_fail: true,
            ..Default::default()
        };
        let mut reported = 0;

        // Act
        let result = run_continuous(
            &three_image_catalog(),
            &setter,
            Duration::from_secs(60),
            std::future::pending(),
            |_| reported += 1,
        )
        .await;

        // Assert
        assert!(result.is_err());
        assert_eq!(reported, 0);
    }

    #[tokio::test]
    async fn test_run_continuous_with_empty_catalog_returns_no_images() {
        let setter = MockWallpaperSetter::new();

        let exit = run_continuous(
            &ImageCatalog::default(),
            &setter,
            Duration::from_secs(60),
            std::future::pending(),
            |_| {},
        )
        .await
        .expect("loop");

        assert_eq!(exit, LoopExit::NoImages);
        assert!(setter.applied.lock().unwrap().is_empty());
    }
}
