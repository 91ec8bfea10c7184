//! Image catalog: the candidate wallpapers for one rotation cycle.
//!
//! A catalog is the flat list of absolute paths directly inside the image
//! folder whose file name ends with `.` followed by one of the configured
//! extensions.  Matching is case-sensitive: with extensions `jpg,png` the file
//! `b.PNG` is not a candidate.
//!
//! # Ordering and duplicates
//!
//! Extensions are processed in configured order and, within one extension,
//! files are listed in file-name order.  The lists are concatenated without
//! deduplication, so overlapping entries (e.g. `jpg,jpg`) make a file appear
//! twice and double its weight in [`ImageCatalog::choose`].
//!
//! # Lifetime
//!
//! The one-shot entry point scans a fresh catalog on every run.  The
//! continuous entry point scans once at startup and keeps that catalog for the
//! life of the process.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, warn};

/// Returns `true` if `file_name` ends with `.` + the trimmed `extension`.
///
/// An extension that is empty after trimming never matches.
pub fn matches_extension(file_name: &str, extension: &str) -> bool {
    let ext = extension.trim();
    if ext.is_empty() {
        return false;
    }
    file_name
        .strip_suffix(ext)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// The set of candidate wallpaper files for a rotation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCatalog {
    images: Vec<PathBuf>,
}

impl ImageCatalog {
    /// Lists `folder` (no recursion) and collects every regular file whose
    /// name matches one of `extensions`.
    ///
    /// Names starting with `.` are skipped.  A folder that does not exist or
    /// cannot be read produces an empty catalog; the caller reports that as
    /// "no images found".
    pub fn scan(folder: &Path, extensions: &[String]) -> Self {
        let folder = std::path::absolute(folder).unwrap_or_else(|_| folder.to_path_buf());

        let entries = match std::fs::read_dir(&folder) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cannot list image folder {}: {e}", folder.display());
                return Self::default();
            }
        };

        let mut files: Vec<(String, PathBuf)> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().into_owned();
                (!name.starts_with('.') && path.is_file()).then_some((name, path))
            })
            .collect();
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut images = Vec::new();
        for ext in extensions {
            images.extend(
                files
                    .iter()
                    .filter(|(name, _)| matches_extension(name, ext))
                    .map(|(_, path)| path.clone()),
            );
        }

        debug!("found {} image(s) in {}", images.len(), folder.display());
        Self { images }
    }

    /// Builds a catalog from an explicit list of paths.
    pub fn from_paths(images: Vec<PathBuf>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.images.iter().any(|p| p == path)
    }

    /// Picks one image uniformly at random using `rng`.
    ///
    /// Returns `None` for an empty catalog.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Path> {
        if self.images.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.images.len());
        Some(self.images[index].as_path())
    }

    /// Picks one image uniformly at random using the thread-local RNG.
    pub fn pick(&self) -> Option<&Path> {
        self.choose(&mut rand::rng())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
