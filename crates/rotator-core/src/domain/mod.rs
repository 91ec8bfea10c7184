//! Domain entities for the wallpaper rotator.
//!
//! Nothing in here touches the desktop, the task scheduler or the config
//! file.  The only I/O is the directory listing done by
//! [`catalog::ImageCatalog::scan`], which is the catalog's definition.

/// Settings values and their defaults.
pub mod settings;

/// Candidate image enumeration and random selection.
pub mod catalog;
