//! # rotator-core
//!
//! Domain types shared by both wallpaper rotator entry points.
//!
//! This crate has no OS wallpaper calls, no task scheduler access and no
//! configuration file parsing.  It only knows:
//!
//! - **`domain::settings`** – The immutable settings values a run is started
//!   with, their built-in defaults, and the comma-separated extension list
//!   format.
//!
//! - **`domain::catalog`** – The image catalog: the files in the configured
//!   folder whose names end with one of the configured extensions, plus the
//!   uniform random pick over them.

pub mod domain;

pub use domain::catalog::{matches_extension, ImageCatalog};
pub use domain::settings::{
    interval_from_minutes, parse_extension_list, RotationSettings, ScheduleSettings,
    DEFAULT_EXTENSIONS, DEFAULT_INTERVAL_MINUTES, DEFAULT_TASK_NAME,
};
