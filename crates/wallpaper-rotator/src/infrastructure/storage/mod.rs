//! Storage infrastructure: configuration file loading.
//!
//! The `config` sub-module handles:
//!
//! - Locating the config file next to the running executable (or at the path
//!   named by `WALLPAPER_ROTATOR_CONFIG`).
//! - Parsing the TOML sections into `rotator_core` settings values.
//! - The two loading policies: *strict* for the scheduled entry point and
//!   *lenient* (fall back to built-in defaults) for the continuous one.

pub mod config;
