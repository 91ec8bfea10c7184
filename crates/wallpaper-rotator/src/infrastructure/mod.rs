//! Infrastructure layer.
//!
//! Contains OS-facing adapters: config file storage, the desktop wallpaper
//! API, and the Windows Task Scheduler command-line tool.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `rotator_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.

pub mod scheduler;
pub mod storage;
pub mod wallpaper;
