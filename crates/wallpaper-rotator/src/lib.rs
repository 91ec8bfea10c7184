//! wallpaper-rotator library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and both binaries in `src/bin/` share the same module tree.

pub mod application;
pub mod infrastructure;
pub mod output;
