//! Task scheduler adapters.
//!
//! - `schtasks` – drives the Windows Task Scheduler through the `schtasks.exe`
//!   command-line tool.
//! - `mock` – an in-memory task registry for tests, always compiled.
//!
//! Both implement [`crate::application::register_task::TaskRunner`].

pub mod mock;
pub mod schtasks;

pub use schtasks::SchtasksRunner;
