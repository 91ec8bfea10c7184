//! Application layer use cases.
//!
//! Use cases here orchestrate the domain types from `rotator_core` and talk to
//! the outside world only through the traits they declare:
//!
//! - **`rotate`** – picks an image from the catalog and hands it to a
//!   [`rotate::WallpaperSetter`], either once or in a sleep loop that ends on
//!   a shutdown signal.
//!
//! - **`register_task`** – makes sure the recurring scheduled task exists,
//!   going through a [`register_task::TaskRunner`].  Registration is
//!   idempotent: an existing task is never touched.
//!
//! Apart from the catalog's directory listing, no OS calls, no process
//! spawning and no file parsing happen in this layer; the infrastructure
//! layer provides the trait implementations.

pub mod register_task;
pub mod rotate;
