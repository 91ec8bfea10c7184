//! RegisterTaskUseCase: make sure the recurring wallpaper task exists.
//!
//! The OS task scheduler owns the task record; this program only ever moves it
//! from *absent* to *present*:
//!
//! ```text
//! absent ──create_recurring──► present
//! ```
//!
//! If the task already exists nothing is changed, not even when the
//! configured interval differs from the registered one.  Deleting is part of
//! the [`TaskRunner`] interface but no entry point calls it.

use std::num::NonZeroU32;
use std::path::PathBuf;

use rotator_core::ScheduleSettings;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for task scheduler operations.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The scheduler command could not be started at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The scheduler command ran but reported failure.
    #[error("{command} failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Whether a task with a given name is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPresence {
    Present,
    Absent,
}

/// Command line the scheduled task runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCommand {
    /// Optional launcher executable placed before `program`.
    pub invoker: Option<PathBuf>,
    /// The one-shot entry point.
    pub program: PathBuf,
}

impl TaskCommand {
    /// Renders the command with every path double-quoted, e.g.
    /// `"C:\Tools\launcher.exe" "C:\Apps\wallpaper-schedule.exe"`.
    pub fn command_line(&self) -> String {
        let program = format!("\"{}\"", self.program.display());
        match &self.invoker {
            Some(invoker) => format!("\"{}\" {program}", invoker.display()),
            None => program,
        }
    }
}

/// A task that runs [`TaskCommand`] every `interval_minutes` minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringTask {
    pub name: String,
    pub interval_minutes: NonZeroU32,
    pub command: TaskCommand,
}

impl RecurringTask {
    /// Builds the task description for the scheduled entry point located at
    /// `program`.
    pub fn from_settings(settings: &ScheduleSettings, program: PathBuf) -> Self {
        Self {
            name: settings.task_name.clone(),
            interval_minutes: settings.rotation.interval_minutes,
            command: TaskCommand {
                invoker: settings.invoker_path.clone(),
                program,
            },
        }
    }
}

/// The OS task runner, seen as an external collaborator.
pub trait TaskRunner {
    /// Looks up a task by name.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError`] if the scheduler cannot be queried.
    fn query(&self, name: &str) -> Result<TaskPresence, SchedulerError>;

    /// Registers `task`, overwriting any registration with the same name and
    /// running with the highest available privileges.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError`] if the scheduler rejects the task.
    fn create_recurring(&self, task: &RecurringTask) -> Result<(), SchedulerError>;

    /// Removes a task by name.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError`] if the scheduler rejects the request.
    fn delete(&self, name: &str) -> Result<(), SchedulerError>;
}

/// What [`ensure_registered`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A task with the same name was found; nothing was changed.
    AlreadyPresent,
    /// The task was absent and has been created.
    Created,
}

/// Creates `task` unless a task with the same name is already registered.
///
/// # Errors
///
/// Propagates [`SchedulerError`] from the query or the create call.
pub fn ensure_registered<T>(runner: &T, task: &RecurringTask) -> Result<Registration, SchedulerError>
where
    T: TaskRunner + ?Sized,
{
    if runner.query(&task.name)? == TaskPresence::Present {
        debug!("task '{}' already registered", task.name);
        return Ok(Registration::AlreadyPresent);
    }

    runner.create_recurring(task)?;
    info!(
        "registered task '{}' every {} minute(s): {}",
        task.name,
        task.interval_minutes,
        task.command.command_line()
    );
    Ok(Registration::Created)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
