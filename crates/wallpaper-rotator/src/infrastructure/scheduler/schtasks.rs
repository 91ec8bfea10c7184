//! Windows Task Scheduler access through `schtasks.exe`.
//!
//! | Operation          | Command line                                                        |
//! |--------------------|---------------------------------------------------------------------|
//! | `query`            | `schtasks /Query /TN <name>`                                        |
//! | `create_recurring` | `schtasks /Create /SC MINUTE /MO <n> /TN <name> /TR <cmd> /F /RL HIGHEST` |
//! | `delete`           | `schtasks /Delete /TN <name> /F`                                    |
//!
//! `/F` overwrites an existing task of the same name; `/RL HIGHEST` runs the
//! task with the highest privileges available to the account.
//!
//! A query is treated as *absent* when `schtasks` exits non-zero or prints
//! `ERROR:` on either stream (the "cannot find the file specified" case goes
//! to stderr).  Everything else counts as *present*.

use std::ffi::OsStr;
use std::process::{Command, Output};

use tracing::debug;

use crate::application::register_task::{
    RecurringTask, SchedulerError, TaskPresence, TaskRunner,
};

/// Default scheduler executable, resolved through `PATH`.
pub const SCHTASKS: &str = "schtasks";

/// Marker `schtasks` prints when a lookup or command fails.
const ERROR_MARKER: &str = "ERROR:";

/// Arguments for `schtasks /Query`.
pub fn query_args(name: &str) -> Vec<String> {
    vec!["/Query".into(), "/TN".into(), name.into()]
}

/// Arguments for `schtasks /Create`.
pub fn create_args(task: &RecurringTask) -> Vec<String> {
    vec![
        "/Create".into(),
        "/SC".into(),
        "MINUTE".into(),
        "/MO".into(),
        task.interval_minutes.to_string(),
        "/TN".into(),
        task.name.clone(),
        "/TR".into(),
        task.command.command_line(),
        "/F".into(),
        "/RL".into(),
        "HIGHEST".into(),
    ]
}

/// Arguments for `schtasks /Delete`.
pub fn delete_args(name: &str) -> Vec<String> {
    vec!["/Delete".into(), "/TN".into(), name.into(), "/F".into()]
}

/// Interprets the result of `schtasks /Query`.
pub fn presence_from_query(success: bool, stdout: &str, stderr: &str) -> TaskPresence {
    if !success || stdout.contains(ERROR_MARKER) || stderr.contains(ERROR_MARKER) {
        TaskPresence::Absent
    } else {
        TaskPresence::Present
    }
}

/// [`TaskRunner`] backed by the `schtasks` command-line tool.
#[derive(Debug, Clone)]
pub struct SchtasksRunner {
    program: String,
}

impl SchtasksRunner {
    /// Uses `schtasks` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(SCHTASKS)
    }

    /// Uses a specific scheduler executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run<I, S>(&self, args: I) -> Result<Output, SchedulerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| SchedulerError::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    /// Runs a command whose non-zero exit is a failure.
    fn run_checked(&self, args: Vec<String>) -> Result<(), SchedulerError> {
        let command = format!("{} {}", self.program, args.first().map_or("", String::as_str));
        let output = self.run(&args)?;
        debug!("{command} exited with {}", output.status);

        if output.status.success() {
            Ok(())
        } else {
            Err(SchedulerError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for SchtasksRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRunner for SchtasksRunner {
    fn query(&self, name: &str) -> Result<TaskPresence, SchedulerError> {
        let output = self.run(query_args(name))?;
        let presence = presence_from_query(
            output.status.success(),
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
        );
        debug!("task '{name}' is {presence:?}");
        Ok(presence)
    }

    fn create_recurring(&self, task: &RecurringTask) -> Result<(), SchedulerError> {
        self.run_checked(create_args(task))
    }

    fn delete(&self, name: &str) -> Result<(), SchedulerError> {
        self.run_checked(delete_args(name))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
