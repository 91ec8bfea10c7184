//! In-memory task runner for unit testing.
//!
//! `FakeTaskRunner` behaves like a tiny task scheduler: `create_recurring`
//! stores (or overwrites) a task, `query` reports whether one with that name
//! is stored, `delete` removes it.  Call counters let tests assert how often
//! the registrar touched the scheduler.

use std::sync::Mutex;

use crate::application::register_task::{
    RecurringTask, SchedulerError, TaskPresence, TaskRunner,
};

#[derive(Debug, Default)]
pub struct FakeTaskRunner {
    /// Registered tasks, in creation order.
    pub tasks: Mutex<Vec<RecurringTask>>,
    /// Number of `query` calls.
    pub query_calls: Mutex<u32>,
    /// Number of `create_recurring` calls.
    pub create_calls: Mutex<u32>,
}

impl FakeTaskRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `task` already registered.
    pub fn with_task(task: RecurringTask) -> Self {
        let runner = Self::default();
        runner.tasks.lock().expect("lock poisoned").push(task);
        runner
    }
}

impl TaskRunner for FakeTaskRunner {
    fn query(&self, name: &str) -> Result<TaskPresence, SchedulerError> {
        *self.query_calls.lock().expect("lock poisoned") += 1;
        let tasks = self.tasks.lock().expect("lock poisoned");
        if tasks.iter().any(|t| t.name == name) {
            Ok(TaskPresence::Present)
        } else {
            Ok(TaskPresence::Absent)
        }
    }

    fn create_recurring(&self, task: &RecurringTask) -> Result<(), SchedulerError> {
        *self.create_calls.lock().expect("lock poisoned") += 1;
        let mut tasks = self.tasks.lock().expect("lock poisoned");
        // Mirrors the force-overwrite flag of the real scheduler.
        tasks.retain(|t| t.name != task.name);
        tasks.push(task.clone());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), SchedulerError> {
        self.tasks
            .lock()
            .expect("lock poisoned")
            .retain(|t| t.name != name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register_task::TaskCommand;
    use std::num::NonZeroU32;
    use std::path::PathBuf;

    fn task(name: &str, minutes: u32) -> RecurringTask {
        RecurringTask {
            name: name.to_string(),
            interval_minutes: NonZeroU32::new(minutes).unwrap(),
            command: TaskCommand {
                invoker: None,
                program: PathBuf::from("schedule.exe"),
            },
        }
    }

    #[test]
    fn test_fake_runner_query_reflects_create_and_delete() {
        // Arrange
        let runner = FakeTaskRunner::new();
        assert_eq!(runner.query("A").unwrap(), TaskPresence::Absent);

        // Act / Assert
        runner.create_recurring(&task("A", 5)).unwrap();
        assert_eq!(runner.query("A").unwrap(), TaskPresence::Present);

        runner.delete("A").unwrap();
        assert_eq!(runner.query("A").unwrap(), TaskPresence::Absent);
        assert_eq!(*runner.query_calls.lock().unwrap(), 3);
    }

    #[test]
    fn test_fake_runner_create_overwrites_same_name() {
        let runner = FakeTaskRunner::with_task(task("A", 5));

        runner.create_recurring(&task("A", 9)).unwrap();

        let tasks = runner.tasks.lock().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].interval_minutes.get(), 9);
    }
}
