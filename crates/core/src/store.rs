//! Session-scoped owner of the ordered task sequence.

use crate::model::{Task, TaskId, SEED_TASKS};

/// What a toggle did to the sequence. Purely observational: toggling never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Changed,
    Unchanged,
    NotFound,
}

/// Ordered, in-memory task sequence for one screen lifetime.
///
/// Display order is insertion order. The only write path is [`TaskStore::toggle`];
/// `version` bumps whenever a task value is replaced so renderers know to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    version: u64,
}

impl TaskStore {
    /// Store holding the three seed tasks, all incomplete.
    pub fn seeded() -> Self {
        let tasks = SEED_TASKS
            .iter()
            .map(|seed| Task::new(seed.id, seed.title, false))
            .collect();
        Self::from_tasks(tasks)
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, version: 0 }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the first task with `id` by a copy carrying `completed`.
    ///
    /// Unknown ids are ignored.
    pub fn toggle(&mut self, id: TaskId, completed: bool) -> ToggleOutcome {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            tracing::debug!(task_id = id.get(), "toggle ignored: task not in session");
            return ToggleOutcome::NotFound;
        };

        if self.tasks[index].completed == completed {
            return ToggleOutcome::Unchanged;
        }

        let replacement = self.tasks[index].with_completed(completed);
        self.tasks[index] = replacement;
        self.version = self.version.wrapping_add(1);
        tracing::debug!(task_id = id.get(), completed, "task completion updated");
        ToggleOutcome::Changed
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::seeded()
    }
}
