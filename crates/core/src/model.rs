use std::fmt;

/// Stable identifier of a task within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

impl TaskId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TaskId {
    fn from(value: u32) -> Self {
        TaskId(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }

    /// Copy of this task differing only in the completion flag.
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct SeedTask {
    pub(crate) id: u32,
    pub(crate) title: &'static str,
}

pub(crate) const SEED_TASKS: &[SeedTask] = &[
    SeedTask {
        id: 1,
        title: "Go to the gym",
    },
    SeedTask {
        id: 2,
        title: "Go to the store",
    },
    SeedTask {
        id: 3,
        title: "Go to the park",
    },
];
