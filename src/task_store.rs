//! The ordered task list and its persistence.
//!
//! Every mutation rewrites the whole list under [`TASKS_KEY`]. There is no
//! conflict detection: whoever writes the store last wins. Storage failures
//! are logged and swallowed, so memory may run ahead of storage until the
//! next successful write.

use tracing::{debug, error, info};

use crate::storage::{KeyValueStore, StorageError};
use crate::task::Task;

pub const TASKS_KEY: &str = "tasks";

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Ids are the decimal form of a random float in `[0, 1)`. Collisions are
/// not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        rand::random::<f64>().to_string()
    }
}

#[derive(Debug)]
pub struct TaskStore<S, G = RandomIdGenerator> {
    store: S,
    ids: G,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_ids(store, RandomIdGenerator)
    }
}

impl<S: KeyValueStore, G: IdGenerator> TaskStore<S, G> {
    #[tracing::instrument(skip_all)]
    pub fn load_with_ids(store: S, ids: G) -> Self {
        let tasks = match read_tasks(&store) {
            Ok(Some(tasks)) => {
                info!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Ok(None) => {
                info!("no stored tasks, starting empty");
                Vec::new()
            }
            Err(err) => {
                error!(error = ?err, "failed to load tasks");
                Vec::new()
            }
        };
        Self { store, ids, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a new active task. Blank descriptions are ignored and yield
    /// `None`; otherwise the new id is returned.
    pub fn add(&mut self, description: &str) -> Option<String> {
        if description.trim().is_empty() {
            debug!("ignoring blank description");
            return None;
        }
        let id = self.ids.next_id();
        self.tasks.push(Task::new(id.clone(), description.to_string()));
        debug!(%id, "added task");
        self.persist();
        Some(id)
    }

    pub fn update(&mut self, id: &str, new_description: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.description = new_description.to_string();
            debug!(%id, "updated description");
        }
        self.persist();
    }

    pub fn toggle_status(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = task.status.toggled();
            debug!(%id, status = task.status.as_str(), "toggled status");
        }
        self.persist();
    }

    pub fn delete(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        debug!(%id, removed = before - self.tasks.len(), "deleted task");
        self.persist();
    }

    /// Overwrites the stored list with the in-memory one.
    pub fn persist(&mut self) {
        if let Err(err) = write_tasks(&mut self.store, &self.tasks) {
            error!(error = ?err, "failed to save tasks");
            return;
        }
        debug!(count = self.tasks.len(), "saved tasks");
    }
}

fn read_tasks<S: KeyValueStore>(store: &S) -> Result<Option<Vec<Task>>, StorageError> {
    let Some(data) = store.get_item(TASKS_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| StorageError::Deserialize {
            key: TASKS_KEY.to_string(),
            source,
        })
}

fn write_tasks<S: KeyValueStore>(store: &mut S, tasks: &[Task]) -> Result<(), StorageError> {
    let data = serde_json::to_string(tasks).map_err(|source| StorageError::Serialize {
        key: TASKS_KEY.to_string(),
        source,
    })?;
    store.set_item(TASKS_KEY, &data)
}
