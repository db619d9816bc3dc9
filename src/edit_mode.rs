use crate::storage::KeyValueStore;
use crate::task_store::{IdGenerator, TaskStore};

/// Which row, if any, has its description open for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing { id: String, draft: String },
}

impl EditMode {
    /// Opens `id` for editing with its current description as the draft.
    /// An edit already in progress is dropped along with its draft. Unknown
    /// ids leave the mode unchanged.
    pub fn begin<S: KeyValueStore, G: IdGenerator>(&mut self, tasks: &TaskStore<S, G>, id: &str) {
        if let Some(task) = tasks.get(id) {
            *self = EditMode::Editing {
                id: task.id.clone(),
                draft: task.description.clone(),
            };
        }
    }

    /// Commits the draft and returns to `Idle`. Returns the id that was saved.
    pub fn save<S: KeyValueStore, G: IdGenerator>(
        &mut self,
        tasks: &mut TaskStore<S, G>,
    ) -> Option<String> {
        match std::mem::take(self) {
            EditMode::Editing { id, draft } => {
                tasks.update(&id, &draft);
                Some(id)
            }
            EditMode::Idle => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let EditMode::Editing { draft, .. } = self {
            draft.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let EditMode::Editing { draft, .. } = self {
            draft.pop();
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditMode::Editing { id, .. } => Some(id.as_str()),
            EditMode::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditMode::Editing { draft, .. } => Some(draft.as_str()),
            EditMode::Idle => None,
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id() == Some(id)
    }

    /// The status toggle is only offered while an edit is open.
    pub fn toggle_visible(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }
}
