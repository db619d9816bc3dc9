use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Ativo,
    Inativo,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Ativo => TaskStatus::Inativo,
            TaskStatus::Inativo => TaskStatus::Ativo,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Ativo => "ativo",
            TaskStatus::Inativo => "inativo",
        }
    }

    /// Label of the action that moves a task out of this status.
    pub fn toggle_label(self) -> &'static str {
        match self {
            TaskStatus::Ativo => "Inativar",
            TaskStatus::Inativo => "Ativar",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: String, description: String) -> Self {
        Self {
            id,
            description,
            status: TaskStatus::default(),
        }
    }
}
