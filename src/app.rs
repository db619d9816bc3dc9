use tracing::debug;

use crate::edit_mode::EditMode;
use crate::storage::KeyValueStore;
use crate::task::Task;
use crate::task_store::{IdGenerator, RandomIdGenerator, TaskStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    InputChar(char),
    InputBackspace,
    /// "Adicionar"
    Submit,
    SelectNext,
    SelectPrevious,
    FocusNext,
    /// "Alterar"
    BeginEdit,
    DraftChar(char),
    DraftBackspace,
    /// "Salvar"
    SaveEdit,
    /// "Inativar" / "Ativar". Only acts while an edit is open, and flips the
    /// selected row, which need not be the row being edited.
    ToggleStatus,
    /// "Excluir"
    Delete,
    Quit,
}

#[derive(Debug)]
pub struct App<S, G = RandomIdGenerator> {
    pub tasks: TaskStore<S, G>,
    pub edit: EditMode,
    pub input: String,
    pub focus: Focus,
    pub selected: usize,
    pub should_quit: bool,
}

impl<S: KeyValueStore, G: IdGenerator> App<S, G> {
    pub fn new(tasks: TaskStore<S, G>) -> Self {
        Self {
            tasks,
            edit: EditMode::Idle,
            input: String::new(),
            focus: Focus::Input,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.selected)
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, focus = ?self.focus, "applying action");
        match action {
            Action::InputChar(c) => self.input.push(c),
            Action::InputBackspace => {
                self.input.pop();
            }
            Action::Submit => {
                if let Some(id) = self.tasks.add(&self.input) {
                    self.input.clear();
                    if let Some(pos) = self.tasks.position(&id) {
                        self.selected = pos;
                    }
                }
            }
            Action::SelectNext => {
                if self.selected + 1 < self.tasks.len() {
                    self.selected += 1;
                }
            }
            Action::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::FocusNext => {
                self.focus = match self.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
            }
            Action::BeginEdit => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.edit.begin(&self.tasks, &id);
                }
            }
            Action::DraftChar(c) => self.edit.push_char(c),
            Action::DraftBackspace => self.edit.pop_char(),
            Action::SaveEdit => {
                self.edit.save(&mut self.tasks);
            }
            Action::ToggleStatus => {
                if !self.edit.toggle_visible() {
                    return;
                }
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.tasks.toggle_status(&id);
                }
            }
            Action::Delete => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    if self.edit.is_editing(&id) {
                        self.edit = EditMode::Idle;
                    }
                    self.tasks.delete(&id);
                }
            }
            Action::Quit => self.should_quit = true,
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }
}
