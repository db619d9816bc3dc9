use crossterm::event::{self, Event};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;

use crate::app::{App, Focus};
use crate::keymap::action_for;
use crate::storage::KeyValueStore;
use crate::task::{Task, TaskStatus};
use crate::task_store::IdGenerator;

const PLACEHOLDER: &str = "Digite uma atividade";

pub fn run_app<B: Backend, S: KeyValueStore, G: IdGenerator>(
    terminal: &mut Terminal<B>,
    app: &mut App<S, G>,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = action_for(key, app.focus, &app.edit) {
                app.apply(action);
            }
        }
    }
    Ok(())
}

pub fn draw<S: KeyValueStore, G: IdGenerator>(f: &mut Frame, app: &App<S, G>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let input = if app.input.is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(app.input.as_str())
    };
    f.render_widget(
        input.block(pane_block("Adicionar [Enter]", app.focus == Focus::Input)),
        chunks[0],
    );

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .map(|t| task_row(t, app))
        .collect();
    let list = List::new(items)
        .block(pane_block("Atividades", app.focus == Focus::List))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !app.tasks.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);

    f.render_widget(
        Paragraph::new(help_line(app)).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        })
}

fn task_row<'a, S: KeyValueStore, G: IdGenerator>(
    task: &'a Task,
    app: &'a App<S, G>,
) -> ListItem<'a> {
    let editing = app.edit.is_editing(&task.id);
    let text_style = match task.status {
        TaskStatus::Ativo => Style::default().fg(Color::White),
        TaskStatus::Inativo => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
    };

    let mut spans = Vec::new();
    match app.edit.draft() {
        Some(draft) if editing => {
            spans.push(Span::styled(
                format!("{draft}_"),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw("  [Salvar]"));
        }
        _ => {
            spans.push(Span::styled(task.description.as_str(), text_style));
            spans.push(Span::raw("  [Alterar]"));
        }
    }
    if app.edit.toggle_visible() {
        spans.push(Span::raw(format!(" [{}]", task.status.toggle_label())));
    }
    spans.push(Span::raw(" [Excluir]"));
    spans.push(Span::styled(
        format!(" ({})", task.status.as_str()),
        Style::default().fg(Color::DarkGray),
    ));

    ListItem::new(Line::from(spans))
}

fn help_line<S: KeyValueStore, G: IdGenerator>(app: &App<S, G>) -> &'static str {
    match app.focus {
        Focus::Input => "Enter adicionar | Tab lista | Esc sair",
        Focus::List if app.edit.toggle_visible() => {
            "Enter salvar | Ctrl-T inativar/ativar | Del excluir | Tab entrada | Esc sair"
        }
        Focus::List => "Enter/e alterar | x/Del excluir | ↑↓ mover | Tab entrada | Esc sair",
    }
}
