use crate::actions::Action;
use crate::app::{AppMode, AppState, Page};
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

pub fn handle_events(app: &mut AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(app.config.tick_rate_ms))? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            _ => None,
        });
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return Some(Action::Quit);
    }

    match &app.mode {
        AppMode::Normal => match app.page {
            Page::MindMap => handle_map_mode(key),
            _ => handle_list_mode(key),
        },
        AppMode::Prompt(_) => handle_text_input(key),
        AppMode::Login(_) => handle_login_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

/// Only left clicks on the map page in normal mode mean anything.
pub fn handle_mouse_event(app: &AppState, mouse: MouseEvent) -> Option<Action> {
    if app.page != Page::MindMap || app.mode != AppMode::Normal {
        return None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

// Keys shared by every page in normal mode.
fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),

        // Pages
        (Char('1'), KeyModifiers::NONE) => Some(Action::OpenPage(Page::Journal)),
        (Char('2'), KeyModifiers::NONE) => Some(Action::OpenPage(Page::Hobbies)),
        (Char('3'), KeyModifiers::NONE) => Some(Action::OpenPage(Page::Projects)),
        (Char('4'), KeyModifiers::NONE) => Some(Action::OpenPage(Page::MindMap)),
        (Char(']'), KeyModifiers::NONE) => Some(Action::NextPage),
        (Char('['), KeyModifiers::NONE) => Some(Action::PreviousPage),
        (Char('L'), KeyModifiers::SHIFT) | (Char('L'), KeyModifiers::NONE) => {
            Some(Action::ToggleSession)
        }

        // Help
        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_list_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::SelectUp),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::SelectDown),
        (Char('n'), KeyModifiers::NONE) => Some(Action::Add),
        (Char('d'), KeyModifiers::NONE) | (Delete, _) => Some(Action::Delete),
        _ => handle_global_keys(key),
    }
}

fn handle_map_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Movement
        (Char('h'), KeyModifiers::NONE) | (Left, _) => Some(Action::SelectLeft),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::SelectDown),
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::SelectUp),
        (Char('l'), KeyModifiers::NONE) | (Right, _) => Some(Action::SelectRight),

        // Node editing
        (Enter, KeyModifiers::NONE) | (Char('e'), KeyModifiers::NONE) => Some(Action::Edit),
        (Char('a'), KeyModifiers::NONE) | (Tab, KeyModifiers::NONE) => Some(Action::Add),
        (Char('d'), KeyModifiers::NONE) => Some(Action::Delete),

        _ => handle_global_keys(key),
    }
}

fn handle_text_input(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Esc, _) => Some(Action::Cancel),
        (Enter, _) => Some(Action::Submit),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Action::TypeChar(c)),

        // Deletion
        (Backspace, KeyModifiers::NONE) => Some(Action::Backspace),
        (Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Action::DeleteWordBackward)
        }
        (Char('w'), KeyModifiers::CONTROL) => Some(Action::DeleteWordBackward),
        (Delete, KeyModifiers::NONE) => Some(Action::DeleteChar),
        (Char('k'), KeyModifiers::CONTROL) => Some(Action::DeleteToEnd),
        (Char('u'), KeyModifiers::CONTROL) => Some(Action::DeleteToStart),

        // Movement
        (Left, KeyModifiers::NONE) => Some(Action::MoveCursorLeft),
        (Right, KeyModifiers::NONE) => Some(Action::MoveCursorRight),
        (Left, KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(Action::MoveCursorWordLeft),
        (Right, KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(Action::MoveCursorWordRight),
        (Char('b'), KeyModifiers::ALT) => Some(Action::MoveCursorWordLeft),
        (Char('f'), KeyModifiers::ALT) => Some(Action::MoveCursorWordRight),
        (Home, _) | (Char('a'), KeyModifiers::CONTROL) => Some(Action::MoveCursorHome),
        (End, _) | (Char('e'), KeyModifiers::CONTROL) => Some(Action::MoveCursorEnd),

        _ => None,
    }
}

fn handle_login_mode(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) | (KeyCode::Up, _) | (KeyCode::Down, _) => {
            Some(Action::SwitchField)
        }
        _ => handle_text_input(key),
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}
