use crate::app::{AppMode, AppState};
use crate::prompt::{PromptPurpose, TextInput};
use tracing::{info, warn};

use super::session;

/// The text field that currently has focus: the prompt's buffer or the
/// focused login field.
fn focused_input(app: &mut AppState) -> Option<&mut TextInput> {
    match &mut app.mode {
        AppMode::Prompt(prompt) => Some(&mut prompt.input),
        AppMode::Login(form) => Some(form.focused_mut()),
        AppMode::Normal | AppMode::Help => None,
    }
}

fn with_input(app: &mut AppState, f: impl FnOnce(&mut TextInput)) {
    if let Some(input) = focused_input(app) {
        f(input);
    }
}

pub fn type_char(app: &mut AppState, c: char) {
    with_input(app, |input| input.insert(c));
}

pub fn backspace(app: &mut AppState) {
    with_input(app, TextInput::backspace);
}

pub fn delete_char(app: &mut AppState) {
    with_input(app, TextInput::delete);
}

pub fn move_cursor_left(app: &mut AppState) {
    with_input(app, TextInput::move_left);
}

pub fn move_cursor_right(app: &mut AppState) {
    with_input(app, TextInput::move_right);
}

pub fn move_cursor_home(app: &mut AppState) {
    with_input(app, TextInput::move_home);
}

pub fn move_cursor_end(app: &mut AppState) {
    with_input(app, TextInput::move_end);
}

pub fn move_cursor_word_left(app: &mut AppState) {
    with_input(app, TextInput::move_word_left);
}

pub fn move_cursor_word_right(app: &mut AppState) {
    with_input(app, TextInput::move_word_right);
}

pub fn delete_word_backward(app: &mut AppState) {
    with_input(app, TextInput::delete_word_backward);
}

pub fn delete_to_end(app: &mut AppState) {
    with_input(app, TextInput::delete_to_end);
}

pub fn delete_to_start(app: &mut AppState) {
    with_input(app, TextInput::delete_to_start);
}

/// Applies the open prompt, or submits the login form.
pub fn submit(app: &mut AppState) {
    if matches!(app.mode, AppMode::Login(_)) {
        session::submit_login(app);
        return;
    }

    let AppMode::Prompt(prompt) = std::mem::replace(&mut app.mode, AppMode::Normal) else {
        return;
    };
    let label = prompt.submit();

    match prompt.purpose {
        PromptPurpose::RenameNode(id) => match app.store.rename_node(&id, label.as_deref()) {
            Ok(true) => {
                info!(node = %id, "node renamed");
                app.selected_node = id;
            }
            Ok(false) => app.set_message("已取消"),
            Err(e) => {
                warn!(error = %e, "rename failed");
                app.set_message(e.to_string());
            }
        },
        PromptPurpose::AddChild(parent) => {
            match app.store.add_child_node(&parent, label.as_deref()) {
                Ok(Some(id)) => {
                    info!(parent = %parent, node = %id, "child added");
                    app.selected_node = id;
                }
                Ok(None) => app.set_message("已取消"),
                Err(e) => {
                    warn!(error = %e, "add child failed");
                    app.set_message(e.to_string());
                }
            }
        }
    }
}

/// Closes the prompt without applying it, or leaves the login form.
pub fn cancel(app: &mut AppState) {
    match app.mode {
        AppMode::Login(_) => session::cancel_login(app),
        _ => app.mode = AppMode::Normal,
    }
}
