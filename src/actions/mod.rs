mod content;
mod editing;
mod help;
mod mindmap;
mod navigation;
mod session;

use crate::app::{AppState, Page};
use anyhow::Result;
use tracing::trace;

// Re-export all public functions from submodules
pub use content::*;
pub use editing::*;
pub use help::*;
pub use mindmap::*;
pub use navigation::*;
pub use session::*;

/// Message shown when a visitor tries something only the operator may do.
pub const READ_ONLY_MESSAGE: &str = "只读模式：请先登录管理终端 (L)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Application control
    Quit,

    // Pages
    OpenPage(Page),
    NextPage,
    PreviousPage,
    ToggleSession,

    // Selection
    SelectUp,
    SelectDown,
    SelectLeft,
    SelectRight,

    // Content, interpreted by the current page
    Add,
    Delete,
    Edit,

    // Mouse click on a terminal cell
    ClickAt { column: u16, row: u16 },

    // Text input (prompt and login form)
    TypeChar(char),
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    MoveCursorWordLeft,
    MoveCursorWordRight,
    DeleteWordBackward,
    DeleteToEnd,
    DeleteToStart,
    SwitchField,
    Submit,
    Cancel,

    // Help
    ShowHelp,
    CloseHelp,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    trace!(?action, "executing");
    match action {
        Action::Quit => app.running = false,

        // Pages
        Action::OpenPage(page) => navigation::open_page(app, page),
        Action::NextPage => navigation::next_page(app),
        Action::PreviousPage => navigation::previous_page(app),
        Action::ToggleSession => session::toggle_session(app),

        // Selection
        Action::SelectUp => match app.page {
            Page::MindMap => mindmap::select_previous_sibling(app),
            _ => navigation::select_previous(app),
        },
        Action::SelectDown => match app.page {
            Page::MindMap => mindmap::select_next_sibling(app),
            _ => navigation::select_next(app),
        },
        Action::SelectLeft => {
            if app.page == Page::MindMap {
                mindmap::select_parent(app);
            }
        }
        Action::SelectRight => {
            if app.page == Page::MindMap {
                mindmap::select_first_child(app);
            }
        }

        // Content
        Action::Add => match app.page {
            Page::MindMap => mindmap::start_add_child(app),
            _ => content::add_record(app),
        },
        Action::Delete => match app.page {
            Page::MindMap => app.set_message("思维导图节点不可删除"),
            _ => content::delete_selected(app),
        },
        Action::Edit => {
            if app.page == Page::MindMap {
                mindmap::start_rename(app);
            }
        }
        Action::ClickAt { column, row } => mindmap::click_at(app, column, row),

        // Text input
        Action::TypeChar(c) => editing::type_char(app, c),
        Action::Backspace => editing::backspace(app),
        Action::DeleteChar => editing::delete_char(app),
        Action::MoveCursorLeft => editing::move_cursor_left(app),
        Action::MoveCursorRight => editing::move_cursor_right(app),
        Action::MoveCursorHome => editing::move_cursor_home(app),
        Action::MoveCursorEnd => editing::move_cursor_end(app),
        Action::MoveCursorWordLeft => editing::move_cursor_word_left(app),
        Action::MoveCursorWordRight => editing::move_cursor_word_right(app),
        Action::DeleteWordBackward => editing::delete_word_backward(app),
        Action::DeleteToEnd => editing::delete_to_end(app),
        Action::DeleteToStart => editing::delete_to_start(app),
        Action::SwitchField => session::switch_field(app),
        Action::Submit => editing::submit(app),
        Action::Cancel => editing::cancel(app),

        // Help
        Action::ShowHelp => help::show_help(app),
        Action::CloseHelp => help::close_help(app),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppMode;
    use crate::config::AppConfig;
    use crate::model::NodeId;
    use crate::store::{ADMIN_ID, ADMIN_PASSWORD};

    fn admin_app_on(page: Page) -> AppState {
        let mut app = AppState::new(AppConfig::default());
        app.store.login(ADMIN_ID, ADMIN_PASSWORD).unwrap();
        app.open_page(page);
        app
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            execute_action(Action::TypeChar(c), app).unwrap();
        }
    }

    #[test]
    fn test_quit() {
        let mut app = AppState::new(AppConfig::default());
        execute_action(Action::Quit, &mut app).unwrap();
        assert!(!app.running);
    }

    #[test]
    fn test_add_child_flow() {
        let mut app = admin_app_on(Page::MindMap);
        app.selected_node = NodeId::new("hobbies");

        execute_action(Action::Add, &mut app).unwrap();
        assert!(matches!(app.mode, AppMode::Prompt(_)));
        type_text(&mut app, "新爱好");
        execute_action(Action::Submit, &mut app).unwrap();

        assert_eq!(app.mode, AppMode::Normal);
        let hobbies = app.store.tree().find(&NodeId::new("hobbies")).unwrap();
        assert_eq!(hobbies.children.len(), 4);
        assert_eq!(hobbies.children[3].label, "新爱好");
        assert_eq!(app.selected_node, hobbies.children[3].id);
    }

    #[test]
    fn test_rename_flow_cancelled() {
        let mut app = admin_app_on(Page::MindMap);
        let before = app.store.tree().clone();

        execute_action(Action::Edit, &mut app).unwrap();
        execute_action(Action::DeleteToStart, &mut app).unwrap();
        type_text(&mut app, "Something");
        execute_action(Action::Cancel, &mut app).unwrap();

        assert_eq!(app.mode, AppMode::Normal);
        assert!(std::rc::Rc::ptr_eq(&before, app.store.tree()));
    }

    #[test]
    fn test_delete_on_map_is_refused() {
        let mut app = admin_app_on(Page::MindMap);
        execute_action(Action::Delete, &mut app).unwrap();
        assert_eq!(app.store.tree().node_count(), 12);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_edit_on_list_page_does_nothing() {
        let mut app = admin_app_on(Page::Journal);
        execute_action(Action::Edit, &mut app).unwrap();
        assert_eq!(app.mode, AppMode::Normal);
    }
}
