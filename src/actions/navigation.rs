use crate::app::{AppState, Page};
use tracing::debug;

pub fn open_page(app: &mut AppState, page: Page) {
    debug!(%page, "opening page");
    app.clear_message();
    app.open_page(page);
}

fn step_tab(app: &mut AppState, forward: bool) {
    let tabs = Page::TABS;
    let next = match tabs.iter().position(|p| *p == app.page) {
        Some(i) if forward => tabs[(i + 1) % tabs.len()],
        Some(i) => tabs[(i + tabs.len() - 1) % tabs.len()],
        None => tabs[0],
    };
    open_page(app, next);
}

pub fn next_page(app: &mut AppState) {
    step_tab(app, true);
}

pub fn previous_page(app: &mut AppState) {
    step_tab(app, false);
}

fn list_cursor(app: &mut AppState) -> Option<(&mut usize, usize)> {
    match app.page {
        Page::Journal => Some((&mut app.selected_blog, app.store.blogs.len())),
        Page::Hobbies => Some((&mut app.selected_hobby, app.store.hobbies.len())),
        Page::Projects => Some((&mut app.selected_project, app.store.projects.len())),
        Page::MindMap | Page::Login => None,
    }
}

pub fn select_previous(app: &mut AppState) {
    if let Some((index, _)) = list_cursor(app) {
        *index = index.saturating_sub(1);
    }
}

pub fn select_next(app: &mut AppState) {
    if let Some((index, len)) = list_cursor(app) {
        if *index + 1 < len {
            *index += 1;
        }
    }
}
