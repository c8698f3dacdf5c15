use crate::app::{AppMode, AppState, Page};
use crate::layout::MindMapLayout;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub mod constants;
pub mod help;
pub mod hud;
pub mod mindmap;
pub mod pages;
pub mod status_line;
pub mod text;


use help::HelpRenderer;
use hud::HudRenderer;
use mindmap::MindMapRenderer;
use status_line::StatusLineRenderer;

// Main render function
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let size = frame.area();

    // Header, page body, status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    HudRenderer::render(frame, app, chunks[0]);

    let viewport = render_page(frame, app, chunks[1]);
    app.map_viewport = viewport;

    if app.mode == AppMode::Help {
        HelpRenderer::render(frame, help_area(chunks[1]));
    }

    StatusLineRenderer::render(frame, app, chunks[2]);
}

fn render_page(frame: &mut Frame, app: &AppState, area: Rect) -> Option<crate::layout::Viewport> {
    match app.page {
        Page::Journal => pages::render_journal(frame, app, area),
        Page::Hobbies => pages::render_hobbies(frame, app, area),
        Page::Projects => pages::render_projects(frame, app, area),
        Page::Login => {
            let form = match &app.mode {
                AppMode::Login(form) => Some(form),
                _ => None,
            };
            pages::render_login(frame, form, area);
        }
        Page::MindMap => {
            let layout = MindMapLayout::calculate(app.store.tree());
            return MindMapRenderer::new(app, &layout).render(frame, area);
        }
    }
    None
}

fn help_area(area: Rect) -> Rect {
    let margin_x = area.width / 8;
    let margin_y = area.height / 10;
    Rect {
        x: area.x + margin_x,
        y: area.y + margin_y,
        width: area.width.saturating_sub(2 * margin_x),
        height: area.height.saturating_sub(2 * margin_y),
    }
}
