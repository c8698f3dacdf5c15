use crate::app::{AppState, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::constants::{palette, ADMIN_BADGE, APP_TITLE, DEBUG_BADGE, VISITOR_BADGE};

/// Header bar: page tabs on the left, session status on the right.
pub struct HudRenderer;

impl HudRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::FRAME))
            .title(Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status = Self::status_line(app);
        let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(status_width)])
            .split(inner);

        frame.render_widget(Self::tabs(app), chunks[0]);
        frame.render_widget(Paragraph::new(status), chunks[1]);
    }

    fn tabs(app: &AppState) -> Tabs<'static> {
        let titles: Vec<Line> = Page::TABS
            .iter()
            .enumerate()
            .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.tab_label())))
            .collect();

        Tabs::new(titles)
            .select(Page::TABS.iter().position(|p| *p == app.page).unwrap_or(0))
            .style(Style::default().fg(palette::DIM))
            .highlight_style(
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("|")
    }

    pub fn status_line(app: &AppState) -> Line<'static> {
        let mut spans = Vec::new();
        if app.is_admin() && app.page == Page::MindMap {
            spans.push(Span::styled(
                DEBUG_BADGE,
                Style::default()
                    .fg(palette::ALERT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        let badge = if app.is_admin() {
            Span::styled(ADMIN_BADGE, Style::default().fg(palette::ACCENT))
        } else {
            Span::styled(VISITOR_BADGE, Style::default().fg(palette::DIM))
        };
        spans.push(badge);
        Line::from(spans)
    }
}
