use crate::app::{AppMode, AppState, Page};
use crate::prompt::TextInput;
use crate::ui::constants::{CURSOR_INDICATOR, HELP_HINT};
use crate::ui::text::TextWrapper;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::content_and_style(app, area.width);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    pub fn content_and_style(app: &AppState, width: u16) -> (String, Style) {
        match &app.mode {
            AppMode::Normal | AppMode::Login(_) => Self::render_normal_mode(app),
            AppMode::Prompt(prompt) => Self::render_prompt_mode(&prompt.title, &prompt.input, width),
            AppMode::Help => Self::render_help_mode(),
        }
    }

    fn render_normal_mode(app: &AppState) -> (String, Style) {
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD);
            return (msg.clone(), style);
        }

        let summary = match app.page {
            Page::Journal => format!("{} 篇日志", app.store.blogs.len()),
            Page::Hobbies => format!("{} 件藏品", app.store.hobbies.len()),
            Page::Projects => format!("{} 个副本", app.store.projects.len()),
            Page::MindMap => format!("{} 个节点", app.store.tree().node_count()),
            Page::Login => "Tab 切换 | Enter 登录 | Esc 返回".to_string(),
        };
        let content = if app.config.show_help_hint {
            format!("{summary} | {HELP_HINT}")
        } else {
            summary
        };

        (content, Style::default().fg(Color::Gray).bg(Color::Black))
    }

    /// Shows `title text▌`, scrolled so the cursor stays visible.
    fn render_prompt_mode(title: &str, input: &TextInput, width: u16) -> (String, Style) {
        let mut display = format!("{title} ");
        let available = usize::from(width).saturating_sub(display.width() + 1);

        let (before, after) = input.split_at_cursor();
        let mut before = before.as_str();
        let mut before_width = before.width();
        while before_width > available {
            let Some(c) = before.chars().next() else {
                break;
            };
            before_width -= UnicodeWidthChar::width(c).unwrap_or(0);
            before = &before[c.len_utf8()..];
        }
        let remaining = available.saturating_sub(before_width);

        display.push_str(before);
        display.push(CURSOR_INDICATOR);
        display.push_str(&TextWrapper::truncate(&after, remaining));

        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        (display, style)
    }

    fn render_help_mode() -> (String, Style) {
        let content = String::from("Press ESC or q to close help");
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        (content, style)
    }
}
