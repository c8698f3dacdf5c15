use crate::app::{AppState, LoginField, LoginForm, Page};
use crate::model::{BlogPost, HobbyItem, Project, MAX_RATING};
use crate::prompt::TextInput;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::constants::{palette, CURSOR_INDICATOR, EMPTY_LIST, MASK_CHAR, STAR_EMPTY, STAR_FULL};
use super::text::TextWrapper;

fn page_block(page: Page) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette::FRAME))
        .title(format!(" {} ", page.title()))
}

fn render_list(frame: &mut Frame, area: Rect, page: Page, items: Vec<ListItem<'static>>, selected: usize) {
    let block = page_block(page);
    if items.is_empty() {
        let empty = Paragraph::new(Line::styled(EMPTY_LIST, Style::default().fg(palette::DIM)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

// Room left for wrapped text inside the block, border and highlight symbol.
fn text_width(area: Rect) -> usize {
    usize::from(area.width.saturating_sub(6))
}

pub fn render_journal(frame: &mut Frame, app: &AppState, area: Rect) {
    let width = text_width(area);
    let items = app
        .store
        .blogs
        .items()
        .iter()
        .map(|post| blog_item(post, width))
        .collect();
    render_list(frame, area, Page::Journal, items, app.selected_blog);
}

fn blog_item(post: &BlogPost, width: usize) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(post.date.clone(), Style::default().fg(palette::DIM)),
            Span::raw("  "),
            Span::styled(
                post.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "),
                Style::default().fg(palette::NODE),
            ),
        ]),
    ];
    lines.extend(TextWrapper::wrap(&post.excerpt, width).into_iter().map(Line::from));
    lines.push(Line::from(""));
    ListItem::new(lines)
}

pub fn render_hobbies(frame: &mut Frame, app: &AppState, area: Rect) {
    let width = text_width(area);
    let items = app
        .store
        .hobbies
        .items()
        .iter()
        .map(|hobby| hobby_item(hobby, width))
        .collect();
    render_list(frame, area, Page::Hobbies, items, app.selected_hobby);
}

pub fn stars(rating: u8) -> String {
    let full = rating.min(MAX_RATING);
    let mut out = String::new();
    out.extend(std::iter::repeat(STAR_FULL).take(usize::from(full)));
    out.extend(std::iter::repeat(STAR_EMPTY).take(usize::from(MAX_RATING - full)));
    out
}

fn hobby_item(hobby: &HobbyItem, width: usize) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", hobby.kind.as_str().to_uppercase()),
                Style::default().fg(palette::NODE),
            ),
            Span::styled(
                hobby.title.clone(),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}", hobby.creator)),
        ]),
        Line::from(Span::styled(stars(hobby.rating), Style::default().fg(palette::ACCENT))),
    ];
    lines.extend(
        TextWrapper::wrap(&format!("\"{}\"", hobby.comment), width)
            .into_iter()
            .map(Line::from),
    );
    lines.push(Line::from(""));
    ListItem::new(lines)
}

pub fn render_projects(frame: &mut Frame, app: &AppState, area: Rect) {
    let width = text_width(area);
    let items = app
        .store
        .projects
        .items()
        .iter()
        .map(|project| project_item(project, width))
        .collect();
    render_list(frame, area, Page::Projects, items, app.selected_project);
}

fn project_item(project: &Project, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("[{}] ", project.category.badge()),
            Style::default().fg(palette::ALERT),
        ),
        Span::styled(
            project.name.clone(),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.extend(TextWrapper::wrap(&project.description, width).into_iter().map(Line::from));
    if let Some(link) = &project.link {
        lines.push(Line::from(Span::styled(
            format!("-> {link}"),
            Style::default()
                .fg(palette::NODE)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_login(frame: &mut Frame, form: Option<&LoginForm>, area: Rect) {
    let outer = page_block(Page::Login);
    frame.render_widget(outer, area);

    let dialog = centered(area, 44, 10);
    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette::ACCENT))
        .title(" ACCESS TERMINAL ");
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let default_form = LoginForm::default();
    let form = form.unwrap_or(&default_form);

    frame.render_widget(Paragraph::new("OPERATOR ID"), rows[0]);
    frame.render_widget(
        Paragraph::new(field_line(&form.operator_id, false, form.focus == LoginField::OperatorId)),
        rows[1],
    );
    frame.render_widget(Paragraph::new("SECURITY CODE"), rows[3]);
    frame.render_widget(
        Paragraph::new(field_line(&form.security_code, true, form.focus == LoginField::SecurityCode)),
        rows[4],
    );
}

/// One input row. Masked fields show a star per character.
pub fn field_line(input: &TextInput, masked: bool, focused: bool) -> Line<'static> {
    let (before, after) = input.split_at_cursor();
    let (before, after) = if masked {
        (
            MASK_CHAR.to_string().repeat(before.chars().count()),
            MASK_CHAR.to_string().repeat(after.chars().count()),
        )
    } else {
        (before, after)
    };

    let style = if focused {
        Style::default().fg(palette::ACCENT)
    } else {
        Style::default().fg(palette::DIM)
    };

    let mut spans = vec![Span::styled("> ", style), Span::styled(before, style)];
    if focused {
        spans.push(Span::styled(CURSOR_INDICATOR.to_string(), style));
    }
    spans.push(Span::styled(after, style));
    Line::from(spans)
}
