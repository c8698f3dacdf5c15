use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::constants::palette;

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

// Help section definitions
pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Pages:",
        items: &[
            ("1-4", "Journal / Trophy Room / Dungeon List / Tech Tree"),
            ("[ ]", "Previous / next page"),
            ("L  ", "Operator login (logout when unlocked)"),
        ],
    },
    HelpSection {
        title: "Lists:",
        items: &[
            ("j/↓", "Select next"),
            ("k/↑", "Select previous"),
            ("n  ", "New record (operator)"),
            ("d  ", "Delete record (operator)"),
        ],
    },
    HelpSection {
        title: "Tech Tree:",
        items: &[
            ("h/←", "Parent"),
            ("l/→", "First child"),
            ("j/k", "Next / previous sibling"),
            ("e/⏎", "Rename node (operator)"),
            ("a/⇥", "Add child (operator)"),
            ("🖱  ", "Click a node to rename, its + to add a child"),
        ],
    },
    HelpSection {
        title: "Input:",
        items: &[
            ("⏎  ", "Confirm"),
            ("Esc", "Cancel"),
            ("⇥  ", "Switch login field"),
            ("^U ", "Clear to start"),
        ],
    },
    HelpSection {
        title: "General:",
        items: &[("?  ", "Toggle this help"), ("q  ", "Quit")],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_text = Self::build_help_text();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::FRAME))
            .title(" Help ");
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![Span::styled("Adventurer's Log Help", bold)]),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(vec![Span::styled(section.title, bold)]));

            for (key, desc) in section.items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key}"), Style::default().fg(palette::ACCENT)),
                    Span::raw(format!("  {desc}")),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}
