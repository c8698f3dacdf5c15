use crate::app::AppState;
use crate::layout::{Bounds, MindMapLayout, NodeBox, Point, Viewport, NODE_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::constants::{palette, CELL_ASPECT, MAP_MARGIN};
use super::text::TextWrapper;
use crate::app::Page;

// Mind map renderer
pub struct MindMapRenderer<'a> {
    app: &'a AppState,
    layout: &'a MindMapLayout,
}

/// Layout-space rectangle shown in a `columns` x `rows` cell area. The whole
/// map fits, centred, with cells treated as twice as tall as wide.
pub fn fit_world(content: Bounds, columns: u16, rows: u16) -> Bounds {
    let content = Bounds {
        x: content.x - MAP_MARGIN,
        y: content.y - MAP_MARGIN,
        width: content.width + 2.0 * MAP_MARGIN,
        height: content.height + 2.0 * MAP_MARGIN,
    };
    let columns = f64::from(columns.max(1));
    let rows = f64::from(rows.max(1));

    // Layout units per column.
    let scale = (content.width / columns).max(content.height / (rows * CELL_ASPECT));
    let width = columns * scale;
    let height = rows * scale * CELL_ASPECT;

    Bounds {
        x: content.x - (width - content.width) / 2.0,
        y: content.y - (height - content.height) / 2.0,
        width,
        height,
    }
}

// Layout y grows downwards, canvas y grows upwards.
fn flip(p: Point) -> (f64, f64) {
    (p.x, -p.y)
}

impl<'a> MindMapRenderer<'a> {
    pub fn new(app: &'a AppState, layout: &'a MindMapLayout) -> Self {
        Self { app, layout }
    }

    /// Draws the map and returns where it landed, for mouse hit-testing.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Option<Viewport> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::FRAME))
            .title(format!(" {} ", Page::MindMap.title()));
        let inner = block.inner(area);

        let content = self.layout.bounds()?;
        let world = fit_world(content, inner.width, inner.height);
        let units_per_column = world.width / f64::from(inner.width.max(1));

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([world.x, world.x + world.width])
            .y_bounds([-(world.y + world.height), -world.y])
            .paint(|ctx| {
                self.draw_connectors(ctx);
                ctx.layer();
                self.draw_nodes(ctx, units_per_column);
            });
        frame.render_widget(canvas, area);

        Some(Viewport {
            left: inner.x,
            top: inner.y,
            width: inner.width,
            height: inner.height,
            world,
        })
    }

    fn draw_connectors(&self, ctx: &mut Context) {
        let segments = self.app.config.curve_segments;
        for connector in &self.layout.connectors {
            let points = connector.sample(segments);
            for pair in points.windows(2) {
                let (x1, y1) = flip(pair[0]);
                let (x2, y2) = flip(pair[1]);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: palette::CONNECTOR,
                });
            }
        }
    }

    fn draw_nodes(&self, ctx: &mut Context, units_per_column: f64) {
        let show_icons = self.app.is_admin();

        for node in &self.layout.nodes {
            let selected = node.id == self.app.selected_node;
            let color = if selected { palette::SELECTED } else { palette::NODE };
            ctx.draw(&Rectangle {
                x: node.body.x,
                y: -node.body.bottom(),
                width: node.body.width,
                height: node.body.height,
                color,
            });

            if show_icons {
                ctx.draw(&Rectangle {
                    x: node.add_icon.x,
                    y: -node.add_icon.bottom(),
                    width: node.add_icon.width,
                    height: node.add_icon.height,
                    color: palette::ADD_ICON,
                });
            }
        }

        // Text goes over the shapes.
        for node in &self.layout.nodes {
            self.print_label(ctx, node, units_per_column);
            if show_icons {
                let centre = Point::new(
                    node.add_icon.x + node.add_icon.width / 2.0,
                    node.add_icon.y + node.add_icon.height / 2.0,
                );
                let (x, y) = flip(centre);
                ctx.print(
                    x - units_per_column / 2.0,
                    y,
                    Span::styled("+", Style::default().fg(palette::ADD_ICON)),
                );
            }
        }
    }

    fn print_label(&self, ctx: &mut Context, node: &NodeBox, units_per_column: f64) {
        // Columns available inside the box, less one for each border.
        let max_columns = ((NODE_WIDTH / units_per_column) as usize).saturating_sub(2);
        if max_columns == 0 {
            return;
        }
        let label = TextWrapper::truncate(&node.label, max_columns);
        let half_width = label.width() as f64 * units_per_column / 2.0;

        let mut style = Style::default().fg(palette::TEXT);
        if node.id == self.app.selected_node {
            style = style.fg(palette::SELECTED).add_modifier(Modifier::BOLD);
        }

        let (x, y) = flip(Point::new(node.label_anchor.x, node.anchor.y));
        ctx.print(x - half_width, y, Line::from(Span::styled(label, style)));
    }
}
