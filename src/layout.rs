use crate::model::{NodeId, TreeNode};

/// Where the root's left edge and vertical centre land.
pub const ROOT_ORIGIN: Point = Point { x: 100.0, y: 450.0 };

/// Horizontal distance between a parent's left edge and its children's.
pub const HORIZONTAL_STEP: f64 = 320.0;

/// Sibling pitch under the root.
pub const ROOT_SIBLING_SPACING: f64 = 280.0;

/// Sibling pitch under a level-`n` node is this divided by `n`.
pub const SIBLING_SPACING_BASE: f64 = 180.0;

pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 70.0;

/// Minimum vertical gap between boxes of neighbouring subtrees.
pub const NODE_GAP: f64 = 10.0;

pub const ICON_SIZE: f64 = 32.0;

const CURVE_CONTROL_OFFSET: f64 = 70.0;
const LABEL_BASELINE_OFFSET: f64 = 8.0;
const ICON_OFFSET_X: f64 = 165.0;
const ICON_OFFSET_Y: f64 = -50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in layout space; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Bounds {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub id: NodeId,
    pub label: String,
    pub level: usize,
    /// Left edge, vertical centre.
    pub anchor: Point,
    pub body: Bounds,
    /// Centre of the label's baseline.
    pub label_anchor: Point,
    /// The "+" square that triggers add-child.
    pub add_icon: Bounds,
}

/// Cubic Bézier from a parent's right edge to a child's left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub parent: NodeId,
    pub child: NodeId,
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl Connector {
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let a = u * u * u;
        let b = 3.0 * u * u * t;
        let c = 3.0 * u * t * t;
        let d = t * t * t;
        Point {
            x: a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            y: a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        }
    }

    /// `segments + 1` points along the curve, endpoints included.
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotKind {
    Rename,
    AddChild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot<'a> {
    pub kind: HotspotKind,
    pub node: &'a NodeId,
}

/// Terminal cells a rendered map occupied and the layout-space rectangle
/// they showed. Used to turn mouse clicks back into layout points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub world: Bounds,
}

impl Viewport {
    /// Layout point at the centre of a terminal cell, if the cell is inside.
    pub fn cell_to_world(&self, column: u16, row: u16) -> Option<Point> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        if column < self.left
            || row < self.top
            || column >= self.left + self.width
            || row >= self.top + self.height
        {
            return None;
        }
        let fx = (f64::from(column - self.left) + 0.5) / f64::from(self.width);
        let fy = (f64::from(row - self.top) + 0.5) / f64::from(self.height);
        Some(Point::new(
            self.world.x + fx * self.world.width,
            self.world.y + fy * self.world.height,
        ))
    }
}

/// Sibling pitch for the children of a node at `level`.
pub fn sibling_spacing(level: usize) -> f64 {
    if level == 0 {
        ROOT_SIBLING_SPACING
    } else {
        SIBLING_SPACING_BASE / level as f64
    }
}

/// Geometry for one render of the mind map. Built fresh from the tree every
/// time; the tree itself is only read.
#[derive(Debug, Clone, Default)]
pub struct MindMapLayout {
    /// Pre-order, so `nodes[0]` is the root.
    pub nodes: Vec<NodeBox>,
    pub connectors: Vec<Connector>,
}

impl MindMapLayout {
    pub fn calculate(tree: &TreeNode) -> Self {
        Self::calculate_at(tree, ROOT_ORIGIN)
    }

    pub fn calculate_at(tree: &TreeNode, origin: Point) -> Self {
        let mut layout = Self::default();
        layout.place(tree, origin.x, origin.y, 0);
        layout
    }

    /// Vertical room the subtree under `node` needs.
    fn extent(node: &TreeNode, level: usize) -> f64 {
        if node.children.is_empty() {
            return NODE_HEIGHT;
        }
        let children: f64 = node
            .children
            .iter()
            .map(|child| Self::slot(child, level))
            .sum();
        children.max(NODE_HEIGHT)
    }

    /// Height reserved for one child of a node at `parent_level`: the
    /// level's pitch, widened when the child's own subtree needs more.
    fn slot(child: &TreeNode, parent_level: usize) -> f64 {
        let needed = Self::extent(child, parent_level + 1) + NODE_GAP;
        sibling_spacing(parent_level).max(needed)
    }

    fn place(&mut self, node: &TreeNode, x: f64, y: f64, level: usize) {
        self.nodes.push(NodeBox {
            id: node.id.clone(),
            label: node.label.clone(),
            level,
            anchor: Point::new(x, y),
            body: Bounds {
                x,
                y: y - NODE_HEIGHT / 2.0,
                width: NODE_WIDTH,
                height: NODE_HEIGHT,
            },
            label_anchor: Point::new(x + NODE_WIDTH / 2.0, y + LABEL_BASELINE_OFFSET),
            add_icon: Bounds {
                x: x + ICON_OFFSET_X,
                y: y + ICON_OFFSET_Y,
                width: ICON_SIZE,
                height: ICON_SIZE,
            },
        });

        let slots: Vec<f64> = node
            .children
            .iter()
            .map(|child| Self::slot(child, level))
            .collect();
        let total: f64 = slots.iter().sum();
        let child_x = x + HORIZONTAL_STEP;
        let mut top = y - total / 2.0;

        for (child, slot) in node.children.iter().zip(slots) {
            let child_y = top + slot / 2.0;
            let start = Point::new(x + NODE_WIDTH, y);
            self.connectors.push(Connector {
                parent: node.id.clone(),
                child: child.id.clone(),
                start,
                control1: Point::new(start.x + CURVE_CONTROL_OFFSET, y),
                control2: Point::new(start.x + CURVE_CONTROL_OFFSET, child_y),
                end: Point::new(child_x, child_y),
            });
            self.place(child, child_x, child_y, level + 1);
            top += slot;
        }
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeBox> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Smallest rectangle holding every node body and icon.
    pub fn bounds(&self) -> Option<Bounds> {
        self.nodes
            .iter()
            .map(|n| n.body.union(&n.add_icon))
            .reduce(|acc, b| acc.union(&b))
    }

    /// Which interactive region lies under `p`. Add-child icons are drawn
    /// over node bodies, so they win; they are skipped entirely unless
    /// `with_add_icons` is set.
    pub fn hit_test(&self, p: Point, with_add_icons: bool) -> Option<Hotspot<'_>> {
        if with_add_icons {
            if let Some(n) = self.nodes.iter().find(|n| n.add_icon.contains(p)) {
                return Some(Hotspot {
                    kind: HotspotKind::AddChild,
                    node: &n.id,
                });
            }
        }

        self.nodes
            .iter()
            .find(|n| n.body.contains(p))
            .map(|n| Hotspot {
                kind: HotspotKind::Rename,
                node: &n.id,
            })
    }
}
