//! Slint-ready frame built from the draw pass.
//!
//! [`SvgScene`] is a [`RenderSurface`] that turns draw calls into SVG path
//! command strings. Consecutive calls with the same [`PathRole`] are merged
//! into one [`PathGroup`], so a frame is a short list of groups that keeps the
//! order the draw pass issued them in. Binding each group to its own Slint
//! `Path`, in list order, paints exactly what the draw pass drew.
//!
//! Node groups and edge groups are kept apart so node labels can be painted
//! between them: nodes with their labels first, edges on top.
//!
//! # Example
//!
//! ```ignore
//! use slint_graph_editor::GraphEditorController;
//!
//! let scene = ctrl.scene();
//! let style = *scene.style();
//! scene.sync_node_groups(&node_groups, |group| PathData {
//!     commands: group.commands.clone(),
//!     stroke: group.stroke(&style),
//!     fill: group.fill(&style),
//! });
//! scene.sync_edge_groups(&edge_groups, |group| PathData {
//!     commands: group.commands.clone(),
//!     stroke: group.stroke(&style),
//!     fill: group.fill(&style),
//! });
//! ```

use crate::config::RenderStyle;
use crate::geometry::Point;
use crate::path::{generate_circle_path, generate_edge_path};
use crate::render::RenderSurface;
use slint::{Color, Model, SharedString, VecModel};

/// What a group of path commands depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Node,
    HighlightedNode,
    Edge,
    HighlightedEdge,
    /// The rubber-band line of an edge being dragged out
    Preview,
}

impl PathRole {
    pub fn is_highlighted(self) -> bool {
        matches!(self, PathRole::HighlightedNode | PathRole::HighlightedEdge)
    }

    pub fn is_node(self) -> bool {
        matches!(self, PathRole::Node | PathRole::HighlightedNode)
    }
}

/// Path commands for a run of consecutive draw calls sharing one role.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup {
    pub role: PathRole,
    pub commands: SharedString,
}

impl PathGroup {
    /// Stroke color for this group.
    pub fn stroke(&self, style: &RenderStyle) -> Color {
        style.stroke_for(self.role.is_highlighted())
    }

    /// Fill color for this group. Only node circles are filled.
    pub fn fill(&self, style: &RenderStyle) -> Color {
        if self.role.is_node() {
            style.node_fill
        } else {
            Color::default()
        }
    }
}

/// A node label positioned at its node's center.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLabel {
    pub x: f32,
    pub y: f32,
    pub text: SharedString,
    pub highlighted: bool,
}

/// One rendered frame as SVG path commands.
#[derive(Debug, Clone, Default)]
pub struct SvgScene {
    style: RenderStyle,
    background: Color,
    node_groups: Vec<PathGroup>,
    edge_groups: Vec<PathGroup>,
    labels: Vec<NodeLabel>,
}

impl SvgScene {
    pub fn new(style: RenderStyle) -> Self {
        Self {
            style,
            background: style.background,
            ..Self::default()
        }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Background color passed to the last `clear`.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Node circles in draw order. Later groups paint over earlier ones.
    pub fn node_groups(&self) -> &[PathGroup] {
        &self.node_groups
    }

    /// Edges and the drag preview in draw order, painted after all nodes.
    pub fn edge_groups(&self) -> &[PathGroup] {
        &self.edge_groups
    }

    /// Every group in paint order.
    pub fn groups(&self) -> impl Iterator<Item = &PathGroup> + '_ {
        self.node_groups.iter().chain(self.edge_groups.iter())
    }

    pub fn labels(&self) -> &[NodeLabel] {
        &self.labels
    }

    /// Update a node group model in place.
    pub fn sync_node_groups<P, F>(&self, model: &VecModel<P>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&PathGroup) -> P,
    {
        sync_model(&self.node_groups, model, constructor);
    }

    /// Update an edge group model in place.
    pub fn sync_edge_groups<P, F>(&self, model: &VecModel<P>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&PathGroup) -> P,
    {
        sync_model(&self.edge_groups, model, constructor);
    }

    /// Update a label model in place.
    pub fn sync_labels<P, F>(&self, model: &VecModel<P>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&NodeLabel) -> P,
    {
        sync_model(&self.labels, model, constructor);
    }
}

/// Overwrite, append or truncate rows so `model` ends up with one row per item.
fn sync_model<T, P, F>(items: &[T], model: &VecModel<P>, constructor: F)
where
    P: Clone + 'static,
    F: Fn(&T) -> P,
{
    for (i, item) in items.iter().enumerate() {
        let row = constructor(item);
        if i < model.row_count() {
            model.set_row_data(i, row);
        } else {
            model.push(row);
        }
    }

    while model.row_count() > items.len() {
        model.remove(model.row_count() - 1);
    }
}

fn push_path(groups: &mut Vec<PathGroup>, role: PathRole, path: &str) {
    match groups.last_mut() {
        Some(group) if group.role == role => {
            group.commands.push_str(" ");
            group.commands.push_str(path);
        }
        _ => groups.push(PathGroup {
            role,
            commands: path.into(),
        }),
    }
}

impl RenderSurface for SvgScene {
    fn clear(&mut self, background: Color) {
        self.background = background;
        self.node_groups.clear();
        self.edge_groups.clear();
        self.labels.clear();
    }

    fn draw_node(&mut self, position: Point, label: &str, highlighted: bool) {
        let role = if highlighted {
            PathRole::HighlightedNode
        } else {
            PathRole::Node
        };
        let circle = generate_circle_path(position, self.style.node_radius);
        push_path(&mut self.node_groups, role, &circle);
        self.labels.push(NodeLabel {
            x: position.x as f32,
            y: position.y as f32,
            text: label.into(),
            highlighted,
        });
    }

    fn draw_edge(&mut self, from: Point, to: Point, highlighted: bool, exact: bool) {
        let role = if exact {
            PathRole::Preview
        } else if highlighted {
            PathRole::HighlightedEdge
        } else {
            PathRole::Edge
        };
        let path = generate_edge_path(from, to, exact, &self.style);
        push_path(&mut self.edge_groups, role, &path);
    }
}
