//! The draw pass and the surface it draws onto.
//!
//! The graph never touches a drawing API. [`render_scene`] walks the graph
//! and issues calls on a [`RenderSurface`]; [`SvgScene`](crate::SvgScene) is
//! the implementation used with Slint, and tests use a recording one.

use crate::config::RenderStyle;
use crate::geometry::Point;
use crate::graph::Graph;
use slint::Color;

/// Drawing target for one frame.
///
/// Implementations only draw; they must not hold on to graph state between
/// frames.
pub trait RenderSurface {
    /// Fill the whole surface.
    fn clear(&mut self, background: Color);

    /// Draw a node as a labelled circle centered on `position`.
    fn draw_node(&mut self, position: Point, label: &str, highlighted: bool);

    /// Draw an edge from `from` to `to`.
    ///
    /// With `exact` set the line must end exactly at `to` instead of stopping
    /// short of a target node's circle.
    fn draw_edge(&mut self, from: Point, to: Point, highlighted: bool, exact: bool);
}

/// The rubber-band line shown while dragging out a new edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePreview {
    /// Position of the node the drag started on
    pub from: Point,
    /// Live pointer position
    pub to: Point,
}

/// Draw `graph` onto `surface`.
///
/// Nodes are drawn first in insertion order, then edges, then the preview if
/// any. A hovered node is highlighted only while no edge is hovered; a hovered
/// edge highlights exactly that `(source, target)` pair.
pub fn render_scene<S>(
    graph: &Graph,
    preview: Option<EdgePreview>,
    style: &RenderStyle,
    surface: &mut S,
) where
    S: RenderSurface + ?Sized,
{
    surface.clear(style.background);

    let hover = graph.hover();
    for node in graph.nodes() {
        surface.draw_node(node.position(), node.label(), hover.highlights_node(node.id()));
    }

    for edge in graph.edge_geometries() {
        let highlighted = hover.highlights_edge(edge.source, edge.target);
        surface.draw_edge(edge.start, edge.end, highlighted, false);
    }

    if let Some(preview) = preview {
        surface.draw_edge(preview.from, preview.to, false, true);
    }
}
