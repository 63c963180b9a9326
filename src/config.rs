//! Tuning parameters for input handling and drawing.
//!
//! [`EditorConfig`] holds the input tolerances that decide what the pointer is
//! over and when a press becomes a drag. [`RenderStyle`] holds drawing
//! parameters. The two are independent: the attraction radius is an input
//! tolerance and only happens to match the default node radius.

use slint::Color;

/// Input tolerances used by hit testing and the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct EditorConfig {
    /// A node is hit when the pointer is strictly closer than this (default: 10).
    pub attraction_radius: i32,
    /// Allowed excess of the endpoint distance sum over the edge length (default: 3.0).
    pub edge_tolerance: f64,
    /// Displacement from the anchor node that turns a press into a drag (default: 3).
    pub drag_threshold: i32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            attraction_radius: 10,
            edge_tolerance: 3.0,
            drag_threshold: 3,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attraction_radius(mut self, radius: i32) -> Self {
        self.attraction_radius = radius;
        self
    }

    pub fn with_edge_tolerance(mut self, tolerance: f64) -> Self {
        self.edge_tolerance = tolerance;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: i32) -> Self {
        self.drag_threshold = threshold;
        self
    }
}

/// Drawing parameters consumed by the SVG scene builder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct RenderStyle {
    /// Radius of the circle drawn for each node (default: 10).
    pub node_radius: i32,
    /// Extra gap left between an edge's end and the target circle (default: 3).
    pub edge_gap: i32,
    /// Radius of the dot marking an edge's target end (default: 3).
    pub dot_radius: i32,
    /// Stroke width for nodes and edges (default: 2.0).
    pub stroke_width: f32,
    pub background: Color,
    pub stroke: Color,
    pub hover_stroke: Color,
    pub node_fill: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_radius: 10,
            edge_gap: 3,
            dot_radius: 3,
            stroke_width: 2.0,
            background: Color::from_rgb_u8(240, 250, 250),
            stroke: Color::from_rgb_u8(0, 100, 200),
            hover_stroke: Color::from_rgb_u8(200, 0, 0),
            node_fill: Color::from_rgb_u8(255, 255, 255),
        }
    }
}

impl RenderStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_radius(mut self, radius: i32) -> Self {
        self.node_radius = radius;
        self
    }

    pub fn with_edge_gap(mut self, gap: i32) -> Self {
        self.edge_gap = gap;
        self
    }

    pub fn with_dot_radius(mut self, radius: i32) -> Self {
        self.dot_radius = radius;
        self
    }

    pub fn with_colors(mut self, background: Color, stroke: Color, hover_stroke: Color) -> Self {
        self.background = background;
        self.stroke = stroke;
        self.hover_stroke = hover_stroke;
        self
    }

    /// Stroke color for a normal or highlighted element.
    pub fn stroke_for(&self, highlighted: bool) -> Color {
        if highlighted {
            self.hover_stroke
        } else {
            self.stroke
        }
    }
}
