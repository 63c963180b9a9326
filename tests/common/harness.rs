//! Test harness wrapping a controller the way the demo window does.
//!
//! Pointer helpers go through the same `f32` callbacks the window is wired
//! to, and every redraw is counted by the [`CallbackTracker`].

#![allow(dead_code)]

use super::CallbackTracker;
use slint::Color;
use slint_graph_editor::{
    EditorConfig, GraphEditorController, Hover, InteractionState, NodeId, Point, RenderSurface,
};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Node { position: Point, label: String, highlighted: bool },
    Edge { from: Point, to: Point, highlighted: bool, exact: bool },
}

/// Surface that records draw calls instead of painting.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn nodes(&self) -> Vec<(Point, String, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Node { position, label, highlighted } => {
                    Some((*position, label.clone(), *highlighted))
                }
                _ => None,
            })
            .collect()
    }

    pub fn edges(&self) -> Vec<(Point, Point, bool, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Edge { from, to, highlighted, exact } => {
                    Some((*from, *to, *highlighted, *exact))
                }
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, background: Color) {
        self.calls.push(DrawCall::Clear(background));
    }

    fn draw_node(&mut self, position: Point, label: &str, highlighted: bool) {
        self.calls.push(DrawCall::Node { position, label: label.to_string(), highlighted });
    }

    fn draw_edge(&mut self, from: Point, to: Point, highlighted: bool, exact: bool) {
        self.calls.push(DrawCall::Edge { from, to, highlighted, exact });
    }
}

/// Controller plus tracker, driven through the window callbacks.
pub struct EditorHarness {
    pub ctrl: GraphEditorController,
    pub tracker: CallbackTracker,
}

impl EditorHarness {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let ctrl = GraphEditorController::with_config(config);
        let tracker = CallbackTracker::new();

        ctrl.set_redraw_handler({
            let ctrl = ctrl.clone();
            let tracker = tracker.clone();
            move || {
                *tracker.redraws.borrow_mut() += 1;
                tracker.node_counts.borrow_mut().push(ctrl.graph().borrow().len());
            }
        });

        Self { ctrl, tracker }
    }

    /// Create nodes by clicking on empty canvas at each position.
    pub fn with_nodes(positions: &[(i32, i32)]) -> Self {
        let harness = Self::new();
        for &(x, y) in positions {
            harness.click(x, y);
        }
        harness.tracker.clear();
        harness
    }

    // === Pointer helpers ===

    pub fn primary_down(&self, x: i32, y: i32) {
        (self.ctrl.primary_down_callback())(x as f32, y as f32);
    }

    pub fn primary_up(&self, x: i32, y: i32) {
        (self.ctrl.primary_up_callback())(x as f32, y as f32);
    }

    pub fn secondary_down(&self, x: i32, y: i32) {
        (self.ctrl.secondary_down_callback())(x as f32, y as f32);
    }

    pub fn secondary_up(&self, x: i32, y: i32) {
        (self.ctrl.secondary_up_callback())(x as f32, y as f32);
    }

    pub fn move_to(&self, x: i32, y: i32) {
        (self.ctrl.pointer_moved_callback())(x as f32, y as f32);
    }

    pub fn capture_lost(&self) {
        (self.ctrl.capture_lost_callback())();
    }

    /// Primary press and release without moving.
    pub fn click(&self, x: i32, y: i32) {
        self.primary_down(x, y);
        self.primary_up(x, y);
    }

    /// Primary press on `from`, move in steps to `to`, release.
    pub fn drag(&self, from: (i32, i32), to: (i32, i32)) {
        self.primary_down(from.0, from.1);
        for (x, y) in steps(from, to) {
            self.move_to(x, y);
        }
        self.primary_up(to.0, to.1);
    }

    /// Secondary press and release without moving.
    pub fn secondary_click(&self, x: i32, y: i32) {
        self.secondary_down(x, y);
        self.secondary_up(x, y);
    }

    /// Secondary press on `from`, move in steps to `to`, release.
    pub fn connect(&self, from: (i32, i32), to: (i32, i32)) {
        self.secondary_down(from.0, from.1);
        for (x, y) in steps(from, to) {
            self.move_to(x, y);
        }
        self.secondary_up(to.0, to.1);
    }

    // === Inspection ===

    pub fn node_count(&self) -> usize {
        self.ctrl.graph().borrow().len()
    }

    pub fn edge_count(&self) -> usize {
        self.ctrl.graph().borrow().edge_count()
    }

    pub fn positions(&self) -> Vec<Point> {
        self.ctrl.graph().borrow().nodes().iter().map(|n| n.position()).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.ctrl.graph().borrow().nodes().iter().map(|n| n.label().to_string()).collect()
    }

    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.ctrl.graph().borrow().edges().collect()
    }

    pub fn has_edge(&self, source: u32, target: u32) -> bool {
        self.ctrl.graph().borrow().contains_edge(NodeId(source), NodeId(target))
    }

    pub fn hover(&self) -> Hover {
        self.ctrl.graph().borrow().hover()
    }

    pub fn state(&self) -> InteractionState {
        self.ctrl.interaction_state()
    }

    pub fn render(&self) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        self.ctrl.render(&mut surface);
        surface
    }
}

/// Four evenly spaced intermediate pointer positions ending at `to`.
fn steps(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    (1..=4)
        .map(|i| (from.0 + (to.0 - from.0) * i / 4, from.1 + (to.1 - from.1) * i / 4))
        .collect()
}
