//! Pointer-driven editing controller.
//!
//! The [`GraphEditorController`] turns raw pointer events into graph edits:
//!
//! | Gesture | Effect |
//! |---|---|
//! | primary click on empty canvas | create a node |
//! | primary drag from a node | move the node |
//! | secondary click on a node | delete the node and its edges |
//! | secondary click on an edge | delete the edge |
//! | secondary drag from a node to a node | create an edge |
//! | pointer move with no button held | update hover highlight |
//!
//! A press on a node captures the pointer for that button. It only becomes a
//! drag once the pointer has moved more than the drag threshold away from the
//! node. Presses while a capture is active are ignored, as are releases of a
//! button that does not own the capture.
//!
//! # Example
//!
//! ```ignore
//! use slint_graph_editor::GraphEditorController;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = GraphEditorController::new();
//!     let w = window.as_weak();
//!
//!     window.on_primary_down(ctrl.primary_down_callback());
//!     window.on_primary_up(ctrl.primary_up_callback());
//!     window.on_secondary_down(ctrl.secondary_down_callback());
//!     window.on_secondary_up(ctrl.secondary_up_callback());
//!     window.on_pointer_moved(ctrl.pointer_moved_callback());
//!
//!     ctrl.set_redraw_handler(move || {
//!         if let Some(w) = w.upgrade() {
//!             w.invoke_refresh();
//!         }
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::config::{EditorConfig, RenderStyle};
use crate::geometry::Point;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::render::{render_scene, EdgePreview, RenderSurface};
use crate::scene::SvgScene;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// Which button, if any, currently owns the pointer capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Primary button held on a node: moving it
    CapturedPrimary,
    /// Secondary button held on a node: delete on click, new edge on drag
    CapturedSecondary,
}

#[derive(Debug, Clone, Copy, Default)]
struct Session {
    state: InteractionState,
    anchor: Option<NodeId>,
    dragging: bool,
    pointer: Point,
}

type RedrawHandler = Rc<dyn Fn()>;

/// Controller that owns the graph and interprets pointer input.
///
/// Clone this controller to share it across callbacks; clones share the
/// same graph and interaction session.
#[derive(Clone)]
pub struct GraphEditorController {
    graph: Rc<RefCell<Graph>>,
    session: Rc<RefCell<Session>>,
    style: Rc<RefCell<RenderStyle>>,
    redraw: Rc<RefCell<Option<RedrawHandler>>>,
}

impl Default for GraphEditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphEditorController {
    /// Create a controller with an empty graph and default settings.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            graph: Rc::new(RefCell::new(Graph::with_config(config))),
            session: Rc::new(RefCell::new(Session::default())),
            style: Rc::new(RefCell::new(RenderStyle::default())),
            redraw: Rc::new(RefCell::new(None)),
        }
    }

    /// Get access to the graph.
    pub fn graph(&self) -> Rc<RefCell<Graph>> {
        self.graph.clone()
    }

    pub fn config(&self) -> EditorConfig {
        *self.graph.borrow().config()
    }

    /// Replace the input tolerances.
    pub fn set_config(&self, config: EditorConfig) {
        self.graph.borrow_mut().set_config(config);
    }

    pub fn style(&self) -> RenderStyle {
        *self.style.borrow()
    }

    pub fn set_style(&self, style: RenderStyle) {
        *self.style.borrow_mut() = style;
    }

    /// Set the callback invoked whenever visible state changes.
    ///
    /// The handler runs after the controller has released its internal
    /// borrows, so it may call back into the controller (e.g. to render).
    pub fn set_redraw_handler<F>(&self, handler: F)
    where
        F: Fn() + 'static,
    {
        *self.redraw.borrow_mut() = Some(Rc::new(handler));
    }

    // === Session state ===

    pub fn interaction_state(&self) -> InteractionState {
        self.session.borrow().state
    }

    /// Node the current capture started on.
    pub fn anchor(&self) -> Option<NodeId> {
        let session = self.session.borrow();
        match session.state {
            InteractionState::Idle => None,
            _ => session.anchor,
        }
    }

    /// Whether the current capture has crossed the drag threshold.
    pub fn is_dragging(&self) -> bool {
        let session = self.session.borrow();
        session.state != InteractionState::Idle && session.dragging
    }

    /// The rubber-band line to draw while an edge is being dragged out.
    pub fn preview_edge(&self) -> Option<EdgePreview> {
        let session = *self.session.borrow();
        if session.state != InteractionState::CapturedSecondary || !session.dragging {
            return None;
        }
        let from = self.graph.borrow().node(session.anchor?)?.position();
        Some(EdgePreview {
            from,
            to: session.pointer,
        })
    }

    // === Pointer handlers ===

    /// Primary press: create a node on empty canvas, or capture to move a node.
    pub fn handle_primary_down(&self, point: Point) {
        if self.interaction_state() != InteractionState::Idle {
            return;
        }

        let anchor = self.graph.borrow().vertex_at(point);
        match anchor {
            None => {
                self.graph.borrow_mut().add_node(point);
                self.request_redraw();
            }
            Some(id) => {
                self.begin_capture(InteractionState::CapturedPrimary, id, point);
            }
        }
    }

    /// Primary release: end the move. The node already follows the pointer.
    pub fn handle_primary_up(&self, _point: Point) {
        if self.interaction_state() != InteractionState::CapturedPrimary {
            return;
        }
        self.end_capture();
        self.request_redraw();
    }

    /// Secondary press: capture on a node, or delete the edge under the pointer.
    pub fn handle_secondary_down(&self, point: Point) {
        if self.interaction_state() != InteractionState::Idle {
            return;
        }

        let anchor = self.graph.borrow().vertex_at(point);
        if let Some(id) = anchor {
            self.begin_capture(InteractionState::CapturedSecondary, id, point);
            self.request_redraw();
            return;
        }

        let edge = self.graph.borrow().edge_at(point);
        if let Some((source, target)) = edge {
            self.graph.borrow_mut().delete_edge(source, target);
            self.request_redraw();
        }
    }

    /// Secondary release: connect to the node under the pointer after a drag,
    /// or delete the anchor node after a plain click.
    pub fn handle_secondary_up(&self, point: Point) {
        if self.interaction_state() != InteractionState::CapturedSecondary {
            return;
        }
        let session = self.end_capture();

        if let Some(anchor) = session.anchor {
            let mut graph = self.graph.borrow_mut();
            if session.dragging {
                if let Some(target) = graph.vertex_at(point) {
                    graph.add_edge(anchor, target);
                }
            } else {
                graph.delete_node(anchor);
            }
        }
        self.request_redraw();
    }

    /// Pointer move: drag handling while captured, hover tracking otherwise.
    pub fn handle_pointer_move(&self, point: Point) {
        let state = self.interaction_state();
        if state == InteractionState::Idle {
            let changed = self.graph.borrow_mut().update_hover(point);
            if changed {
                self.request_redraw();
            }
            return;
        }

        {
            let mut session = self.session.borrow_mut();
            let Some(anchor) = session.anchor else {
                return;
            };
            session.pointer = point;

            let mut graph = self.graph.borrow_mut();
            if !session.dragging {
                let threshold = i64::from(graph.config().drag_threshold);
                let crossed = graph
                    .node(anchor)
                    .is_some_and(|node| node.position().squared_distance_to(point) > threshold * threshold);
                if crossed {
                    trace!(node = %anchor, "drag threshold crossed");
                    session.dragging = true;
                }
            }
            if session.dragging && state == InteractionState::CapturedPrimary {
                graph.move_node(anchor, point);
            }
        }
        self.request_redraw();
    }

    /// The pointer capture was taken by someone else (e.g. focus loss).
    ///
    /// Abandons the current gesture without applying it. Releases are ignored
    /// until a fresh press captures again.
    pub fn handle_capture_lost(&self) {
        if self.interaction_state() == InteractionState::Idle {
            return;
        }
        self.end_capture();
        self.request_redraw();
    }

    // === Rendering ===

    /// Draw the current graph, hover state and drag preview onto `surface`.
    pub fn render<S>(&self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let preview = self.preview_edge();
        let style = self.style();
        render_scene(&self.graph.borrow(), preview, &style, surface);
    }

    /// Render the current state into a fresh [`SvgScene`].
    pub fn scene(&self) -> SvgScene {
        let mut scene = SvgScene::new(self.style());
        self.render(&mut scene);
        scene
    }

    // === Callback factories ===

    /// Returns a callback for `primary-down(x, y)`.
    pub fn primary_down_callback(&self) -> impl Fn(f32, f32) + Clone {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_primary_down(Point::from_logical(x, y))
    }

    /// Returns a callback for `primary-up(x, y)`.
    pub fn primary_up_callback(&self) -> impl Fn(f32, f32) + Clone {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_primary_up(Point::from_logical(x, y))
    }

    /// Returns a callback for `secondary-down(x, y)`.
    pub fn secondary_down_callback(&self) -> impl Fn(f32, f32) + Clone {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_secondary_down(Point::from_logical(x, y))
    }

    /// Returns a callback for `secondary-up(x, y)`.
    pub fn secondary_up_callback(&self) -> impl Fn(f32, f32) + Clone {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_secondary_up(Point::from_logical(x, y))
    }

    /// Returns a callback for `pointer-moved(x, y)`.
    pub fn pointer_moved_callback(&self) -> impl Fn(f32, f32) + Clone {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_move(Point::from_logical(x, y))
    }

    /// Returns a callback for `capture-lost()`.
    pub fn capture_lost_callback(&self) -> impl Fn() + Clone {
        let ctrl = self.clone();
        move || ctrl.handle_capture_lost()
    }

    // === Internals ===

    fn begin_capture(&self, state: InteractionState, anchor: NodeId, point: Point) {
        debug!(?state, node = %anchor, "pointer captured");
        *self.session.borrow_mut() = Session {
            state,
            anchor: Some(anchor),
            dragging: false,
            pointer: point,
        };
    }

    /// Reset to idle, returning the session that just ended.
    fn end_capture(&self) -> Session {
        let session = std::mem::take(&mut *self.session.borrow_mut());
        debug!(state = ?session.state, dragging = session.dragging, "pointer released");
        session
    }

    fn request_redraw(&self) {
        let handler = self.redraw.borrow().clone();
        if let Some(handler) = handler {
            handler();
        }
    }
}
