//! # Slint Graph Editor Library
//!
//! The core of a minimal interactive editor for directed graphs on a 2D
//! canvas. Nodes are numbered circles, edges are straight arrows ending in a
//! small dot, and everything is edited with two pointer buttons.
//!
//! ## Features
//!
//! - **Arena Graph** - Nodes addressed by stable [`NodeId`]s, adjacency stored per node
//! - **Edge Validation** - No self-loops, no duplicates, no anti-parallel pairs
//! - **Hover Tracking** - One highlighted node or edge, recomputed on pointer move
//! - **Pointer State Machine** - Create, move, delete and connect with two buttons
//! - **Backend-Neutral Rendering** - Drawing goes through the [`RenderSurface`] trait
//!
//! ## Quick Start
//!
//! ```ignore
//! use slint_graph_editor::GraphEditorController;
//!
//! let ctrl = GraphEditorController::new();
//! window.on_primary_down(ctrl.primary_down_callback());
//! window.on_secondary_down(ctrl.secondary_down_callback());
//! window.on_pointer_moved(ctrl.pointer_moved_callback());
//!
//! let scene = ctrl.scene();
//! for group in scene.groups() {
//!     println!("{:?}: {}", group.role, group.commands);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Points, distances, segment proximity and circle trimming
//! - [`graph`] - [`Graph`] with node/edge mutation and hover tracking
//! - [`controller`] - [`GraphEditorController`] pointer state machine
//! - [`render`] - [`RenderSurface`] and the [`render_scene`] draw pass
//! - [`scene`] - [`SvgScene`], a surface producing SVG path commands for Slint
//! - [`hit_test`] - Generic node and edge picking
//!
//! See `demos/graph-editor` for a complete window wired to the controller.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod graph;
pub mod node;
pub mod path;
pub mod render;
pub mod scene;

pub use config::{EditorConfig, RenderStyle};
pub use controller::{GraphEditorController, InteractionState};
pub use geometry::{circle_segment_trim, point_near_segment, squared_distance, Point};
pub use graph::{EdgeRejection, Graph, Hover};
pub use hit_test::{
    find_edge_at, find_node_at, EdgeGeometry, NodeGeometry, SimpleEdgeGeometry,
    SimpleNodeGeometry,
};
pub use node::{Node, NodeId};
pub use path::{generate_circle_path, generate_edge_path, generate_line_path};
pub use render::{render_scene, EdgePreview, RenderSurface};
pub use scene::{NodeLabel, PathGroup, PathRole, SvgScene};
