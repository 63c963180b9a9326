//! Level 4: Deletion Tests
//!
//! Tests removing nodes and edges with the secondary button.

mod common;

use common::harness::EditorHarness;
use slint_graph_editor::{InteractionState, NodeId, Point};

/// Triangle 1 -> 2 -> 3 -> 1
fn triangle() -> EditorHarness {
    let harness = EditorHarness::with_nodes(&[(100, 100), (200, 100), (150, 200)]);
    harness.connect((100, 100), (200, 100));
    harness.connect((200, 100), (150, 200));
    harness.connect((150, 200), (100, 100));
    harness.tracker.clear();
    harness
}

#[test]
fn test_secondary_click_deletes_node_and_its_edges() {
    let harness = triangle();

    harness.secondary_click(200, 100);

    assert_eq!(harness.labels(), vec!["1", "3"]);
    assert_eq!(harness.edges(), vec![(NodeId(3), NodeId(1))]);
    assert_eq!(harness.state(), InteractionState::Idle);
}

#[test]
fn test_node_deleted_on_release_not_press() {
    let harness = triangle();

    harness.secondary_down(200, 100);
    assert_eq!(harness.node_count(), 3);
    assert_eq!(harness.state(), InteractionState::CapturedSecondary);

    harness.secondary_up(200, 100);
    assert_eq!(harness.node_count(), 2);
}

#[test]
fn test_small_wiggle_still_deletes() {
    let harness = triangle();

    harness.secondary_down(200, 100);
    harness.move_to(202, 101);
    harness.secondary_up(202, 101);

    assert_eq!(harness.node_count(), 2);
}

#[test]
fn test_secondary_click_on_edge_deletes_only_that_edge() {
    let harness = triangle();

    harness.secondary_down(150, 100);

    assert_eq!(harness.edges(), vec![(NodeId(2), NodeId(3)), (NodeId(3), NodeId(1))]);
    assert_eq!(harness.node_count(), 3);
    assert_eq!(harness.state(), InteractionState::Idle);
    assert_eq!(harness.tracker.redraw_count(), 1);

    harness.secondary_up(150, 100);
    assert_eq!(harness.edge_count(), 2);
}

#[test]
fn test_secondary_click_on_empty_canvas_is_noop() {
    let harness = triangle();

    harness.secondary_click(400, 400);

    assert_eq!(harness.node_count(), 3);
    assert_eq!(harness.edge_count(), 3);
    assert_eq!(harness.tracker.redraw_count(), 0);
}

#[test]
fn test_node_takes_priority_over_edge() {
    let harness = EditorHarness::with_nodes(&[(100, 100), (300, 100), (200, 100)]);
    harness.connect((100, 100), (300, 100));

    // Node 3 sits on top of the edge 1 -> 2
    harness.secondary_click(200, 100);

    assert_eq!(harness.labels(), vec!["1", "2"]);
    assert!(harness.has_edge(1, 2));
}

#[test]
fn test_deleted_node_no_longer_hit() {
    let harness = triangle();

    harness.secondary_click(200, 100);

    let graph = harness.ctrl.graph();
    assert_eq!(graph.borrow().vertex_at(Point::new(200, 100)), None);
    assert_eq!(graph.borrow().node(NodeId(2)), None);
}

#[test]
fn test_delete_then_recreate_at_same_spot() {
    let harness = triangle();

    harness.secondary_click(200, 100);
    harness.click(200, 100);

    assert_eq!(harness.labels(), vec!["1", "3", "4"]);
    assert_eq!(harness.edges(), vec![(NodeId(3), NodeId(1))]);
}
