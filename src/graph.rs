use crate::config::EditorConfig;
use crate::geometry::Point;
use crate::hit_test::{find_edge_at, find_node_at, SimpleEdgeGeometry};
use crate::node::{Node, NodeId};
use thiserror::Error;
use tracing::{debug, trace};

/// Reasons why an edge insertion was refused.
///
/// Refusals are an expected outcome of user input: the edge simply does not
/// appear. Callers that only care about success use [`Graph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeRejection {
    /// Source and target are the same node
    #[error("cannot link a node to itself")]
    SelfLoop,
    /// The same directed edge already exists
    #[error("edge already exists")]
    Duplicate,
    /// The reverse edge already exists
    #[error("edge already exists in the opposite direction")]
    AntiParallel,
    /// One of the endpoints is not in the graph
    #[error("node {0} not found")]
    UnknownNode(NodeId),
}

/// What the pointer is currently highlighting.
///
/// An edge hover names both endpoints, so an edge target can never be hovered
/// without its source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Hover {
    #[default]
    None,
    Node(NodeId),
    Edge { source: NodeId, target: NodeId },
}

impl Hover {
    /// The hovered node, or the source of the hovered edge.
    pub fn node(&self) -> Option<NodeId> {
        match *self {
            Hover::None => None,
            Hover::Node(id) => Some(id),
            Hover::Edge { source, .. } => Some(source),
        }
    }

    /// The target of the hovered edge, if an edge is hovered.
    pub fn edge_target(&self) -> Option<NodeId> {
        match *self {
            Hover::Edge { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Hover::None)
    }

    /// Whether `id` should be drawn with the node highlight.
    pub fn highlights_node(&self, id: NodeId) -> bool {
        *self == Hover::Node(id)
    }

    /// Whether `source -> target` should be drawn with the edge highlight.
    pub fn highlights_edge(&self, source: NodeId, target: NodeId) -> bool {
        *self == Hover::Edge { source, target }
    }

    fn refers_to(&self, id: NodeId) -> bool {
        self.node() == Some(id) || self.edge_target() == Some(id)
    }
}

/// The editable graph: node arena, label counter and hover state.
///
/// Node order is insertion order. It decides z-order when drawing (later nodes
/// on top) and priority when hit testing (earlier nodes win).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    label_counter: u32,
    hover: Hover,
    config: EditorConfig,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }

    // === Queries ===

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes created so far, including deleted ones.
    pub fn label_counter(&self) -> u32 {
        self.label_counter
    }

    /// All edges as `(source, target)` in draw order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes
            .iter()
            .flat_map(|node| node.outgoing().iter().map(move |&target| (node.id(), target)))
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.outgoing().len()).sum()
    }

    pub fn contains_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.node(source).is_some_and(|node| node.links_to(target))
    }

    /// Resolved edge segments in draw order, for hit testing and rendering.
    pub fn edge_geometries(&self) -> impl Iterator<Item = SimpleEdgeGeometry> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.outgoing().iter().filter_map(move |&target| {
                let end = self.node(target)?.position();
                Some(SimpleEdgeGeometry {
                    source: node.id(),
                    target,
                    start: node.position(),
                    end,
                })
            })
        })
    }

    /// First node, in insertion order, whose attraction zone contains `point`.
    pub fn vertex_at(&self, point: Point) -> Option<NodeId> {
        find_node_at(point, &self.nodes, self.config.attraction_radius)
    }

    /// First edge, in draw order, passing near `point`.
    pub fn edge_at(&self, point: Point) -> Option<(NodeId, NodeId)> {
        find_edge_at(point, self.edge_geometries(), self.config.edge_tolerance)
    }

    // === Mutations ===

    /// Create a node at `point`, labelled with the next counter value.
    pub fn add_node(&mut self, point: Point) -> NodeId {
        self.label_counter += 1;
        let id = NodeId(self.label_counter);
        self.nodes.push(Node::new(id, point, self.label_counter.to_string()));
        debug!(node = %id, x = point.x, y = point.y, "node added");
        id
    }

    /// Insert `source -> target`, reporting why it was refused.
    pub fn try_add_edge(&mut self, source: NodeId, target: NodeId) -> Result<(), EdgeRejection> {
        let source_index = self.index_of(source).ok_or(EdgeRejection::UnknownNode(source))?;
        let target_index = self.index_of(target).ok_or(EdgeRejection::UnknownNode(target))?;
        if source_index == target_index {
            return Err(EdgeRejection::SelfLoop);
        }

        let (source_node, target_node) = self.pair_mut(source_index, target_index);
        source_node.try_add_outgoing(target_node)?;
        debug!(%source, %target, "edge added");
        Ok(())
    }

    /// Insert `source -> target`. Returns `false` if the edge was refused.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        match self.try_add_edge(source, target) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%source, %target, %reason, "edge rejected");
                false
            }
        }
    }

    /// Remove a node and every edge pointing at it.
    ///
    /// Clears the hover state if it referred to the node. Returns `false` if
    /// the node was not in the graph.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.nodes.remove(index);
        for node in &mut self.nodes {
            node.remove_outgoing(id);
        }
        if self.hover.refers_to(id) {
            self.hover = Hover::None;
        }
        debug!(node = %id, "node deleted");
        true
    }

    /// Remove `source -> target` if present.
    pub fn delete_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        let removed = self
            .nodes
            .iter_mut()
            .find(|node| node.id() == source)
            .is_some_and(|node| node.remove_outgoing(target));
        if removed {
            if self.hover.highlights_edge(source, target) {
                self.hover = Hover::None;
            }
            debug!(%source, %target, "edge deleted");
        }
        removed
    }

    /// Place a node at `point`. No overlap checks are made.
    pub fn move_node(&mut self, id: NodeId, point: Point) {
        if let Some(node) = self.nodes.iter_mut().find(|node| node.id() == id) {
            node.set_position(point);
        }
    }

    // === Hover ===

    pub fn hover(&self) -> Hover {
        self.hover
    }

    pub fn hover_node(&self) -> Option<NodeId> {
        self.hover.node()
    }

    pub fn hover_edge_target(&self) -> Option<NodeId> {
        self.hover.edge_target()
    }

    /// Recompute what the pointer at `point` highlights.
    ///
    /// Returns whether the hover state changed. Nodes take priority over
    /// edges; staying inside the currently hovered node is not a change.
    pub fn update_hover(&mut self, point: Point) -> bool {
        let radius = self.config.attraction_radius;

        if let Hover::Node(id) = self.hover {
            if self.node(id).is_some_and(|node| node.hit_test(point, radius)) {
                return false;
            }
        }

        let next = if let Some(id) = self.vertex_at(point) {
            Hover::Node(id)
        } else if let Some((source, target)) = self.edge_at(point) {
            let next = Hover::Edge { source, target };
            if next == self.hover {
                return false;
            }
            next
        } else if self.hover.is_none() {
            return false;
        } else {
            Hover::None
        };

        trace!(hover = ?next, "hover changed");
        self.hover = next;
        true
    }

    // === Internals ===

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    /// Borrow one node mutably and another immutably. `a` and `b` must differ.
    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Node, &Node) {
        if a < b {
            let (left, right) = self.nodes.split_at_mut(b);
            (&mut left[a], &right[0])
        } else {
            let (left, right) = self.nodes.split_at_mut(a);
            (&mut right[0], &left[b])
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
