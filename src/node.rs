use crate::geometry::Point;
use crate::graph::EdgeRejection;
use std::fmt;

/// Stable handle to a node in a [`Graph`](crate::Graph).
///
/// Ids come from the graph's label counter and are never reused, so a stale id
/// simply stops resolving once its node is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph vertex: position, display label and outgoing adjacency list.
///
/// `outgoing` never contains the node itself or a duplicate entry; its order is
/// insertion order, which is also the draw order of the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    position: Point,
    label: String,
    outgoing: Vec<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, position: Point, label: impl Into<String>) -> Self {
        Self {
            id,
            position,
            label: label.into(),
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Targets of this node's edges, in insertion order.
    pub fn outgoing(&self) -> &[NodeId] {
        &self.outgoing
    }

    /// Whether an edge `self -> target` exists.
    pub fn links_to(&self, target: NodeId) -> bool {
        self.outgoing.contains(&target)
    }

    /// Append an edge to `other`, reporting why it was refused.
    ///
    /// Refused when `other` is this node, when the edge already exists, or when
    /// `other` already has an edge back to this node.
    pub fn try_add_outgoing(&mut self, other: &Node) -> Result<(), EdgeRejection> {
        if other.id == self.id {
            return Err(EdgeRejection::SelfLoop);
        }
        if self.links_to(other.id) {
            return Err(EdgeRejection::Duplicate);
        }
        if other.links_to(self.id) {
            return Err(EdgeRejection::AntiParallel);
        }
        self.outgoing.push(other.id);
        Ok(())
    }

    /// Append an edge to `other`. Returns `false` without changes if refused.
    pub fn add_outgoing(&mut self, other: &Node) -> bool {
        self.try_add_outgoing(other).is_ok()
    }

    /// Remove the edge to `target` if present. Returns whether anything was removed.
    pub fn remove_outgoing(&mut self, target: NodeId) -> bool {
        match self.outgoing.iter().position(|&id| id == target) {
            Some(index) => {
                self.outgoing.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `point` is strictly inside the attraction radius around this node.
    pub fn hit_test(&self, point: Point, attraction_radius: i32) -> bool {
        let r = i64::from(attraction_radius);
        self.position.squared_distance_to(point) < r * r
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
