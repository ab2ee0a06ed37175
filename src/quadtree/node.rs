use std::fmt;

use glam::DVec2;

use super::arena::NodeId;
use crate::extent::Extent;
use crate::quadrant::Quadrant;

/// Child state of a node: either a leaf, or subdivided into four children
/// stored in quadrant order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Children {
    Leaf,
    Subdivided([NodeId; 4]),
}

/// One rectangular cell of the subdivided domain.
///
/// A node maps a tree position to a region of space and carries the scalar
/// value sampled for that region. Its extent is fixed for its lifetime.
/// Structural state (children, neighbors, refinement bookkeeping) is mutated
/// only through the owning [`QuadTree`](super::QuadTree).
#[derive(Clone, Debug)]
pub struct QuadNode {
    pub(crate) extent: Extent,
    /// Scalar field value of the cell. What it means is up to the caller:
    /// a sampled function value, a density, a label.
    pub value: f64,
    pub(crate) id: u64,
    pub(crate) level: u32,
    pub(crate) smallest_child_side_length: f64,
    pub(crate) children: Children,
    pub(crate) neighbors: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl QuadNode {
    /// A fresh leaf over `extent`. `id` uniqueness within a tree is the
    /// constructing caller's responsibility; the root is level 0 and each
    /// child one level below its parent.
    pub fn new(extent: Extent, value: f64, id: u64, level: u32) -> Self {
        let smallest_child_side_length = extent.side_length();
        Self {
            extent,
            value,
            id,
            level,
            smallest_child_side_length,
            children: Children::Leaf,
            neighbors: vec![],
            parent: None,
        }
    }

    /// Reconstruct a node whose refinement state is already known, e.g. when
    /// restoring a previously built tree. No consistency check is performed
    /// against the subtree attached later; keeping the two in sync is the
    /// caller's responsibility.
    pub fn with_refinement_state(
        extent: Extent,
        value: f64,
        id: u64,
        level: u32,
        smallest_child_side_length: f64,
    ) -> Self {
        Self {
            smallest_child_side_length,
            ..Self::new(extent, value, id, level)
        }
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Side length of the finest cell in this node's subtree, its own side
    /// length while it is a leaf. Kept up to date by the tree so refinement
    /// decisions never have to re-walk the subtree.
    pub fn smallest_child_side_length(&self) -> f64 {
        self.smallest_child_side_length
    }

    pub fn side_length(&self) -> f64 {
        self.extent.side_length()
    }

    pub fn has_children(&self) -> bool {
        matches!(self.children, Children::Subdivided(_))
    }

    pub fn children(&self) -> Option<[NodeId; 4]> {
        match self.children {
            Children::Subdivided(child_ids) => Some(child_ids),
            Children::Leaf => None,
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeId> {
        self.children().map(|child_ids| child_ids[quadrant.index()])
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The neighbor references stored on this node, in the order the linker
    /// supplied them. Entries may have gone stale since linking; resolve
    /// them through the tree.
    pub fn neighbor_ids(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Replace the neighbor list. Neighbor bookkeeping belongs to the
    /// linking pass; the node itself never derives neighbors.
    pub fn set_neighbors(&mut self, neighbors: Vec<NodeId>) {
        self.neighbors = neighbors;
    }

    /// The quadrant of this node containing `pos`, or `None` if `pos` is
    /// outside the node's extent.
    pub fn quadrant_of(&self, pos: DVec2) -> Option<Quadrant> {
        self.extent.quadrant_of(pos)
    }

    /// Whether this node's subtree already contains a cell at least as fine
    /// as `target_side_length`, without walking the subtree.
    pub fn is_resolved_below(&self, target_side_length: f64) -> bool {
        self.smallest_child_side_length <= target_side_length
    }
}

impl fmt::Display for QuadNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let child_slots = if self.has_children() { 4 } else { 0 };
        write!(
            f,
            "x: [{}, {}] | y: [{}, {}] | value: {} | has_children: {} | smallest_child_side_length: {} | children: {} | neighbors: {} | level: {} | id: {}",
            self.extent.min().x,
            self.extent.max().x,
            self.extent.min().y,
            self.extent.max().y,
            self.value,
            self.has_children(),
            self.smallest_child_side_length,
            child_slots,
            self.neighbors.len(),
            self.level,
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::QuadNode;
    use crate::extent::Extent;
    use crate::quadrant::Quadrant;
    use crate::test_utils::assert_float_is_close;

    fn extent() -> Extent {
        Extent::new(0.0, 8.0, 0.0, 8.0).unwrap()
    }

    #[test]
    fn fresh_node_is_a_leaf() {
        let node = QuadNode::new(extent(), 1.5, 3, 0);
        assert!(!node.has_children());
        assert!(node.children().is_none());
        assert!(node.neighbor_ids().is_empty());
        assert!(node.parent().is_none());
        assert_float_is_close(node.smallest_child_side_length(), 8.0);
        assert_eq!(node.id(), 3);
        assert_eq!(node.level(), 0);
    }

    #[test]
    fn refinement_state_constructor_keeps_supplied_length() {
        let node = QuadNode::with_refinement_state(extent(), 1.5, 3, 2, 0.25);
        assert_float_is_close(node.smallest_child_side_length(), 0.25);
        assert!(!node.has_children());
        assert!(node.is_resolved_below(0.5));
        assert!(!node.is_resolved_below(0.125));
    }

    #[test]
    fn quadrant_delegation() {
        let node = QuadNode::new(extent(), 0.0, 0, 0);
        assert_eq!(
            node.quadrant_of(DVec2::new(6.0, 2.0)),
            Some(Quadrant::LowerRight)
        );
        assert_eq!(node.quadrant_of(DVec2::new(9.0, 2.0)), None);
    }

    #[test]
    fn display_line_mentions_all_fields() {
        let node = QuadNode::new(extent(), 1.5, 3, 2);
        let line = node.to_string();
        assert!(line.contains("x: [0, 8]"));
        assert!(line.contains("y: [0, 8]"));
        assert!(line.contains("value: 1.5"));
        assert!(line.contains("has_children: false"));
        assert!(line.contains("smallest_child_side_length: 8"));
        assert!(line.contains("children: 0"));
        assert!(line.contains("neighbors: 0"));
        assert!(line.contains("level: 2"));
        assert!(line.contains("id: 3"));
    }
}
