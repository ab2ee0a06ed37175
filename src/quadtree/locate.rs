use glam::DVec2;

use super::NodeId;
use super::QuadTree;

impl QuadTree {
    /// The leaf cell containing `pos`, found by descending from the root
    /// through [`quadrant_of`](crate::extent::Extent::quadrant_of) while the
    /// current node is subdivided. `None` iff `pos` lies outside the root
    /// extent; points on cell boundaries follow the midpoint tie-break
    /// toward the higher-index quadrant.
    pub fn locate(&self, pos: DVec2) -> Option<NodeId> {
        let mut current = self.root();
        loop {
            let node = self.get(current)?;
            match node.children() {
                None => return node.extent().contains(pos).then_some(current),
                Some(child_ids) => {
                    let quadrant = node.extent().quadrant_of(pos)?;
                    current = child_ids[quadrant.index()];
                }
            }
        }
    }

    /// The node at exactly `level` containing `pos`, or `None` if `pos` is
    /// outside the domain or the containing subtree is not refined that far.
    pub fn node_at_level(&self, pos: DVec2, level: u32) -> Option<NodeId> {
        let mut current = self.root();
        loop {
            let node = self.get(current)?;
            if !node.extent().contains(pos) {
                return None;
            }
            if node.level() == level {
                return Some(current);
            }
            let child_ids = node.children()?;
            let quadrant = node.extent().quadrant_of(pos)?;
            current = child_ids[quadrant.index()];
        }
    }
}
