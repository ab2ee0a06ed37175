use glam::DVec2;

use super::NodeId;
use super::QuadNode;
use super::QuadTree;
use crate::extent::Extent;

impl QuadTree {
    /// The leaf cells whose extent overlaps `query`, collected by descending
    /// the tree and pruning subtrees that cannot intersect it.
    pub fn leaves_in_box<'a>(&'a self, query: &Extent) -> Vec<&'a QuadNode> {
        let mut leaves = vec![];
        self.collect_leaves_in_box(self.root(), query, &mut leaves);
        leaves
    }

    fn collect_leaves_in_box<'a>(
        &'a self,
        id: NodeId,
        query: &Extent,
        leaves: &mut Vec<&'a QuadNode>,
    ) {
        let node = &self.nodes[id];
        if !node.extent().overlaps(query) {
            return;
        }
        match node.children() {
            Some(child_ids) => {
                for child_id in child_ids {
                    self.collect_leaves_in_box(child_id, query, leaves);
                }
            }
            None => leaves.push(node),
        }
    }

    /// The leaf cells whose extent intersects the disc around `center`.
    pub fn leaves_in_radius(&self, center: DVec2, radius: f64) -> Vec<&QuadNode> {
        let mut leaves = vec![];
        self.collect_leaves_in_radius(self.root(), center, radius * radius, &mut leaves);
        leaves
    }

    fn collect_leaves_in_radius<'a>(
        &'a self,
        id: NodeId,
        center: DVec2,
        radius_squared: f64,
        leaves: &mut Vec<&'a QuadNode>,
    ) {
        let node = &self.nodes[id];
        if node.extent().distance_squared_to(center) > radius_squared {
            return;
        }
        match node.children() {
            Some(child_ids) => {
                for child_id in child_ids {
                    self.collect_leaves_in_radius(child_id, center, radius_squared, leaves);
                }
            }
            None => leaves.push(node),
        }
    }
}
