use glam::DVec2;
use log::debug;

use super::NodeId;
use super::QuadNode;
use super::QuadTree;

impl QuadTree {
    /// Populate every node's neighbor list with the same-level nodes sharing
    /// an edge with it, probing one side length outward from the cell center
    /// in the order left, right, down, up.
    ///
    /// Links cross subtree boundaries. Cells on the domain edge, and cells
    /// whose adjacent region is not refined to the same level, get fewer
    /// than four neighbors.
    pub fn link_same_level_neighbors(&mut self) {
        let mut links: Vec<(NodeId, Vec<NodeId>)> = Vec::with_capacity(self.len());
        for (id, node) in self.iter() {
            let center = node.extent().center();
            let side_lengths = node.extent().side_lengths();
            let offsets = [
                DVec2::new(-side_lengths.x, 0.0),
                DVec2::new(side_lengths.x, 0.0),
                DVec2::new(0.0, -side_lengths.y),
                DVec2::new(0.0, side_lengths.y),
            ];
            let neighbors = offsets
                .iter()
                .filter_map(|offset| self.node_at_level(center + *offset, node.level()))
                .collect();
            links.push((id, neighbors));
        }
        let num_links: usize = links.iter().map(|(_, neighbors)| neighbors.len()).sum();
        for (id, neighbors) in links {
            self.nodes[id].set_neighbors(neighbors);
        }
        debug!(
            "linked {} neighbor references across {} nodes",
            num_links,
            self.len()
        );
    }

    /// Resolve the neighbor list of `id` against the node table, skipping
    /// entries whose target has since been destroyed. Traversal stays safe
    /// after arbitrary coarsening; stale entries are simply absent from the
    /// result.
    pub fn live_neighbors(&self, id: NodeId) -> Vec<&QuadNode> {
        match self.get(id) {
            Some(node) => node
                .neighbor_ids()
                .iter()
                .filter_map(|neighbor| self.get(*neighbor))
                .collect(),
            None => vec![],
        }
    }
}
