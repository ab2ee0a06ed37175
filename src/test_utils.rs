use glam::DVec2;

use crate::config::TreeConfig;
use crate::extent::Extent;
use crate::quadtree::QuadTree;

pub fn assert_float_is_close(x: f64, y: f64) {
    assert!((x - y).abs() < 10.0 * f64::EPSILON, "{} {}", x, y)
}

pub fn assert_vec_is_close(x: DVec2, y: DVec2) {
    assert!((x - y).length() < 10.0 * f64::EPSILON, "{:?} {:?}", x, y)
}

/// A tree over the unit square uniformly refined to `depth`, with each cell
/// valued by its center's x coordinate.
pub fn uniform_tree(depth: u32) -> QuadTree {
    let extent = Extent::new(0.0, 1.0, 0.0, 1.0).unwrap();
    let mut tree = QuadTree::new(extent, 0.5);
    tree.refine_to_depth(&TreeConfig::default(), depth, |extent: &Extent| {
        extent.center().x
    })
    .unwrap();
    tree
}
