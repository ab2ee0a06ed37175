use std::time::Duration;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use glam::DVec2;
use quadfield::config::TreeConfig;
use quadfield::extent::Extent;
use quadfield::quadtree::QuadTree;

fn get_tree(depth: u32) -> QuadTree {
    let extent = Extent::new(0.0, 1.0, 0.0, 1.0).unwrap();
    let mut tree = QuadTree::new(extent, 0.5);
    tree.refine_to_depth(&TreeConfig::default(), depth, |extent: &Extent| {
        extent.center().x
    })
    .unwrap();
    tree
}

fn tree_locate(tree: &QuadTree) {
    black_box(tree.locate(DVec2::new(0.4321, 0.8765)));
}

fn tree_radius_search(tree: &QuadTree) {
    black_box(tree.leaves_in_radius(DVec2::new(0.5, 0.5), 0.00001));
}

pub fn quadtree_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree");
    group
        .sample_size(500)
        .measurement_time(Duration::from_secs(5));
    for depth in 1..6 {
        let tree = get_tree(depth);
        group.bench_with_input(BenchmarkId::new("locate", depth), &tree, |b, tree| {
            b.iter(|| tree_locate(tree))
        });
        group.bench_with_input(
            BenchmarkId::new("radius_search", depth),
            &tree,
            |b, tree| b.iter(|| tree_radius_search(tree)),
        );
    }
    group.finish();
}

criterion_group!(benches, quadtree_benchmark);
criterion_main!(benches);
