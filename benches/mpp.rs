use criterion::{criterion_group, criterion_main, Criterion};
use horizon::{EdgeId, GraphPosition, HorizonTree, HorizonUpdate, RawEdge};
use horizon_fixtures::{fixture_path, MOTORWAY_EXIT};
use std::fs::File;
use std::hint::black_box;
use std::io::BufReader;

struct TreeScenario {
    name: &'static str,
    depth: EdgeId,
}

const TREE_CASES: [TreeScenario; 2] = [
    TreeScenario {
        name: "SHALLOW",
        depth: 1_000,
    },
    TreeScenario {
        name: "DEEP",
        depth: 250_000,
    },
];

/// A level-0 spine where every edge also has a short level-1 detour.
fn spine_with_detours(depth: EdgeId) -> HorizonTree {
    let spine = (0..depth).map(|id| {
        let parent = (id > 0).then(|| id - 1);
        RawEdge::new(id, parent, 0).with_probability(0.9)
    });

    let detours =
        (1..depth).map(|id| RawEdge::new(depth + id, Some(id - 1), 1).with_probability(0.1));

    HorizonTree::from_records(spine.chain(detours)).expect("Tree must build")
}

fn traversal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    group.significance_level(0.1).sample_size(30);

    TREE_CASES.into_iter().for_each(|sc| {
        let tree = spine_with_detours(sc.depth);
        let tip = GraphPosition::at_start(sc.depth - 1);

        group.bench_function(format!("current: {}", sc.name), |b| {
            b.iter(|| {
                let edge = tree.current(black_box(&tip)).expect("Tip must resolve");
                assert_eq!(edge.id, sc.depth - 1);
            })
        });

        group.bench_function(format!("mpp: {}", sc.name), |b| {
            b.iter(|| {
                let paths = tree.mpp();
                assert_eq!(paths[0].len(), sc.depth as usize);
            })
        });
    });

    group.finish();
}

fn ingestion_benchmark(c: &mut Criterion) {
    let path = fixture_path(MOTORWAY_EXIT);

    c.bench_function("build: MOTORWAY_EXIT", |b| {
        b.iter(|| {
            let file = File::open(&path).expect("Fixture must exist");
            let update =
                HorizonUpdate::from_reader(BufReader::new(file)).expect("Fixture must decode");
            HorizonTree::from_records(update.edges).expect("Tree must build")
        })
    });
}

criterion_group!(benches, traversal_benchmark, ingestion_benchmark);
criterion_main!(benches);
