use std::collections::HashSet;

use kdtree::{KdTree, LinearIndex, RangeIndex};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_point<const K: usize>(rng: &mut StdRng) -> [f64; K] {
    let mut point = [0.0; K];
    for x in &mut point {
        *x = rng.gen_range(-100.0..100.0);
    }
    point
}

/// Run random queries against `index` and a linear scan holding the same
/// points, requiring identical answers.
fn check_against_linear<const K: usize>(
    rng: &mut StdRng,
    index: &impl RangeIndex<K>,
    linear: &LinearIndex<K>,
) {
    let mut actual = Vec::new();
    let mut expected = Vec::new();
    for _ in 0..20 {
        let query = random_point(rng);
        let radius = rng.gen_range(0.0..40.0);

        actual.clear();
        expected.clear();
        index.in_range(&query, radius, &mut actual);
        linear.in_range(&query, radius, &mut expected);
        actual.sort_unstable();
        expected.sort_unstable();
        assert_eq!(expected, actual);
    }
}

#[test]
fn test_random_insert() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut tree = KdTree::<2>::new();
    let mut linear = LinearIndex::new();

    let num_ops = 1000;
    for i in 0..num_ops {
        let point = random_point(&mut rng);
        assert_eq!(tree.insert(point), linear.insert(point));
        if i % 50 == 0 {
            check_against_linear(&mut rng, &tree, &linear);
        }
    }
    assert_eq!(tree.num_points(), linear.num_points());
}

#[test]
fn test_random_build() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in [0, 1, 2, 3, 10, 100, 1000] {
        let points: Vec<[f64; 3]> = (0..n).map(|_| random_point(&mut rng)).collect();
        let tree = KdTree::build(points.clone());
        let linear = LinearIndex::from(points);
        check_against_linear(&mut rng, &tree, &linear);
    }
}

#[test]
fn test_random_build_with_ties() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in [5, 50, 500] {
        let points: Vec<[f64; 2]> = (0..n)
            .map(|_| [f64::from(rng.gen_range(-3..3)), f64::from(rng.gen_range(-3..3))])
            .collect();
        let tree = KdTree::build(points.clone());
        let linear = LinearIndex::from(points);
        check_against_linear(&mut rng, &tree, &linear);

        // Every input point is reachable exactly once from the whole space.
        let mut all = Vec::new();
        tree.in_range(&[0.0, 0.0], f64::INFINITY, &mut all);
        assert_eq!(all.len(), n);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), n);
    }
}

#[test]
fn test_buffer_reuse() {
    let mut rng = StdRng::seed_from_u64(3);
    let n = 1000;
    let tree: KdTree<2> = (0..n).map(|_| [rng.gen(), rng.gen()]).collect();

    let mut found = Vec::with_capacity(n);
    tree.in_range(&[0.0, 0.0], 0.25, &mut found);
    let small: HashSet<usize> = found.iter().copied().collect();
    assert!(!small.is_empty());

    // Reuse the buffer from the previous call.
    found.clear();
    tree.in_range(&[0.0, 0.0], 0.5, &mut found);
    let large: HashSet<usize> = found.iter().copied().collect();
    assert!(large.is_superset(&small));
    assert!(large.len() > small.len());

    // The same query on a cleared buffer gives the same answer.
    found.clear();
    tree.in_range(&[0.0, 0.0], 0.5, &mut found);
    assert_eq!(found.iter().copied().collect::<HashSet<_>>(), large);
}
