//! Randomized checks of the layout invariants of the Yale sparse matrix.
//!
//! Each test drives the matrix with random writes and then verifies the
//! packed arrays directly: sorted columns per row, consistent row offsets,
//! and reads that agree with a plain map of the writes.

use std::collections::HashMap;

use rand::Rng;
use yale_sparse::YaleSparseMatrix;

/// Random writes into a `rows x cols` window, recorded in a map as well.
fn random_writes(rows: usize, cols: usize, count: usize) -> (YaleSparseMatrix<u32>, HashMap<(usize, usize), u32>) {
    let mut rng = rand::thread_rng();
    let mut m = YaleSparseMatrix::new(0);
    let mut expected = HashMap::new();
    for _ in 0..count {
        let r = rng.gen_range(0..rows);
        let c = rng.gen_range(0..cols);
        let v = rng.gen_range(1..1000);
        assert_eq!(*m.set(r, c, v), v);
        expected.insert((r, c), v);
    }
    (m, expected)
}

/// Check sortedness and offset consistency of the packed arrays.
fn assert_layout<T>(m: &YaleSparseMatrix<T>) {
    let offsets = m.row_offsets();
    assert_eq!(offsets[0], 0);
    assert_eq!(offsets.len(), m.row_count() + 1);
    assert_eq!(offsets[m.row_count()], m.nonzero_count());
    assert_eq!(m.values().len(), m.nonzero_count());
    assert_eq!(m.columns().len(), m.nonzero_count());
    for w in offsets.windows(2) {
        assert!(w[0] <= w[1], "offsets decrease: {:?}", offsets);
        let row = &m.columns()[w[0]..w[1]];
        assert!(row.windows(2).all(|p| p[0] < p[1]), "unsorted row columns: {:?}", row);
    }
}

#[test]
fn round_trip_matches_map() {
    let (m, expected) = random_writes(64, 64, 500);
    assert_layout(&m);
    assert_eq!(m.nonzero_count(), expected.len());
    for r in 0..70 {
        for c in 0..70 {
            let want = expected.get(&(r, c)).copied().unwrap_or(0);
            assert_eq!(*m.get(r, c), want, "cell ({r}, {c})");
        }
    }
}

#[test]
fn overwrite_is_idempotent() {
    let (mut m, expected) = random_writes(16, 16, 60);
    let ((r, c), v) = expected.iter().next().map(|(k, v)| (*k, *v)).unwrap();
    m.set(r, c, v);
    let once = m.clone();
    m.set(r, c, v);
    assert_eq!(m.values(), once.values());
    assert_eq!(m.row_offsets(), once.row_offsets());
    assert_eq!(m.columns(), once.columns());
}

#[test]
fn growth_preserves_existing_cells() {
    let (mut m, expected) = random_writes(8, 8, 30);
    let rows = m.row_count();
    m.set(rows + 50, 3, 7);
    assert_layout(&m);
    assert_eq!(m.row_count(), rows + 51);
    for (&(r, c), &v) in &expected {
        assert_eq!(*m.get(r, c), v);
    }
    for r in rows..rows + 50 {
        assert_eq!(m.row(r).count(), 0);
    }
}

#[test]
fn equal_writes_give_equal_matrices() {
    let mut rng = rand::thread_rng();
    let mut a = YaleSparseMatrix::new(0);
    let mut b = YaleSparseMatrix::new(0);
    for _ in 0..100 {
        let r = rng.gen_range(0..1024);
        let c = rng.gen_range(0..1024);
        let v = rng.gen_range(0..1024);
        a.set(r, c, v);
        b.set(r, c, v);
    }
    assert_eq!(a.values(), b.values());
    assert_eq!(a.row_offsets(), b.row_offsets());
    assert_eq!(a.columns(), b.columns());
    assert_eq!(a.nonzero_count(), b.nonzero_count());
    assert_eq!(a, b);
}

#[test]
fn random_sparse_saves_memory() {
    let (height, width) = (1 << 10, 1 << 10);
    let mut rng = rand::thread_rng();
    let mut m = YaleSparseMatrix::new(None);
    for _ in 0..(1 << 10) {
        let r = rng.gen_range(0..height);
        let c = rng.gen_range(0..width);
        m.set(r, c, Some(rng.r#gen::<f64>()));
    }
    assert_layout(&m);
    assert!(m.is_efficient());
    assert!(!m.contains(&None));
}

#[test]
fn indexed_traversal_agrees_with_get() {
    let (m, _) = random_writes(20, 20, 80);
    let triples: Vec<_> = m.indexed_iter(false).collect();
    assert_eq!(triples.len(), m.nonzero_count());
    for (v, r, c) in triples {
        assert_eq!(m.get(r, c), v);
    }
    let dense = m.indexed_iter(true);
    assert_eq!(dense.len(), m.row_count() * m.column_count());
    for (v, r, c) in dense {
        assert_eq!(m.get(r, c), v);
    }
}

#[test]
fn huge_column_indices_are_accepted() {
    let (mut m, expected) = random_writes(4, 16, 20);
    let far = 1usize << 62;
    m.set(2, far, 7);
    assert_layout(&m);
    assert_eq!(m.column_count(), far + 1);
    assert_eq!(*m.get(2, far), 7);
    for (&(r, c), &v) in &expected {
        assert_eq!(*m.get(r, c), v);
    }
    assert!(m.density().is_finite() && m.density() > 0.0);
    assert!(m.is_efficient());

    m.set(0, usize::MAX, 3);
    assert_layout(&m);
    assert_eq!(m.column_count(), usize::MAX);
    assert!(m.density().is_finite());
    assert!(m.is_efficient());
    assert_eq!(m.values_iter(true).len(), usize::MAX);
}
