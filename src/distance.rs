/// Squared Euclidean distance between two points.
///
/// All radius checks in this crate compare against `radius * radius`, so the
/// square root is never taken on the query path.
#[must_use]
pub fn squared_euclidean<const K: usize>(a: &[f64; K], b: &[f64; K]) -> f64 {
    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        sum += (x - y).powi(2);
    }
    sum
}

#[must_use]
pub fn euclidean<const K: usize>(a: &[f64; K], b: &[f64; K]) -> f64 {
    squared_euclidean(a, b).sqrt()
}
