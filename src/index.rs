/// Common surface of the spatial indexes in this crate.
pub trait RangeIndex<const K: usize> {
    /// Add a point and return its slot id.
    fn insert(&mut self, point: [f64; K]) -> usize;

    /// Append the ids of all points within `radius` (inclusive) of `point` to `result`.
    fn in_range(&self, point: &[f64; K], radius: f64, result: &mut Vec<usize>);

    fn num_points(&self) -> usize;
}
