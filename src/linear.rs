use crate::{distance::squared_euclidean, index::RangeIndex};

/// Brute-force index that scans every stored point on each query.
pub struct LinearIndex<const K: usize> {
    data: Vec<[f64; K]>,
}

impl<const K: usize> Default for LinearIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize> LinearIndex<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn point(&self, point_index: usize) -> &[f64; K] {
        &self.data[point_index]
    }
}

impl<const K: usize> From<Vec<[f64; K]>> for LinearIndex<K> {
    fn from(data: Vec<[f64; K]>) -> Self {
        Self { data }
    }
}

impl<const K: usize> RangeIndex<K> for LinearIndex<K> {
    fn insert(&mut self, point: [f64; K]) -> usize {
        self.data.push(point);
        self.data.len() - 1
    }

    fn in_range(&self, point: &[f64; K], radius: f64, result: &mut Vec<usize>) {
        if !(radius >= 0.0) {
            return;
        }
        let radius_squared = radius * radius;
        for (i, other) in self.data.iter().enumerate() {
            if squared_euclidean(point, other) <= radius_squared {
                result.push(i);
            }
        }
    }

    fn num_points(&self) -> usize {
        self.data.len()
    }
}
