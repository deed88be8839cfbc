use ordered_float::OrderedFloat;

/// K orderings of the same set of slot ids, ordering `d` sorted by coordinate `d`.
///
/// A bulk build sorts each ordering once up front. Every split afterwards only
/// filters the orderings into two halves, so relative order survives without
/// ever sorting again.
#[derive(Clone, Debug)]
pub(crate) struct PreSorted<const K: usize> {
    pub(crate) cur: [Vec<usize>; K],
}

impl<const K: usize> PreSorted<K> {
    /// Sort the ids `0..points.len()` once per dimension.
    ///
    /// The sort is stable, so ids with equal coordinates stay in input order.
    pub(crate) fn new(points: &[[f64; K]]) -> Self {
        let cur = std::array::from_fn(|dim| {
            let mut ids: Vec<usize> = (0..points.len()).collect();
            ids.sort_by_key(|&id| OrderedFloat(points[id][dim]));
            ids
        });
        PreSorted { cur }
    }

    pub(crate) fn len(&self) -> usize {
        self.cur.first().map_or(0, Vec::len)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split around the median of dimension `dim`.
    ///
    /// Returns the median id, then the ids whose `dim` coordinate is strictly
    /// smaller than the median's, then the remaining ids (greater or equal)
    /// without the median itself. Both halves keep every ordering sorted.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub(crate) fn split(self, points: &[[f64; K]], dim: usize) -> (usize, Self, Self) {
        let ordering = &self.cur[dim];
        let len = ordering.len();
        assert!(len > 0, "cannot split an empty ordering");

        // Walk back to the first id tied with the middle one, so everything
        // before the median is strictly smaller on `dim`.
        let mut m = len / 2;
        while m > 0 && points[ordering[m - 1]][dim] == points[ordering[m]][dim] {
            m -= 1;
        }
        let median = ordering[m];
        let pivot = points[median][dim];

        let mut left: [Vec<usize>; K] = std::array::from_fn(|_| Vec::with_capacity(m));
        let mut right: [Vec<usize>; K] =
            std::array::from_fn(|_| Vec::with_capacity(len - m - 1));
        for (d, ids) in self.cur.into_iter().enumerate() {
            for id in ids {
                if id == median {
                    continue;
                }
                if points[id][dim] < pivot {
                    left[d].push(id);
                } else {
                    right[d].push(id);
                }
            }
        }

        (median, PreSorted { cur: left }, PreSorted { cur: right })
    }
}
