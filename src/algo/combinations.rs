/*!
# Fixed-Size Subsets

Lazy enumeration of all `k`-element subsets of a finite collection.

Each subset is produced as a `Vec` of `k` elements in the order the elements appear in the
input; all `C(n, k)` subsets are produced exactly once, in lexicographic order of their index
positions. The iterator does no work ahead of the consumer, so dropping it early (e.g. because
a search branch died) costs nothing.

```rust
use induced_graphs::algo::*;

let pairs: Vec<Vec<char>> = ['a', 'b', 'c'].k_subsets(2).collect();
assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);

// k > n yields nothing, k = 0 yields exactly the empty subset
assert_eq!([1, 2].k_subsets(3).count(), 0);
assert_eq!([1, 2].k_subsets(0).collect::<Vec<_>>(), vec![Vec::<i32>::new()]);
```
*/

use std::iter::FusedIterator;

use smallvec::SmallVec;

/// Iterator over all `k`-element subsets of a pool of elements.
///
/// Internally keeps one index per chosen slot; advancing bumps the rightmost index that still
/// has room and resets all slots to its right, which is the iterative form of the usual
/// backtracking recursion. Indices are strictly increasing, so no element is chosen twice.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: SmallVec<[usize; 8]>,
    k: usize,
    started: bool,
    exhausted: bool,
}

impl<T: Clone> Combinations<T> {
    /// Creates the enumeration of all `k`-subsets of `pool`
    pub fn new(pool: Vec<T>, k: usize) -> Self {
        let exhausted = k > pool.len();
        Self {
            pool,
            indices: SmallVec::new(),
            k,
            started: false,
            exhausted,
        }
    }

    /// Number of elements the subsets are drawn from
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }

    /// Moves `indices` to the next combination; returns *false* if there is none
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.k;

        // slot `i` may at most hold index `n - k + i`, otherwise the slots to its right run out of elements
        let Some(slot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };

        self.indices[slot] += 1;
        for i in slot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            self.indices.extend(0..self.k);
            return Some(self.current());
        }

        if self.advance() {
            Some(self.current())
        } else {
            self.exhausted = true;
            None
        }
    }
}

impl<T: Clone> FusedIterator for Combinations<T> {}

/// Extension trait to enumerate fixed-size subsets of any finite collection
pub trait KSubsets: IntoIterator + Sized
where
    Self::Item: Clone,
{
    /// Returns a lazy iterator over all `k`-element subsets.
    /// If `k` exceeds the number of elements, the iterator is empty.
    fn k_subsets(self, k: usize) -> Combinations<Self::Item> {
        Combinations::new(self.into_iter().collect(), k)
    }
}

impl<I> KSubsets for I
where
    I: IntoIterator,
    I::Item: Clone,
{
}
