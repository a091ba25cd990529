use super::*;

fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// `G(n,p)` graphs contain every possible edge `{u, v}` with `u < v < n` with probability `p`
/// independent from each other. No self-loops are generated and every edge is emitted once
/// as `Edge(u, v)` with `u < v`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumVertices,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `prob` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob), "{prob} is not a probability");
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumVertices) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges.
    /// ** Panics if no probability was set **
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n;
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };

        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}
