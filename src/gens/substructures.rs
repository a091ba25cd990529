/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**, either between existing vertices or as new vertices placed on a circle

# Example

```rust
use induced_graphs::{prelude::*, gens::*};

let mut g = Graph::from_edges(5, std::iter::empty::<Edge>());
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique([0, 2, 4]);

assert_eq!(
    g.ordered_edges(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);

let center = Position::new(10.0, 10.0);
let clique = g.add_clique(center, 4, 3.0);
assert_eq!(clique, vec![5, 6, 7, 8]);
assert_eq!(g.number_of_edges(), 7 + 6);
```
*/

use std::f64::consts::TAU;

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    /// ** Panics if two consecutive vertices are equal or already adjacent **
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = VertexId>;

    /// Connects the given vertices with a **cycle**: consecutive vertices are connected and
    /// the last vertex is connected back to the first. Fewer than three vertices are
    /// connected as a path, as a simple graph has no shorter cycles.
    /// ** Panics if two consecutive vertices are equal or already adjacent **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = VertexId>;

    /// Connects all given vertices into a **clique**. Edges that are already present are kept.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = VertexId>;

    /// Adds `count` new, mutually adjacent vertices placed evenly on the circle of the given
    /// `radius` around `center` and returns their ids in insertion order.
    fn add_clique(&mut self, center: Position, count: NumVertices, radius: f64) -> Vec<VertexId>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphVertexEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = VertexId>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = VertexId>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(nodes.iter().copied());

        if nodes.len() > 2 {
            self.add_edge(nodes[nodes.len() - 1], nodes[0]);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = VertexId>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.try_add_edge(u, v);
        }
    }

    fn add_clique(&mut self, center: Position, count: NumVertices, radius: f64) -> Vec<VertexId> {
        let vertices = (0..count)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64;
                self.add_vertex(Position::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ))
            })
            .collect_vec();

        self.connect_clique(vertices.iter().copied());
        vertices
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn edgeless(n: NumVertices) -> Graph {
        Graph::from_edges(n, std::iter::empty::<Edge>())
    }

    #[test]
    fn connect_path() {
        let mut g = edgeless(6);
        g.connect_path([]);
        g.connect_path([1]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([0, 3, 1, 4]);
        assert_eq!(g.ordered_edges(), vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]);
    }

    #[test]
    fn connect_cycle() {
        let mut g = edgeless(6);
        g.connect_cycle([]);
        g.connect_cycle([1]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_cycle([2, 5]);
        assert_eq!(g.number_of_edges(), 1);

        let mut g = edgeless(6);
        g.connect_cycle([0, 3, 1, 4]);
        assert_eq!(
            g.ordered_edges(),
            vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
        );
    }

    #[test]
    fn connect_clique() {
        let mut g = edgeless(6);
        g.connect_clique([1]);
        assert_eq!(g.number_of_edges(), 0);

        g.add_edge(1, 2);
        g.connect_clique([1, 2, 4]);
        assert_eq!(g.number_of_edges(), 3);

        g.connect_clique([0, 1, 2, 3, 4, 5]);
        assert_eq!(g.number_of_edges(), 15);
    }

    #[test]
    fn connect_clique_from_set() {
        let mut g = edgeless(5);
        g.connect_clique(BTreeSet::from([4, 0, 3]));
        assert_eq!(g.ordered_edges(), vec![Edge(0, 3), Edge(0, 4), Edge(3, 4)]);
    }

    #[test]
    fn add_clique_on_circle() {
        let mut g = Graph::with_default_edge();
        let center = Position::new(3.0, -7.5);
        let radius = 12.0;

        let clique = g.add_clique(center, 5, radius);
        assert_eq!(clique.len(), 5);
        assert_eq!(g.number_of_vertices(), 7);
        assert_eq!(g.number_of_edges(), 1 + 10);

        for (i, &u) in clique.iter().enumerate() {
            assert!(!g.has_edge(u, 0) && !g.has_edge(u, 1));
            assert_eq!(g.degree_of(u), 4);
            for &v in &clique[i + 1..] {
                assert!(g.has_edge(u, v));
            }

            let position = g.vertex(u).unwrap().position();
            assert!((position.distance(&center) - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn add_empty_clique() {
        let mut g = Graph::new();
        assert!(g.add_clique(Position::default(), 0, 1.0).is_empty());
        assert_eq!(g.add_clique(Position::default(), 1, 1.0).len(), 1);
        assert!(g.is_edgeless());
    }
}
