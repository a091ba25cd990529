/*!
`induced_graphs` is a small graph library built around one question: given a *host* graph and a
small connected *pattern* graph, which vertex subsets of the host induce a copy of the pattern?

# Representation

Graphs are **simple** and **undirected**. Vertices are identified by a `VertexId = u32` that
is stable for the lifetime of the vertex: ids are handed out by the owning [`Graph`](crate::repr::Graph)
on insertion and are never recycled after removal. Besides its neighborhood, each vertex carries
presentation attributes (position, label, color, line style) which the algorithms ignore but
which survive cloning into subgraphs and (de)serialization.

For **edges**, we use a simple tuple-struct `Edge(VertexId, VertexId)`.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before running them on a graph. The most common functionality is also
implemented via traits on the graph itself:

```rust
use induced_graphs::{prelude::*, algo::*, gens::*};

// host: path 0-1-2-3-4
let mut host = Graph::from_edges(5, std::iter::empty::<Edge>());
host.connect_path([0, 1, 2, 3, 4]);

// pattern: path on three vertices
let pattern = Graph::from_edges(3, [(0, 1), (1, 2)]);

let mut matches: Vec<Vec<VertexId>> = host
    .induced_subgraphs(&pattern)
    .unwrap()
    .iter()
    .map(|g| g.sorted_vertices())
    .collect();
matches.sort();

assert_eq!(matches, vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]);
```

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, basic graph operations, and the graph representation,
- [`algo`] includes the induced-subgraph search, the bijection verifier, subset enumeration, induced subgraphs and traversal,
- [`gens`] includes generators for substructures (paths, cycles, cliques) and random graphs,
- [`io`] includes the serializable graph record and JSON reading/writing.

In most use-cases, `use induced_graphs::{prelude::*, algo::*};` suffices for your needs.

# Logging

The crate logs through the [`log`] facade; install any logger (e.g. `env_logger`) to see
search statistics at `debug` level and per-branch decisions at `trace` level.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::Error;
pub use node::*;

/// `induced_graphs::prelude` includes definitions for vertices and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::Error, node::*, ops::*, repr::*};
}
