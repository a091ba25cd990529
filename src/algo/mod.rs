/*!
# Graph Algorithms

This module provides the **algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use induced_graphs::algo::*;
```
and gain access to the induced-subgraph search, the bijection verifier, subset enumeration,
induced subgraphs and traversal.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod combinations;
mod induced;
mod isomorphism;
mod subgraph;
mod traversal;

use crate::{error::Result, prelude::*};

pub use combinations::*;
pub use induced::*;
pub use isomorphism::*;
pub use subgraph::*;
pub use traversal::*;
