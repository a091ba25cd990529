/*!
# Graph Representation

A single representation backs all algorithms of this crate: [`Graph`], a map from stable
vertex ids to [`Vertex`] objects. Ids are not required to be contiguous, which allows
vertices to be removed without renumbering the remaining ones.
*/

use crate::{error::Result, ops::*, *};

mod graph;

pub use graph::*;
