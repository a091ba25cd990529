/*!
# IO

Utilities for persisting graphs.

A graph is stored as a [`GraphRecord`]: one [`VertexRecord`] per vertex carrying its id,
presentation attributes, and the ids of its neighbors that are *larger* than its own id. Every
edge is thus written exactly once (at its smaller endpoint); reading a record rebuilds the
symmetric neighborhoods on both sides.

Records are (de)serialized with `serde`; the [`GraphJson`] trait reads and writes them as JSON
from any reader/writer or directly from files:

```rust
use induced_graphs::{prelude::*, io::*};

let graph = Graph::from_edges(3, [(0, 1), (1, 2)]);

let mut buffer = Vec::new();
graph.try_write_json(&mut buffer).unwrap();

let read = Graph::try_read_json(buffer.as_slice()).unwrap();
assert_eq!(read.ordered_edges(), graph.ordered_edges());
```
*/

mod record;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::debug;

use crate::{error::Result, prelude::*};

pub use record::*;

/// Trait for graphs that can be read from and written to JSON records.
pub trait GraphJson: Sized {
    /// Reads a graph from a JSON-encoded [`GraphRecord`].
    ///
    /// # Errors
    /// Returns an error if the input is not valid JSON, does not describe a [`GraphRecord`],
    /// or the record itself is inconsistent (see [`Graph::try_from_record`]).
    fn try_read_json<R>(reader: R) -> Result<Self>
    where
        R: Read;

    /// Reads a graph from a JSON file.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its contents are not a valid record.
    fn try_read_json_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_json(BufReader::new(File::open(path)?))
    }

    /// Writes the graph as a JSON-encoded [`GraphRecord`].
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    fn try_write_json<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the graph to a JSON file.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_json_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_json(BufWriter::new(File::create(path)?))
    }
}

impl GraphJson for Graph {
    fn try_read_json<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        let record: GraphRecord = serde_json::from_reader(reader)?;
        let graph = Graph::try_from_record(&record)?;

        debug!(
            "read graph with {} vertices and {} edges",
            graph.number_of_vertices(),
            graph.number_of_edges()
        );
        Ok(graph)
    }

    fn try_write_json<W>(&self, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, &self.to_record())?;
        writer.flush()?;

        debug!(
            "wrote graph with {} vertices and {} edges",
            self.number_of_vertices(),
            self.number_of_edges()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let mut graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        graph.remove_vertex(4);
        graph.vertex_mut(2).unwrap().set_label("hub");
        graph.vertex_mut(3).unwrap().set_color("red");
        graph.vertex_mut(3).unwrap().set_line_style(LineStyle::Dotted);
        graph
            .vertex_mut(1)
            .unwrap()
            .set_position(Position::new(1.5, -2.0));

        let mut buffer = Vec::new();
        graph.try_write_json(&mut buffer).unwrap();
        let read = Graph::try_read_json(buffer.as_slice()).unwrap();

        assert_eq!(read.sorted_vertices(), vec![0, 1, 2, 3]);
        assert_eq!(read.ordered_edges(), graph.ordered_edges());
        assert_eq!(read.number_of_edges(), 5);
        for u in graph.vertices() {
            assert_eq!(read.vertex(u), graph.vertex(u));
        }
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("induced-graphs-{}.json", std::process::id()));
        let graph = Graph::with_default_edge();

        graph.try_write_json_file(&path).unwrap();
        let read = Graph::try_read_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read.ordered_edges(), vec![Edge(0, 1)]);
        assert_eq!(read.vertex(0).unwrap().position(), Position::new(-50.0, 0.0));
    }

    #[test]
    fn hand_written_json() {
        let json = r#"{
            "vertices": [
                { "id": 7, "x": 0.0, "y": 0.0, "neighbors": [9, 12] },
                { "id": 9, "label": "b", "x": 1.0, "y": 0.0, "neighbors": [12] },
                { "id": 12, "x": 2.0, "y": 0.0, "color": "blue", "line_style": "dashed" }
            ]
        }"#;

        let graph = Graph::try_read_json(json.as_bytes()).unwrap();
        assert_eq!(
            graph.ordered_edges(),
            vec![Edge(7, 9), Edge(7, 12), Edge(9, 12)]
        );
        assert_eq!(graph.next_vertex_id(), 13);

        let v = graph.vertex(12).unwrap();
        assert_eq!(v.color(), "blue");
        assert_eq!(v.line_style(), LineStyle::Dashed);
        assert_eq!(graph.vertex(7).unwrap().color(), Vertex::DEFAULT_COLOR);
        assert_eq!(graph.vertex(9).unwrap().label(), "b");
    }

    #[test]
    fn reserved_id_in_json() {
        let json = r#"{
            "vertices": [
                { "id": 0, "x": 0.0, "y": 0.0, "neighbors": [4294967295] },
                { "id": 4294967295, "x": 1.0, "y": 0.0 }
            ]
        }"#;

        assert!(matches!(
            Graph::try_read_json(json.as_bytes()),
            Err(Error::ReservedId(INVALID_VERTEX))
        ));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            Graph::try_read_json("{ \"vertices\": 3 }".as_bytes()),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Graph::try_read_json_file("/this/path/does/not/exist.json"),
            Err(Error::Io(_))
        ));
    }
}
