//! Diagram serialization

use crate::{DiagramFile, Result, Snapshot, StoreError};
use canvas_model::DiagramGraph;

/// Serialize a diagram graph to JSON
pub fn serialize(graph: &DiagramGraph) -> Result<String> {
    let file = DiagramFile::new(Snapshot::from_graph(graph));
    let json = serde_json::to_string_pretty(&file)?;
    Ok(json)
}

/// Deserialize a diagram graph from JSON.
///
/// The whole load is rejected on a bad header or a malformed snapshot;
/// an error return never produces a partial graph, so the caller's
/// current graph stays active.
pub fn deserialize(json: &str) -> Result<DiagramGraph> {
    let file: DiagramFile = serde_json::from_str(json)?;

    if !file.header.is_valid() {
        tracing::warn!(
            magic = %file.header.magic,
            version = file.header.version,
            "rejected snapshot with invalid header"
        );
        return Err(StoreError::LoadFormat(format!(
            "invalid or unsupported format header: {} v{}",
            file.header.magic, file.header.version
        )));
    }

    file.snapshot.into_graph()
}
