//! Static description of the graph and the machine processing it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::VertexId;
use crate::utils::error::{ConfigError, Result};

/// Static facts about the graph and the machine.
///
/// Built once before engine startup and passed by reference to everything
/// that needs it. Fields are read-only after construction; the `with_*`
/// methods consume the descriptor and return an updated copy.
///
/// Construction never fails. Range checks happen in [`validate`], which the
/// planner calls before computing a layout.
///
/// [`validate`]: GraphDescriptor::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    #[serde(default)]
    min_vertex_id: VertexId,
    max_vertex_id: VertexId,
    #[serde(default)]
    edge_count: u64,
    #[serde(default)]
    max_out_degree: u32,
    processor_count: u32,
    memory_budget_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    files: Option<GraphFiles>,
}

impl GraphDescriptor {
    /// Creates a descriptor for vertices `0..=max_vertex_id`.
    #[must_use]
    pub fn new(max_vertex_id: VertexId, processor_count: u32, memory_budget_bytes: u64) -> Self {
        Self {
            min_vertex_id: 0,
            max_vertex_id,
            edge_count: 0,
            max_out_degree: 0,
            processor_count,
            memory_budget_bytes,
            files: None,
        }
    }

    /// Sets the smallest vertex id present in the graph.
    #[must_use]
    pub fn with_min_vertex_id(mut self, min_vertex_id: VertexId) -> Self {
        self.min_vertex_id = min_vertex_id;
        self
    }

    /// Sets the number of edges.
    #[must_use]
    pub fn with_edge_count(mut self, edge_count: u64) -> Self {
        self.edge_count = edge_count;
        self
    }

    /// Sets the largest out-degree of any vertex.
    #[must_use]
    pub fn with_max_out_degree(mut self, max_out_degree: u32) -> Self {
        self.max_out_degree = max_out_degree;
        self
    }

    /// Sets the on-disk locations of the graph's files.
    #[must_use]
    pub fn with_files(mut self, files: GraphFiles) -> Self {
        self.files = Some(files);
        self
    }

    /// Parses a descriptor from a JSON document.
    ///
    /// The result is not validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a descriptor from a JSON file.
    ///
    /// The result is not validated.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Checks that every field is within the range the planner accepts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if there are no
    /// processors, no memory budget, or an empty vertex range.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.processor_count == 0 {
            return Err(ConfigError::invalid("processor_count must be at least 1"));
        }
        if self.memory_budget_bytes == 0 {
            return Err(ConfigError::invalid("memory_budget_bytes must be at least 1"));
        }
        if self.max_vertex_id < self.min_vertex_id {
            return Err(ConfigError::invalid(format!(
                "max_vertex_id {} is below min_vertex_id {}",
                self.max_vertex_id, self.min_vertex_id
            )));
        }
        if self.max_vertex_id == VertexId::MAX {
            return Err(ConfigError::invalid("max_vertex_id leaves no room for a vertex count"));
        }
        Ok(())
    }

    /// Smallest vertex id present in the graph.
    #[must_use]
    pub fn min_vertex_id(&self) -> VertexId {
        self.min_vertex_id
    }

    /// Largest vertex id present in the graph (inclusive).
    #[must_use]
    pub fn max_vertex_id(&self) -> VertexId {
        self.max_vertex_id
    }

    /// Number of vertex slots, counting from id 0.
    ///
    /// Vertex ids are dense and capacity math always starts at 0, so this is
    /// `max_vertex_id + 1` regardless of `min_vertex_id`.
    #[must_use]
    pub fn vertex_count(&self) -> u64 {
        self.max_vertex_id.saturating_add(1)
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> u64 {
        self.edge_count
    }

    /// Largest out-degree of any vertex.
    #[must_use]
    pub fn max_out_degree(&self) -> u32 {
        self.max_out_degree
    }

    /// Number of processing units.
    #[must_use]
    pub fn processor_count(&self) -> u32 {
        self.processor_count
    }

    /// Total memory budget in bytes.
    #[must_use]
    pub fn memory_budget_bytes(&self) -> u64 {
        self.memory_budget_bytes
    }

    /// On-disk locations of the graph's files, if configured.
    #[must_use]
    pub fn files(&self) -> Option<&GraphFiles> {
        self.files.as_ref()
    }
}

/// Where the graph's vertex, edge, and attribute files live.
///
/// Fog's layout code never opens these; they are carried so the disk I/O
/// layer reads the same configuration the planner does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFiles {
    /// Directory containing the graph files.
    pub graph_path: PathBuf,
    /// Vertex index file name.
    pub vertex_file: String,
    /// Edge file name.
    pub edge_file: String,
    /// Attribute file name.
    pub attribute_file: String,
}

impl GraphFiles {
    /// Full path of the vertex index file.
    #[must_use]
    pub fn vertex_path(&self) -> PathBuf {
        self.graph_path.join(&self.vertex_file)
    }

    /// Full path of the edge file.
    #[must_use]
    pub fn edge_path(&self) -> PathBuf {
        self.graph_path.join(&self.edge_file)
    }

    /// Full path of the attribute file.
    #[must_use]
    pub fn attribute_path(&self) -> PathBuf {
        self.graph_path.join(&self.attribute_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Error;
    use std::io::Write;

    #[test]
    fn test_builder() {
        let desc = GraphDescriptor::new(999, 4, 1 << 20)
            .with_edge_count(5000)
            .with_max_out_degree(42);

        assert_eq!(desc.min_vertex_id(), 0);
        assert_eq!(desc.max_vertex_id(), 999);
        assert_eq!(desc.vertex_count(), 1000);
        assert_eq!(desc.edge_count(), 5000);
        assert_eq!(desc.max_out_degree(), 42);
        assert_eq!(desc.processor_count(), 4);
        assert_eq!(desc.memory_budget_bytes(), 1 << 20);
        assert!(desc.files().is_none());
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_processors() {
        let err = GraphDescriptor::new(10, 0, 1024).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let err = GraphDescriptor::new(10, 2, 0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let err = GraphDescriptor::new(10, 2, 1024)
            .with_min_vertex_id(11)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_vertex_count_ignores_min() {
        let desc = GraphDescriptor::new(99, 1, 1024).with_min_vertex_id(50);
        assert_eq!(desc.vertex_count(), 100);
    }

    #[test]
    fn test_graph_files_paths() {
        let files = GraphFiles {
            graph_path: PathBuf::from("/data/twitter"),
            vertex_file: "twitter.index".to_string(),
            edge_file: "twitter.edge".to_string(),
            attribute_file: "twitter.attr".to_string(),
        };

        assert_eq!(files.vertex_path(), PathBuf::from("/data/twitter/twitter.index"));
        assert_eq!(files.edge_path(), PathBuf::from("/data/twitter/twitter.edge"));
        assert_eq!(files.attribute_path(), PathBuf::from("/data/twitter/twitter.attr"));
    }

    #[test]
    fn test_with_files_survives_json() {
        let files = GraphFiles {
            graph_path: PathBuf::from("/data/twitter"),
            vertex_file: "twitter.index".to_string(),
            edge_file: "twitter.edge".to_string(),
            attribute_file: "twitter.attr".to_string(),
        };
        let desc = GraphDescriptor::new(41_652_229, 8, 1 << 30).with_files(files.clone());
        assert_eq!(desc.files(), Some(&files));

        let json = serde_json::to_string(&desc).unwrap();
        let loaded = GraphDescriptor::from_json_str(&json).unwrap();
        assert_eq!(loaded, desc);
    }

    #[test]
    fn test_from_json_defaults() {
        let desc = GraphDescriptor::from_json_str(
            r#"{"max_vertex_id": 999999, "processor_count": 4, "memory_budget_bytes": 1048576}"#,
        )
        .unwrap();

        assert_eq!(desc, GraphDescriptor::new(999_999, 4, 1_048_576));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "min_vertex_id": 0,
                "max_vertex_id": 4847570,
                "edge_count": 68993773,
                "max_out_degree": 20293,
                "processor_count": 8,
                "memory_budget_bytes": 268435456,
                "files": {{
                    "graph_path": "/data/livejournal",
                    "vertex_file": "lj.index",
                    "edge_file": "lj.edge",
                    "attribute_file": "lj.attr"
                }}
            }}"#
        )
        .unwrap();

        let desc = GraphDescriptor::from_json_file(file.path()).unwrap();
        assert_eq!(desc.max_vertex_id(), 4_847_570);
        assert_eq!(desc.edge_count(), 68_993_773);
        assert_eq!(desc.processor_count(), 8);
        assert_eq!(
            desc.files().unwrap().edge_path(),
            PathBuf::from("/data/livejournal/lj.edge")
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = GraphDescriptor::from_json_str("{\"max_vertex_id\": \"many\"}").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GraphDescriptor::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_round_trip_skips_absent_files() {
        let desc = GraphDescriptor::new(7, 2, 4096);
        let json = serde_json::to_string(&desc).unwrap();
        assert!(!json.contains("files"));
        assert_eq!(GraphDescriptor::from_json_str(&json).unwrap(), desc);
    }
}
