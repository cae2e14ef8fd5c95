//! Conflict snapshot loading and committed-operation output
//!
//! The binary consumes a TOML snapshot produced by the conflict-detection
//! side of the pipeline and emits the committed operation list as JSON.

use crate::error::{Error, Result};
use crate::resolver::MemoryResolver;
use crate::types::{Conflict, ConflictStatus, Dimension, Operation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// One conflict entry in a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConflict {
    /// Dimension name (or the conflicting experiment name for `experiment`)
    pub name: String,
    /// Kind of divergence
    pub status: ConflictStatus,
    /// Descriptor in the new configuration (parent's, for `missing`)
    #[serde(default)]
    pub spec: String,
    /// Parent descriptor, present for `changed` conflicts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
}

/// A pre-computed conflict set for one branching session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictSnapshot {
    /// Name of the experiment being branched
    pub experiment: String,
    /// Detected conflicts, in display order
    #[serde(default)]
    pub conflicts: Vec<SnapshotConflict>,
}

impl ConflictSnapshot {
    /// Build the in-memory branch builder for this snapshot.
    pub fn into_resolver(self) -> MemoryResolver {
        let mut old_values = HashMap::new();
        let conflicts = self
            .conflicts
            .into_iter()
            .map(|c| {
                if let Some(old) = c.old {
                    old_values.insert(c.name.clone(), old);
                }
                Conflict::new(Dimension::new(c.name, c.spec), c.status)
            })
            .collect();
        MemoryResolver::new(self.experiment, conflicts, old_values)
    }
}

/// Load a conflict snapshot from a TOML file.
pub fn load_snapshot(path: &Path) -> Result<ConflictSnapshot> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Snapshot(format!("failed to read {}: {e}", path.display())))?;

    let snapshot: ConflictSnapshot = toml::from_str(&content)
        .map_err(|e| Error::Snapshot(format!("failed to parse {}: {e}", path.display())))?;

    Ok(snapshot)
}

/// Write the committed operation list as pretty JSON.
pub fn write_operations(out: &mut dyn Write, operations: &[Operation]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, operations)
        .map_err(|e| Error::Snapshot(format!("failed to serialize operations: {e}")))?;
    out.write_all(b"\n")?;
    Ok(())
}
