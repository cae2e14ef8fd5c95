//! Core types for exbranch

use serde::{Deserialize, Serialize};

/// A named parameter of an experiment's configuration space
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dimension {
    /// Dimension name
    pub name: String,
    /// Textual value/type descriptor, e.g. `uniform(0.001, 0.1)`
    pub spec: String,
}

impl Dimension {
    /// Create a dimension from a name and descriptor
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.spec)
    }
}

/// Kind of divergence between the parent and the new configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStatus {
    /// Dimension exists in the new configuration but not in the parent
    New,
    /// Dimension exists in both but its descriptor differs
    Changed,
    /// Dimension exists in the parent but not in the new configuration
    Missing,
    /// The experiment name itself collides with the parent's
    #[serde(rename = "experiment")]
    ExperimentName,
}

impl std::fmt::Display for ConflictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Changed => write!(f, "changed"),
            Self::Missing => write!(f, "missing"),
            Self::ExperimentName => write!(f, "experiment"),
        }
    }
}

/// One point of divergence between the parent and new configuration
///
/// For dimension conflicts the dimension holds the name and descriptor in the
/// new configuration (or the parent's, for `missing`). For the experiment-name
/// conflict the dimension name carries the conflicting experiment name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conflict {
    /// The dimension (or experiment name) in conflict
    pub dimension: Dimension,
    /// Kind of divergence
    pub status: ConflictStatus,
    /// Whether the user has resolved this conflict
    pub is_solved: bool,
}

impl Conflict {
    /// Create an unsolved conflict
    pub const fn new(dimension: Dimension, status: ConflictStatus) -> Self {
        Self {
            dimension,
            status,
            is_solved: false,
        }
    }

    /// Name of the dimension in conflict
    pub fn name(&self) -> &str {
        &self.dimension.name
    }
}

/// A recorded reconciliation mutation, applied when committing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Keep a new or changed dimension in the branched configuration
    Add {
        /// Dimension name
        name: String,
    },
    /// Drop a missing dimension from the branched configuration
    Remove {
        /// Dimension name
        name: String,
    },
    /// Map a parent dimension onto a renamed dimension
    Rename {
        /// Name in the parent configuration
        old: String,
        /// Name in the new configuration
        new: String,
    },
    /// Mark a dimension unsolved again
    Reset {
        /// Dimension name
        name: String,
    },
    /// Give the branched experiment a new name
    #[serde(rename = "set_experiment_name")]
    SetExperimentName {
        /// The new experiment name
        name: String,
    },
}

impl Operation {
    /// Dimension names this operation touches (empty for experiment renames)
    pub fn dimension_names(&self) -> Vec<&str> {
        match self {
            Self::Add { name } | Self::Remove { name } | Self::Reset { name } => vec![name],
            Self::Rename { old, new } => vec![old, new],
            Self::SetExperimentName { .. } => Vec::new(),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add { name } => write!(f, "add {name}"),
            Self::Remove { name } => write!(f, "remove {name}"),
            Self::Rename { old, new } => write!(f, "rename {old} {new}"),
            Self::Reset { name } => write!(f, "reset {name}"),
            Self::SetExperimentName { name } => write!(f, "set experiment name {name}"),
        }
    }
}
