//! In-memory branch builder over a pre-computed conflict set

use crate::error::{Error, Result};
use crate::resolver::ConflictResolver;
use crate::types::{Conflict, ConflictStatus, Operation};
use std::collections::HashMap;
use tracing::debug;

/// Branch builder holding conflicts, parent values, the evolving experiment
/// name, and the ordered operation log.
///
/// Conflicts are supplied fully formed; this type does no dimension diffing.
/// The conflict order given at construction is the order queries report.
#[derive(Debug, Clone)]
pub struct MemoryResolver {
    conflicts: Vec<Conflict>,
    old_values: HashMap<String, String>,
    experiment_name: String,
    operations: Vec<Operation>,
}

impl MemoryResolver {
    /// Create a resolver from a conflict set and the parent descriptors for
    /// `changed` dimensions.
    pub fn new(
        experiment_name: impl Into<String>,
        conflicts: Vec<Conflict>,
        old_values: HashMap<String, String>,
    ) -> Self {
        Self {
            conflicts,
            old_values,
            experiment_name: experiment_name.into(),
            operations: Vec::new(),
        }
    }

    /// The current experiment name.
    pub fn experiment_name(&self) -> &str {
        &self.experiment_name
    }

    fn conflict_mut(&mut self, name: &str) -> Result<&mut Conflict> {
        self.conflicts
            .iter_mut()
            .filter(|c| c.status != ConflictStatus::ExperimentName)
            .find(|c| c.dimension.name == name)
            .ok_or_else(|| Error::InvalidDimension(name.to_string()))
    }

    fn solve(&mut self, name: &str, eligible: &[ConflictStatus], op: Operation) -> Result<()> {
        let conflict = self.conflict_mut(name)?;
        if conflict.is_solved || !eligible.contains(&conflict.status) {
            return Err(Error::InvalidDimension(name.to_string()));
        }
        conflict.is_solved = true;
        debug!(name, %op, "conflict solved");
        self.operations.push(op);
        Ok(())
    }
}

impl ConflictResolver for MemoryResolver {
    fn conflicts(&self) -> Vec<Conflict> {
        self.conflicts.clone()
    }

    fn dimension_conflict(&self, name: &str) -> Result<Conflict> {
        self.conflicts
            .iter()
            .find(|c| c.dimension.name == name)
            .cloned()
            .ok_or_else(|| Error::InvalidDimension(name.to_string()))
    }

    fn old_dimension_value(&self, name: &str) -> Option<String> {
        self.old_values.get(name).cloned()
    }

    fn add_dimension(&mut self, name: &str) -> Result<()> {
        self.solve(
            name,
            &[ConflictStatus::New, ConflictStatus::Changed],
            Operation::Add {
                name: name.to_string(),
            },
        )
    }

    fn remove_dimension(&mut self, name: &str) -> Result<()> {
        self.solve(
            name,
            &[ConflictStatus::Missing],
            Operation::Remove {
                name: name.to_string(),
            },
        )
    }

    fn reset_dimension(&mut self, name: &str) -> Result<()> {
        let conflict = self.conflict_mut(name)?;
        if !conflict.is_solved {
            return Err(Error::InvalidDimension(name.to_string()));
        }
        conflict.is_solved = false;
        // Reverting drops the recorded operations for this dimension; the log
        // is the to-be-committed list, and a reset dimension commits nothing.
        self.operations
            .retain(|op| !op.dimension_names().contains(&name));
        debug!(name, "conflict reset");
        Ok(())
    }

    fn rename_dimension(&mut self, old: &str, new: &str) -> Result<()> {
        let eligible = |conflicts: &[Conflict], name: &str, status: ConflictStatus| {
            conflicts
                .iter()
                .any(|c| c.dimension.name == name && c.status == status && !c.is_solved)
        };
        if !eligible(&self.conflicts, old, ConflictStatus::Missing)
            || !eligible(&self.conflicts, new, ConflictStatus::New)
        {
            return Err(Error::InvalidRename {
                old: old.to_string(),
                new: new.to_string(),
            });
        }
        for conflict in &mut self.conflicts {
            if conflict.dimension.name == old || conflict.dimension.name == new {
                conflict.is_solved = true;
            }
        }
        debug!(old, new, "dimension renamed");
        self.operations.push(Operation::Rename {
            old: old.to_string(),
            new: new.to_string(),
        });
        Ok(())
    }

    fn set_experiment_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() || name == self.experiment_name {
            return Err(Error::InvalidExperimentName(name.to_string()));
        }
        self.experiment_name = name.to_string();
        for conflict in &mut self.conflicts {
            if conflict.status == ConflictStatus::ExperimentName {
                conflict.is_solved = true;
            }
        }
        // A second rename replaces the first; only the last name commits.
        self.operations
            .retain(|op| !matches!(op, Operation::SetExperimentName { .. }));
        debug!(name, "experiment renamed");
        self.operations.push(Operation::SetExperimentName {
            name: name.to_string(),
        });
        Ok(())
    }

    fn operations(&self) -> Vec<Operation> {
        self.operations.clone()
    }
}
