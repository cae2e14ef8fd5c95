//! Mock conflict resolver for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use exbranch::error::{Error, Result};
use exbranch::resolver::ConflictResolver;
use exbranch::types::{Conflict, ConflictStatus, Dimension, Operation};
use std::collections::{HashMap, HashSet};

/// Simple mock resolver for testing
///
/// Features:
/// - Fixture conflicts built up with `with_*` helpers
/// - Call tracking for verification
/// - Error injection per dimension name and for rename/experiment-name
pub struct MockResolver {
    conflicts: Vec<Conflict>,
    old_values: HashMap<String, String>,
    operations: Vec<Operation>,
    // Call tracking
    pub add_calls: Vec<String>,
    pub remove_calls: Vec<String>,
    pub reset_calls: Vec<String>,
    pub rename_calls: Vec<(String, String)>,
    pub set_name_calls: Vec<String>,
    // Error injection
    rejected_names: HashSet<String>,
    reject_rename: bool,
    reject_experiment_name: bool,
}

impl MockResolver {
    /// Create an empty mock
    pub fn new() -> Self {
        Self {
            conflicts: Vec::new(),
            old_values: HashMap::new(),
            operations: Vec::new(),
            add_calls: Vec::new(),
            remove_calls: Vec::new(),
            reset_calls: Vec::new(),
            rename_calls: Vec::new(),
            set_name_calls: Vec::new(),
            rejected_names: HashSet::new(),
            reject_rename: false,
            reject_experiment_name: false,
        }
    }

    /// Add an unsolved conflict fixture
    pub fn with_conflict(mut self, name: &str, status: ConflictStatus) -> Self {
        self.conflicts
            .push(Conflict::new(Dimension::new(name, "uniform(0, 1)"), status));
        self
    }

    /// Add an already-solved conflict fixture
    pub fn with_solved_conflict(mut self, name: &str, status: ConflictStatus) -> Self {
        let mut conflict = Conflict::new(Dimension::new(name, "uniform(0, 1)"), status);
        conflict.is_solved = true;
        self.conflicts.push(conflict);
        self
    }

    /// Record a parent descriptor for a dimension
    pub fn with_old_value(mut self, name: &str, old: &str) -> Self {
        self.old_values.insert(name.to_string(), old.to_string());
        self
    }

    // === Error injection ===

    /// Make every per-dimension mutation reject this name
    pub fn reject(mut self, name: &str) -> Self {
        self.rejected_names.insert(name.to_string());
        self
    }

    /// Make `rename_dimension` fail
    pub fn reject_rename(mut self) -> Self {
        self.reject_rename = true;
        self
    }

    /// Make `set_experiment_name` fail
    pub fn reject_experiment_name(mut self) -> Self {
        self.reject_experiment_name = true;
        self
    }

    fn check(&self, name: &str) -> Result<()> {
        let known = self.conflicts.iter().any(|c| c.dimension.name == name);
        if !known || self.rejected_names.contains(name) {
            return Err(Error::InvalidDimension(name.to_string()));
        }
        Ok(())
    }

    fn mark_solved(&mut self, name: &str) {
        for conflict in &mut self.conflicts {
            if conflict.dimension.name == name {
                conflict.is_solved = true;
            }
        }
    }
}

impl ConflictResolver for MockResolver {
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
        self.add_calls.push(name.to_string());
        self.check(name)?;
        self.mark_solved(name);
        self.operations.push(Operation::Add {
            name: name.to_string(),
        });
        Ok(())
    }

    fn remove_dimension(&mut self, name: &str) -> Result<()> {
        self.remove_calls.push(name.to_string());
        self.check(name)?;
        self.mark_solved(name);
        self.operations.push(Operation::Remove {
            name: name.to_string(),
        });
        Ok(())
    }

    fn reset_dimension(&mut self, name: &str) -> Result<()> {
        self.reset_calls.push(name.to_string());
        self.check(name)?;
        for conflict in &mut self.conflicts {
            if conflict.dimension.name == name {
                conflict.is_solved = false;
            }
        }
        Ok(())
    }

    fn rename_dimension(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename_calls.push((old.to_string(), new.to_string()));
        if self.reject_rename {
            return Err(Error::InvalidRename {
                old: old.to_string(),
                new: new.to_string(),
            });
        }
        self.check(old)?;
        self.check(new)?;
        self.mark_solved(old);
        self.mark_solved(new);
        self.operations.push(Operation::Rename {
            old: old.to_string(),
            new: new.to_string(),
        });
        Ok(())
    }

    fn set_experiment_name(&mut self, name: &str) -> Result<()> {
        self.set_name_calls.push(name.to_string());
        if self.reject_experiment_name {
            return Err(Error::InvalidExperimentName(name.to_string()));
        }
        for conflict in &mut self.conflicts {
            if conflict.status == ConflictStatus::ExperimentName {
                conflict.is_solved = true;
            }
        }
        self.operations.push(Operation::SetExperimentName {
            name: name.to_string(),
        });
        Ok(())
    }

    fn operations(&self) -> Vec<Operation> {
        self.operations.clone()
    }
}
