//! Conflict resolution engine interface
//!
//! The shell is pure presentation/dispatch; everything that actually knows
//! about conflicts lives behind [`ConflictResolver`]. The default
//! implementation is [`MemoryResolver`], which works over a pre-computed
//! conflict set.

mod memory;
pub mod snapshot;

pub use memory::MemoryResolver;

use crate::error::Result;
use crate::types::{Conflict, ConflictStatus, Operation};

/// The branch builder: owns conflict state and records reconciliation
/// operations issued by the shell.
///
/// Query helpers are provided on top of [`conflicts`]; implementors only
/// override them when they can answer more cheaply.
///
/// [`conflicts`]: Self::conflicts
pub trait ConflictResolver {
    /// All conflicts, dimension conflicts and the experiment-name conflict
    /// alike, in a stable order.
    fn conflicts(&self) -> Vec<Conflict>;

    /// Look up the conflict for a single dimension name.
    fn dimension_conflict(&self, name: &str) -> Result<Conflict>;

    /// The parent configuration's descriptor for a dimension, if it had one.
    fn old_dimension_value(&self, name: &str) -> Option<String>;

    /// Keep a `new` or `changed` dimension in the branched configuration.
    fn add_dimension(&mut self, name: &str) -> Result<()>;

    /// Drop a `missing` dimension from the branched configuration.
    fn remove_dimension(&mut self, name: &str) -> Result<()>;

    /// Mark a previously solved dimension conflict unsolved again.
    fn reset_dimension(&mut self, name: &str) -> Result<()>;

    /// Map a `missing` parent dimension onto a `new` dimension.
    fn rename_dimension(&mut self, old: &str, new: &str) -> Result<()>;

    /// Rename the branched experiment.
    fn set_experiment_name(&mut self, name: &str) -> Result<()>;

    /// The accumulated ordered operation list, read at commit time.
    fn operations(&self) -> Vec<Operation>;

    /// Conflicts filtered by solved state.
    fn conflicts_with_solved_state(&self, solved: bool) -> Vec<Conflict> {
        self.conflicts()
            .into_iter()
            .filter(|c| c.is_solved == solved)
            .collect()
    }

    /// Unsolved conflicts of one status.
    fn unsolved_with_status(&self, status: ConflictStatus) -> Vec<Conflict> {
        self.conflicts()
            .into_iter()
            .filter(|c| !c.is_solved && c.status == status)
            .collect()
    }

    /// Names of dimension conflicts starting with `prefix`.
    ///
    /// The experiment-name conflict is never included; wildcard expansion
    /// operates on dimensions only.
    fn dimension_names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.conflicts()
            .into_iter()
            .filter(|c| c.status != ConflictStatus::ExperimentName)
            .filter(|c| c.name().starts_with(prefix))
            .map(|c| c.dimension.name)
            .collect()
    }
}
