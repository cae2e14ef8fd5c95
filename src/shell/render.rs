//! Plain-text rendering of conflicts for the shell

use crate::resolver::ConflictResolver;
use crate::types::{Conflict, ConflictStatus};

/// Describe one conflict, possibly over multiple lines.
///
/// `changed` conflicts show the parent descriptor next to the new one; other
/// dimension statuses get a one-line message followed by the dimension
/// itself. The experiment-name conflict is a single templated line.
pub fn describe<R>(resolver: &R, conflict: &Conflict) -> String
where
    R: ConflictResolver + ?Sized,
{
    let name = conflict.name();
    match conflict.status {
        ConflictStatus::New => {
            format!("Dimension {name} is new\n{}", conflict.dimension)
        }
        ConflictStatus::Changed => {
            let old = resolver
                .old_dimension_value(name)
                .unwrap_or_else(|| "?".to_string());
            format!(
                "Dimension {name} has changed from {old} to {}",
                conflict.dimension.spec
            )
        }
        ConflictStatus::Missing => {
            format!("Dimension {name} is missing\n{}", conflict.dimension)
        }
        ConflictStatus::ExperimentName => {
            format!("Experiment name {name} is conflicting")
        }
    }
}
