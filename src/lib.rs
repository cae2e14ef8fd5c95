//! exbranch - interactive conflict solver for experiment configuration branching
//!
//! When an experiment's declared parameter space diverges from a previously
//! recorded parent version, each divergent dimension becomes a [`Conflict`].
//! The [`ConflictShell`] walks the user through resolving those conflicts one
//! command at a time, forwarding every mutation to a [`ConflictResolver`]
//! which owns the conflict state and accumulates the [`Operation`] list to be
//! committed.

pub mod error;
pub mod resolver;
pub mod shell;
pub mod types;

pub use error::{Error, Result};
pub use resolver::{ConflictResolver, MemoryResolver};
pub use shell::{ConflictShell, Outcome};
pub use types::{Conflict, ConflictStatus, Dimension, Operation};
