//! Typed targets: resolved regions of a document together with the rules for
//! removing them, inserting next to them and merging them into ranges.

/// Arena of previously resolved targets.
pub mod arena;
/// Continuous-range algebra.
pub mod continuous;
/// Error type shared by target operations.
pub mod error;
/// Target kinds and capability flags.
pub mod kind;
/// Plain-object summaries.
pub mod plain;
/// Removal and delimiter heuristics.
pub mod removal;
/// The target sum type.
pub mod target;
/// Concrete target variants.
pub mod variants;

pub use arena::{TargetArena, ThatTargetId};
pub use continuous::targets_to_continuous_target;
pub use error::{Result, TargetError};
pub use kind::{TargetFlags, TargetKind};
pub use plain::TargetPlainObject;
pub use target::{CloneWith, Target, TargetCommon};
pub use variants::*;
