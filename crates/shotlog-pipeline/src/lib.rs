//! Report assembly over the `shotlog` metric engines.
//!
//! The session/group-management service of the surrounding application
//! hands raw samples to this crate and receives a persistable report:
//! dispersion metrics plus, when the group has a logged distance, their
//! angular (MOA/MIL) display values. Input validation happens here, at the
//! DTO boundary; the engines themselves are total functions.

mod analysis;
mod types;

pub use analysis::{analyze_group, analyze_velocities};
pub use types::{AnalysisError, GroupAnalysisInput, GroupAnalysisReport, VelocityInput};
