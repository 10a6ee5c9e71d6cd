//! Run-boundary encoded arrays.
//!
//! A [`StepVector`] represents a dense sequence of values over an integer
//! domain `[start, end)` by storing only the positions where the value
//! changes. Space and the cost of range operations are proportional to the
//! number of distinct runs ("steps"), not to the length of the domain, which
//! suits data with long stretches of repeated values such as discretized
//! signal or annotation tracks.
//!
//! The vector supports:
//!
//! - **Point and range reads**: [`StepVector::at`], [`StepVector::step_at`],
//!   [`StepVector::steps`], [`StepVector::steps_in`]
//! - **Point and range writes**: [`StepVector::set`], [`StepVector::set_range`],
//!   optionally growing the domain when the vector is relaxed
//! - **Bulk transforms**: [`StepVector::apply`], [`StepVector::apply_range`],
//!   which touch each run once
//!
//! After every operation the representation is canonical: no two adjacent
//! runs hold equal values.
//!
//! The ordered storage of boundaries is pluggable through
//! [`BoundaryStore`](stepvec_boundary_store::BoundaryStore).

mod apply;
pub mod config;
pub mod mutators;
pub mod steps;
pub mod vector;
mod write;

#[cfg(test)]
mod tests;

pub use config::StepVectorConfig;
pub use steps::{Step, Steps};
pub use stepvec_boundary_store::{ArenaStore, BoundaryStore};
pub use stepvec_common::{
    Result,
    error::{Error, ErrorKind},
};
pub use vector::StepVector;
