//! Selections domain module.
//!
//! Pure selection-to-message mapping: a static catalog of UI flows, each with
//! a closed vocabulary of selection codes and their confirmation strings.
//! The mapper tools in the tools domain are thin wrappers over this table.

mod catalog;

pub use catalog::{BENEFITS, FLOWS, IDENTIFICATION, RANGE_EARNINGS, SelectionFlow, flow};
