//! Course data model for the Greenside shot-planning engine.
//!
//! This crate owns the passive domain data every other crate consumes:
//!
//! - [`course`] - the terrain grid, obstacle overlay, and hole definitions
//! - [`golfer`] - the fixed skill profiles and their club bags
//! - [`route`] - the shot-agnostic walkability check (weighted Dijkstra
//!   over the raw grid)
//!
//! Nothing in here mutates shared state or performs I/O: a [`Course`] is a
//! snapshot, and every query is a pure function of it.

pub use self::{course::*, golfer::*, route::*};

pub mod course;
pub mod golfer;
pub mod route;
