//! Typed rows of a stormwater network model and the closed classification sets.
//!
//! - [`types`] – Land-form, land-cover and catchment-category enumerations.
//! - [`subcatchment`] – Subcatchment, subarea, infiltration and polygon vertex rows.
//! - [`network`] – Raingage, timeseries and junction rows.
//! - [`section`] – The named model sections this crate reads and rewrites.
//! - [`tables`] – The ordered in-memory snapshot of those sections.
//!
//! The rows mirror the columns of the corresponding `.inp` sections one-to-one,
//! so a parsed [`Tables`](tables::Tables) can be rendered back without loss for
//! the sections it owns.

pub mod network;
pub mod section;
pub mod subcatchment;
pub mod tables;
pub mod types;
