//! Incremental subcatchment synthesis for SWMM-style stormwater network models.
//! Grows a model one drainage catchment at a time from three inputs (an area, a
//! land-form class and a land-cover class) and keeps every dependent section of
//! the model file consistent.
//!
//! # Features
//!
//! - **Classification** — Deterministic rules turning land form and land cover
//!   into a slope estimate, an imperviousness estimate and a parameter category
//! - **Dependency bootstrapping** — A raingage, and the rainfall timeseries it
//!   reads, are created on demand; the outlet falls back to the catchment itself
//! - **Parameter derivation** — Roughness, depression storage and infiltration
//!   rows from embedded (or custom) lookup tables
//! - **Geometry** — Four-vertex footprints stacked below the previous catchment
//! - **Section persistence** — Whole-section rewrites of `.inp` files that leave
//!   every other section untouched
//!
//! # Quick Start
//!
//! The main entry point is the [`synthesize`] function, which takes the model
//! [`Tables`], a [`SectionStore`] and a [`CatchmentRequest`]:
//!
//! ```
//! use catchgen::{CatchmentRequest, InpDocument, LandCover, LandForm, SynthConfig};
//! use catchgen::synthesize;
//!
//! // An empty model: no junctions, raingages, timeseries or polygons
//! let mut document = InpDocument::new();
//! let mut tables = document.tables()?;
//!
//! let request = CatchmentRequest::from_classes(10.0, LandForm::FlatsAndPlateaus, LandCover::Urban);
//! let report = synthesize(&mut tables, &mut document, &request, &SynthConfig::default())?;
//!
//! // No junction, so the catchment drains into itself
//! assert_eq!(report.id, "S1");
//! assert_eq!(report.subcatchment.outlet, "S1");
//! assert_eq!(report.subcatchment.raingage, "RG1");
//! assert!((report.subcatchment.width - 316.23).abs() < 0.01);
//!
//! // Urban subarea, depression storage in millimetres
//! assert_eq!(report.subarea.n_imperv, 0.013);
//! assert_eq!(report.subarea.n_perv, 0.15);
//! assert!((report.subarea.s_imperv - 1.27).abs() < 1e-9);
//! assert!((report.subarea.s_perv - 5.08).abs() < 1e-9);
//! assert_eq!(report.subarea.pct_zero, 90.0);
//!
//! // Default footprint for the first catchment
//! let footprint: Vec<(f64, f64)> = report.vertices.iter().map(|v| (v.point.x, v.point.y)).collect();
//! assert_eq!(footprint, [(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0)]);
//!
//! // The generated rainfall series
//! assert_eq!(tables.timeseries_len("generator_series"), 12);
//! assert_eq!(tables.timeseries.len(), 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Model file reading, section rendering and the [`SectionStore`] seam
//! - [`synthesize`] — The catchment assembler
//! - [`classify()`] — Land classification rules
//! - [`Project`] — A model file opened for editing
//!
//! # Data Types
//!
//! - [`Tables`] — Ordered in-memory snapshot of the owned sections
//! - [`Subcatchment`], [`Subarea`], [`Infiltration`], [`Vertex`] — Rows written
//!   for every new catchment
//! - [`Raingage`], [`TimeseriesEntry`], [`Junction`] — Dependency rows
//! - [`LandForm`], [`LandCover`], [`CatchmentCategory`] — Closed classification sets
//! - [`Synthesized`] — Report of one synthesis call
//! - [`SynthConfig`] — Custom parameter tables

mod classify;
mod model;
mod project;
mod synth;

pub mod io;

pub use classify::{Classification, classify};
pub use io::{InpDocument, InpFile, SectionStore};
pub use project::{CatchmentView, Project};

pub use model::network::{Junction, Raingage, TimeseriesData, TimeseriesEntry};
pub use model::section::Section;
pub use model::subcatchment::{Infiltration, Point, Subarea, Subcatchment, Vertex, width_for_area};
pub use model::tables::Tables;
pub use model::types::{
    CatchmentCategory, LandCover, LandForm, ParseCategoryError, ParseLandCoverError,
    ParseLandFormError,
};

pub use synth::{
    CatchmentRequest, CoverParams, DEFAULT_FOOTPRINT, DEFAULT_RAINGAGE, DEFAULT_TIMESERIES,
    Dependencies, ID_PREFIX, InfiltrationParams, ParameterTables, Stage, SynthConfig, Synthesized,
    allocate_id, derive_infiltration, derive_subarea, footprint_vertices, get_default_parameters,
    load_parameters, next_footprint, resolve_outlet, synthesize,
};

pub use synth::Error as SynthError;
