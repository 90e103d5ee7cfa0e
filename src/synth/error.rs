//! Error types for catchment synthesis.
//!
//! Every variant is fatal to the synthesis call that produced it. Validation
//! and derivation errors are raised before the first section is persisted;
//! only [`Error::Persistence`] can leave the model file partially updated.

use crate::model::section::Section;
use thiserror::Error;

/// Errors that can occur while synthesizing a subcatchment.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse custom subarea parameter tables.
    #[error("failed to parse subarea parameter tables: {0}")]
    ParameterParse(#[from] toml::de::Error),

    /// The requested area is not a positive, finite number.
    #[error("invalid catchment area {0}: must be a positive finite number")]
    InvalidArea(f64),

    /// The category key has no entry in the parameter tables.
    ///
    /// The classification engine only produces the seven known categories,
    /// so this indicates a contract violation upstream or an incomplete
    /// custom parameter table.
    #[error("unknown land cover category '{0}'")]
    UnknownLandCoverCategory(String),

    /// The existing polygon table cannot be used to place a new footprint.
    #[error("invalid polygon state ({vertices} existing vertices): {detail}")]
    InvalidGeometryState {
        /// Number of vertex rows in the polygon table.
        vertices: usize,
        /// Description of the problem.
        detail: String,
    },

    /// Rewriting a model section failed.
    ///
    /// Sections persisted before this one are already on disk; the file must
    /// be inspected and the model reloaded before retrying.
    #[error("failed to persist section {section}; the model file may be partially updated")]
    Persistence {
        /// The section whose rewrite failed.
        section: Section,
        /// The underlying store error.
        #[source]
        source: crate::io::Error,
    },
}

impl Error {
    /// Creates an [`InvalidGeometryState`](Error::InvalidGeometryState) error.
    pub fn invalid_geometry(vertices: usize, detail: impl Into<String>) -> Self {
        Self::InvalidGeometryState {
            vertices,
            detail: detail.into(),
        }
    }

    /// Creates a [`Persistence`](Error::Persistence) error.
    pub fn persistence(section: Section, source: crate::io::Error) -> Self {
        Self::Persistence { section, source }
    }
}
