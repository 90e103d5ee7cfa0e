use crate::classify::{Classification, classify};
use crate::model::section::Section;
use crate::model::subcatchment::{Infiltration, Subarea, Subcatchment, Vertex};
use crate::model::types::{LandCover, LandForm};
use std::fmt;

/// Inputs of one synthesis call.
///
/// `category` is the key into the subarea parameter tables; requests built
/// from a [`Classification`] always carry one of the seven known keys.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchmentRequest {
    pub area: f64,
    pub slope: f64,
    pub impervious: f64,
    pub category: String,
}

impl CatchmentRequest {
    pub fn new(area: f64, slope: f64, impervious: f64, category: impl Into<String>) -> Self {
        Self {
            area,
            slope,
            impervious,
            category: category.into(),
        }
    }

    pub fn from_classification(area: f64, classification: &Classification) -> Self {
        Self::new(
            area,
            classification.slope,
            classification.impervious,
            classification.category.key(),
        )
    }

    pub fn from_classes(area: f64, land_form: LandForm, land_cover: LandCover) -> Self {
        Self::from_classification(area, &classify(land_form, land_cover))
    }
}

/// Everything one successful synthesis call added to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesized {
    pub id: String,
    pub subcatchment: Subcatchment,
    pub subarea: Subarea,
    pub infiltration: Infiltration,
    pub vertices: Vec<Vertex>,
    /// Name of the timeseries generated for a new raingage, if any.
    pub created_timeseries: Option<String>,
    pub created_raingage: Option<String>,
    /// Sections rewritten, in write order.
    pub persisted: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Allocating,
    Bootstrapping,
    Deriving,
    Persisting,
    Done,
    Failed,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Allocating => "allocating",
            Stage::Bootstrapping => "bootstrapping",
            Stage::Deriving => "deriving",
            Stage::Persisting => "persisting",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}
