use super::network::{Junction, Raingage, TimeseriesEntry};
use super::subcatchment::{Infiltration, Subarea, Subcatchment, Vertex};

/// Rows addressed by a string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Subcatchment {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Subarea {
    fn key(&self) -> &str {
        &self.subcatchment
    }
}

impl Keyed for Infiltration {
    fn key(&self) -> &str {
        &self.subcatchment
    }
}

impl Keyed for Raingage {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Junction {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Inserts `row`, replacing an existing row with the same key in place.
pub fn upsert<T: Keyed>(rows: &mut Vec<T>, row: T) {
    match rows.iter().position(|r| r.key() == row.key()) {
        Some(idx) => rows[idx] = row,
        None => rows.push(row),
    }
}

/// In-memory snapshot of the model sections this crate reads and writes.
///
/// Every table keeps file order; "first" always means first in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub raingages: Vec<Raingage>,
    pub subcatchments: Vec<Subcatchment>,
    pub subareas: Vec<Subarea>,
    pub infiltration: Vec<Infiltration>,
    pub junctions: Vec<Junction>,
    pub timeseries: Vec<TimeseriesEntry>,
    pub polygons: Vec<Vertex>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn subcatchment_count(&self) -> usize {
        self.subcatchments.len()
    }

    pub fn contains_subcatchment(&self, name: &str) -> bool {
        self.subcatchments.iter().any(|s| s.name == name)
    }

    pub fn subcatchment(&self, name: &str) -> Option<&Subcatchment> {
        self.subcatchments.iter().find(|s| s.name == name)
    }

    pub fn subarea(&self, name: &str) -> Option<&Subarea> {
        self.subareas.iter().find(|s| s.subcatchment == name)
    }

    pub fn infiltration_of(&self, name: &str) -> Option<&Infiltration> {
        self.infiltration.iter().find(|i| i.subcatchment == name)
    }

    pub fn vertices_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Vertex> + 'a {
        self.polygons.iter().filter(move |v| v.subcatchment == name)
    }

    pub fn first_timeseries(&self) -> Option<&str> {
        self.timeseries.first().map(|t| t.name.as_str())
    }

    pub fn first_raingage(&self) -> Option<&str> {
        self.raingages.first().map(|r| r.name.as_str())
    }

    pub fn first_junction(&self) -> Option<&str> {
        self.junctions.first().map(|j| j.name.as_str())
    }

    /// Number of rows belonging to the named timeseries.
    pub fn timeseries_len(&self, name: &str) -> usize {
        self.timeseries.iter().filter(|t| t.name == name).count()
    }
}
