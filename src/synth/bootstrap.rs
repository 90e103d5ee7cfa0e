//! Dependency bootstrapping: a new subcatchment needs a raingage to receive
//! rainfall and an outlet to drain into. Missing dependencies are planned
//! here and materialized only once the rest of the catchment has been
//! derived successfully.

use crate::model::network::{Raingage, TimeseriesEntry};
use crate::model::tables::{Tables, upsert};

pub const DEFAULT_TIMESERIES: &str = "generator_series";
pub const DEFAULT_RAINGAGE: &str = "RG1";

/// Hourly rainfall intensities of the generated timeseries, starting at 1:00.
pub const DEFAULT_INTENSITIES: [f64; 12] = [
    1.0, 2.0, 4.0, 4.0, 12.0, 13.0, 11.0, 20.0, 15.0, 10.0, 5.0, 3.0,
];

/// The generated rainfall series: one sample per hour, `1:00` through `12:00`.
pub fn default_timeseries() -> Vec<TimeseriesEntry> {
    DEFAULT_INTENSITIES
        .iter()
        .enumerate()
        .map(|(hour, &value)| {
            TimeseriesEntry::sample(DEFAULT_TIMESERIES, format!("{}:00", hour + 1), value)
        })
        .collect()
}

/// Resolved dependencies of one new subcatchment.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependencies {
    pub raingage: String,
    pub outlet: String,
    /// Rows to append to the timeseries table, if a series had to be created.
    pub new_timeseries: Option<Vec<TimeseriesEntry>>,
    /// Raingage to append, if the model had none.
    pub new_raingage: Option<Raingage>,
}

impl Dependencies {
    /// Resolves the raingage and outlet for `id` without touching `tables`.
    ///
    /// A timeseries is only looked up, or generated, when a raingage has to
    /// be created.
    pub fn plan(tables: &Tables, id: &str) -> Self {
        let outlet = resolve_outlet(tables, id);

        if let Some(raingage) = tables.first_raingage() {
            return Self {
                raingage: raingage.to_string(),
                outlet,
                new_timeseries: None,
                new_raingage: None,
            };
        }

        let (series, new_timeseries) = match tables.first_timeseries() {
            Some(name) => (name.to_string(), None),
            None => (DEFAULT_TIMESERIES.to_string(), Some(default_timeseries())),
        };
        let raingage = Raingage::from_timeseries(DEFAULT_RAINGAGE, series);

        Self {
            raingage: raingage.name.clone(),
            outlet,
            new_timeseries,
            new_raingage: Some(raingage),
        }
    }

    pub fn creates_timeseries(&self) -> bool {
        self.new_timeseries.is_some()
    }

    pub fn creates_raingage(&self) -> bool {
        self.new_raingage.is_some()
    }

    /// Appends the generated timeseries rows. Returns `false` if the plan
    /// reuses an existing series.
    pub fn insert_timeseries(&self, tables: &mut Tables) -> bool {
        match &self.new_timeseries {
            Some(rows) => {
                tables.timeseries.extend(rows.iter().cloned());
                true
            }
            None => false,
        }
    }

    /// Adds the planned raingage. Returns `false` if the plan reuses an
    /// existing one.
    pub fn insert_raingage(&self, tables: &mut Tables) -> bool {
        match &self.new_raingage {
            Some(raingage) => {
                upsert(&mut tables.raingages, raingage.clone());
                true
            }
            None => false,
        }
    }
}

/// The first junction, or the subcatchment itself when there is none.
pub fn resolve_outlet(tables: &Tables, id: &str) -> String {
    tables.first_junction().unwrap_or(id).to_string()
}
