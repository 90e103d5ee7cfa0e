#[derive(Debug, Clone, PartialEq)]
pub struct Raingage {
    pub name: String,
    pub format: String,
    pub interval: String,
    pub snow_catch: String,
    pub source: String,
    pub source_name: String,
    /// Station id and units for file-backed gages.
    pub extra: Vec<String>,
}

impl Raingage {
    /// Intensity gage reading hourly values from a named timeseries.
    pub fn from_timeseries(name: impl Into<String>, timeseries: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: "INTENSITY".to_string(),
            interval: "1:00".to_string(),
            snow_catch: "1.0".to_string(),
            source: "TIMESERIES".to_string(),
            source_name: timeseries.into(),
            extra: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TimeseriesData {
    Sample {
        date: Option<String>,
        time: String,
        value: f64,
    },
    File(String),
}

/// One row of the `[TIMESERIES]` section; a series is all rows sharing a name.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesEntry {
    pub name: String,
    pub data: TimeseriesData,
}

impl TimeseriesEntry {
    pub fn sample(name: impl Into<String>, time: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            data: TimeseriesData::Sample {
                date: None,
                time: time.into(),
                value,
            },
        }
    }
}

/// Network node; only ever read to resolve an outlet.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub name: String,
    pub elevation: f64,
    pub rest: Vec<String>,
}
