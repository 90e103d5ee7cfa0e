use super::error::Error;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const DEFAULT_PARAMS_TOML: &str = include_str!("../../resources/default.params.toml");

static DEFAULT_PARAMS: OnceLock<ParameterTables> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterTables {
    #[serde(default)]
    pub categories: HashMap<String, CoverParams>,
    #[serde(default)]
    pub infiltration: InfiltrationParams,
}

impl ParameterTables {
    pub fn cover(&self, key: &str) -> Option<&CoverParams> {
        self.categories.get(key)
    }
}

/// Roughness and depression storage of one land-cover category.
///
/// Depression storage is given in inches.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoverParams {
    pub n_imperv: f64,
    pub n_perv: f64,
    pub s_imperv: f64,
    pub s_perv: f64,
    pub pct_zero: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct InfiltrationParams {
    #[serde(default = "default_suction")]
    pub suction: f64,
    #[serde(default = "default_conductivity")]
    pub conductivity: f64,
    #[serde(default = "default_moisture_deficit")]
    pub moisture_deficit: f64,
    #[serde(default = "default_param4")]
    pub param4: f64,
    #[serde(default = "default_param5")]
    pub param5: f64,
}

fn default_suction() -> f64 {
    3.5
}
fn default_conductivity() -> f64 {
    0.5
}
fn default_moisture_deficit() -> f64 {
    0.25
}
fn default_param4() -> f64 {
    7.0
}
fn default_param5() -> f64 {
    0.0
}

impl Default for InfiltrationParams {
    fn default() -> Self {
        Self {
            suction: default_suction(),
            conductivity: default_conductivity(),
            moisture_deficit: default_moisture_deficit(),
            param4: default_param4(),
            param5: default_param5(),
        }
    }
}

pub fn load_parameters(custom_toml: Option<&str>) -> Result<ParameterTables, Error> {
    match custom_toml {
        Some(toml) => {
            let params: ParameterTables = toml::from_str(toml)?;
            Ok(params)
        }
        None => Ok(get_default_parameters().clone()),
    }
}

pub fn get_default_parameters() -> &'static ParameterTables {
    DEFAULT_PARAMS.get_or_init(|| {
        toml::from_str(DEFAULT_PARAMS_TOML)
            .expect("Failed to parse embedded default parameters. This is a library bug.")
    })
}
