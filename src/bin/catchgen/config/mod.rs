use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use catchgen::SynthConfig;

pub fn build_synth_config(params: Option<&Path>) -> Result<SynthConfig> {
    let Some(path) = params else {
        return Ok(SynthConfig::default());
    };

    let toml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter tables: {}", path.display()))?;
    Ok(SynthConfig::with_params(toml))
}
