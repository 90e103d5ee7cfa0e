/// Configuration for catchment synthesis.
///
/// # Examples
///
/// ```
/// use catchgen::SynthConfig;
///
/// // Built-in subarea tables
/// let default = SynthConfig::default();
/// assert!(default.params.is_none());
///
/// // Override the tables with a custom TOML document
/// let custom = SynthConfig::with_params(
///     r#"
///     [categories.urban]
///     n_imperv = 0.015
///     n_perv = 0.2
///     s_imperv = 0.06
///     s_perv = 0.25
///     pct_zero = 75.0
///     "#,
/// );
/// assert!(custom.params.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SynthConfig {
    /// Custom subarea parameter tables in TOML format.
    ///
    /// If `None`, uses the embedded `default.params.toml`.
    pub params: Option<String>,
}

impl SynthConfig {
    pub fn with_params(params: impl Into<String>) -> Self {
        Self {
            params: Some(params.into()),
        }
    }
}
