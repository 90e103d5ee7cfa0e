use super::error::Error;
use super::params::ParameterTables;
use crate::model::subcatchment::{Infiltration, ROUTE_TO_OUTLET, Subarea};

pub const INCH_TO_MM: f64 = 25.4;

/// Builds the subarea row for `subcatchment` from the category's table entry.
///
/// Depression storage is converted from inches to millimetres.
pub fn derive_subarea(
    subcatchment: &str,
    category_key: &str,
    params: &ParameterTables,
) -> Result<Subarea, Error> {
    let cover = params
        .cover(category_key)
        .ok_or_else(|| Error::UnknownLandCoverCategory(category_key.to_string()))?;

    Ok(Subarea {
        subcatchment: subcatchment.to_string(),
        n_imperv: cover.n_imperv,
        n_perv: cover.n_perv,
        s_imperv: cover.s_imperv * INCH_TO_MM,
        s_perv: cover.s_perv * INCH_TO_MM,
        pct_zero: cover.pct_zero,
        route_to: ROUTE_TO_OUTLET.to_string(),
        pct_routed: None,
    })
}

pub fn derive_infiltration(subcatchment: &str, params: &ParameterTables) -> Infiltration {
    let defaults = params.infiltration;
    Infiltration {
        subcatchment: subcatchment.to_string(),
        suction: defaults.suction,
        conductivity: defaults.conductivity,
        moisture_deficit: defaults.moisture_deficit,
        param4: Some(defaults.param4),
        param5: Some(defaults.param5),
        method: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::params::get_default_parameters;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9
    }

    #[test]
    fn forests_subarea_matches_table() {
        let subarea = derive_subarea("S7", "forests", get_default_parameters()).unwrap();
        assert_eq!(subarea.subcatchment, "S7");
        assert_eq!(subarea.n_imperv, 0.40);
        assert_eq!(subarea.n_perv, 0.80);
        assert!(approx_eq(subarea.s_imperv, 1.27));
        assert!(approx_eq(subarea.s_perv, 7.62));
        assert_eq!(subarea.pct_zero, 5.0);
        assert_eq!(subarea.route_to, "OUTLET");
        assert!(subarea.pct_routed.is_none());
    }

    #[test]
    fn urban_depression_storage_in_millimetres() {
        let subarea = derive_subarea("S1", "urban", get_default_parameters()).unwrap();
        assert!(approx_eq(subarea.s_imperv, 1.27));
        assert!(approx_eq(subarea.s_perv, 5.08));
        assert_eq!(subarea.pct_zero, 90.0);
    }

    #[test]
    fn derivation_is_pure() {
        let params = get_default_parameters();
        let a = derive_subarea("S1", "meadows", params).unwrap();
        let b = derive_subarea("S1", "meadows", params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_category_never_defaults() {
        let err = derive_subarea("S1", "desert", get_default_parameters()).unwrap_err();
        assert!(matches!(err, Error::UnknownLandCoverCategory(ref key) if key == "desert"));
    }

    #[test]
    fn infiltration_is_category_independent() {
        let infil = derive_infiltration("S3", get_default_parameters());
        assert_eq!(infil.subcatchment, "S3");
        assert_eq!(infil.suction, 3.5);
        assert_eq!(infil.conductivity, 0.5);
        assert_eq!(infil.moisture_deficit, 0.25);
        assert_eq!(infil.param4, Some(7.0));
        assert_eq!(infil.param5, Some(0.0));
    }
}
