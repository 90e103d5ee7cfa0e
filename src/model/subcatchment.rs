/// Routing target written for every synthesized subarea.
pub const ROUTE_TO_OUTLET: &str = "OUTLET";

/// Characteristic width of a square catchment of the given area.
///
/// Area is in hectares (or acres); the width is the side of the equivalent
/// square in metres (or feet), `sqrt(area * 10_000)`.
#[inline]
pub fn width_for_area(area: f64) -> f64 {
    (area * 10_000.0).sqrt()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subcatchment {
    pub name: String,
    pub raingage: String,
    pub outlet: String,
    pub area: f64,
    pub percent_impervious: f64,
    pub width: f64,
    pub percent_slope: f64,
    pub curb_length: f64,
    pub snow_pack: Option<String>,
}

impl Subcatchment {
    /// Builds a row with the width derived from the area and no curb length.
    pub fn new(
        name: impl Into<String>,
        raingage: impl Into<String>,
        outlet: impl Into<String>,
        area: f64,
        percent_impervious: f64,
        percent_slope: f64,
    ) -> Self {
        Self {
            name: name.into(),
            raingage: raingage.into(),
            outlet: outlet.into(),
            area,
            percent_impervious,
            width: width_for_area(area),
            percent_slope,
            curb_length: 0.0,
            snow_pack: None,
        }
    }
}

/// Surface roughness and depression storage of one subcatchment.
///
/// Depression storage depths are in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct Subarea {
    pub subcatchment: String,
    pub n_imperv: f64,
    pub n_perv: f64,
    pub s_imperv: f64,
    pub s_perv: f64,
    pub pct_zero: f64,
    pub route_to: String,
    pub pct_routed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Infiltration {
    pub subcatchment: String,
    pub suction: f64,
    pub conductivity: f64,
    pub moisture_deficit: f64,
    pub param4: Option<f64>,
    pub param5: Option<f64>,
    pub method: Option<String>,
}

/// One polygon vertex of a subcatchment footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub subcatchment: String,
    pub point: Point,
}

impl Vertex {
    pub fn new(subcatchment: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            subcatchment: subcatchment.into(),
            point: Point::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_square_root_of_area_in_square_units() {
        assert!((width_for_area(10.0) - 316.227_766_016_837_9).abs() < 1e-9);
        assert_eq!(width_for_area(1.0), 100.0);
        assert_eq!(width_for_area(0.0), 0.0);
    }

    #[test]
    fn new_subcatchment_derives_width_and_zero_curb_length() {
        let sc = Subcatchment::new("S1", "RG1", "J1", 4.0, 25.0, 2.5);
        assert_eq!(sc.width, 200.0);
        assert_eq!(sc.curb_length, 0.0);
        assert!(sc.snow_pack.is_none());
        assert_eq!(sc.outlet, "J1");
    }
}
