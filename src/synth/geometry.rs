use super::error::Error;
use crate::model::subcatchment::{Point, Vertex};

/// Vertical shift applied to the previous footprint to place the next one.
pub const VERTICAL_OFFSET: f64 = -5.0;

/// Footprint of the first subcatchment in a model without polygons.
pub const DEFAULT_FOOTPRINT: [Point; 4] = [
    Point::new(0.0, 0.0),
    Point::new(0.0, 5.0),
    Point::new(5.0, 5.0),
    Point::new(5.0, 0.0),
];

/// Computes the four-vertex footprint of the next subcatchment.
///
/// The last four vertices of the table, which must all belong to the last
/// subcatchment drawn, are copied in insertion order and shifted down by
/// five units. Any other table shape is rejected.
pub fn next_footprint(polygons: &[Vertex]) -> Result<[Point; 4], Error> {
    let total = polygons.len();
    let Some(last) = polygons.last() else {
        return Ok(DEFAULT_FOOTPRINT);
    };

    if total < 4 {
        return Err(Error::invalid_geometry(
            total,
            "fewer than four vertices in the polygon table",
        ));
    }
    if total % 4 != 0 {
        return Err(Error::invalid_geometry(
            total,
            "vertex count is not a multiple of four",
        ));
    }

    let run = polygons
        .iter()
        .rev()
        .take_while(|v| v.subcatchment == last.subcatchment)
        .count();
    if run != 4 {
        return Err(Error::invalid_geometry(
            total,
            format!(
                "last footprint '{}' has {run} vertices, expected 4",
                last.subcatchment
            ),
        ));
    }

    let tail = &polygons[total - 4..];
    Ok(std::array::from_fn(|i| {
        Point::new(tail[i].point.x, tail[i].point.y + VERTICAL_OFFSET)
    }))
}

/// Tags a footprint with its subcatchment name.
pub fn footprint_vertices(subcatchment: &str, footprint: &[Point; 4]) -> Vec<Vertex> {
    footprint
        .iter()
        .map(|p| Vertex::new(subcatchment, p.x, p.y))
        .collect()
}
