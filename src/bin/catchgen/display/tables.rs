use std::io::{self, Write};

use catchgen::io::format_number;
use catchgen::{CatchmentView, Classification, Synthesized, Tables, Vertex};

use crate::util::text::{short_number, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_model_summary(tables: &Tables) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Subcatchments", tables.subcatchments.len().to_string()),
        ("Junctions", tables.junctions.len().to_string()),
        ("Raingages", tables.raingages.len().to_string()),
        (
            "Timeseries",
            tables
                .first_timeseries()
                .map(|name| format!("{} ({} rows)", name, tables.timeseries_len(name)))
                .unwrap_or_else(|| "none".to_string()),
        ),
        ("Polygon Vertices", tables.polygons.len().to_string()),
    ];

    print_kv_table(&mut out, "Model Summary", &rows);
}

pub fn print_classification(classification: &Classification) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    print_kv_table(&mut out, "Classification", &classification_rows(classification));
}

/// Plain `key value` lines for scripting.
pub fn write_classification(out: &mut impl Write, classification: &Classification) -> io::Result<()> {
    writeln!(out, "slope {}", format_number(classification.slope))?;
    writeln!(out, "impervious {}", format_number(classification.impervious))?;
    writeln!(out, "category {}", classification.category)?;
    Ok(())
}

fn classification_rows(classification: &Classification) -> Vec<(&'static str, String)> {
    vec![
        ("Slope (%)", short_number(classification.slope)),
        ("Impervious (%)", short_number(classification.impervious)),
        ("Category", classification.category.to_string()),
    ]
}

pub fn print_synthesized(report: &Synthesized) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let sc = &report.subcatchment;
    let sa = &report.subarea;
    let rows = vec![
        ("Name", report.id.clone()),
        ("Raingage", sc.raingage.clone()),
        ("Outlet", sc.outlet.clone()),
        ("Area", short_number(sc.area)),
        ("Width", format!("{:.2}", sc.width)),
        ("N-Imperv / N-Perv", format!("{} / {}", short_number(sa.n_imperv), short_number(sa.n_perv))),
        ("S-Imperv / S-Perv", format!("{} / {} mm", short_number(sa.s_imperv), short_number(sa.s_perv))),
        ("PctZero", short_number(sa.pct_zero)),
        ("Footprint", footprint_summary(report.vertices.iter())),
    ];

    print_kv_table(&mut out, "New Subcatchment", &rows);
}

/// Writes one subcatchment and its dependent rows as `section key value` lines.
pub fn print_catchment(
    out: &mut impl Write,
    view: &CatchmentView<'_>,
    vertices: &[&Vertex],
) -> io::Result<()> {
    let sc = view.subcatchment;
    writeln!(out, "[SUBCATCHMENTS]")?;
    writeln!(out, "name {}", sc.name)?;
    writeln!(out, "raingage {}", sc.raingage)?;
    writeln!(out, "outlet {}", sc.outlet)?;
    writeln!(out, "area {}", format_number(sc.area))?;
    writeln!(out, "impervious {}", format_number(sc.percent_impervious))?;
    writeln!(out, "width {}", format_number(sc.width))?;
    writeln!(out, "slope {}", format_number(sc.percent_slope))?;
    writeln!(out, "curb_length {}", format_number(sc.curb_length))?;

    if let Some(sa) = view.subarea {
        writeln!(out, "[SUBAREAS]")?;
        writeln!(out, "n_imperv {}", format_number(sa.n_imperv))?;
        writeln!(out, "n_perv {}", format_number(sa.n_perv))?;
        writeln!(out, "s_imperv {}", format_number(sa.s_imperv))?;
        writeln!(out, "s_perv {}", format_number(sa.s_perv))?;
        writeln!(out, "pct_zero {}", format_number(sa.pct_zero))?;
        writeln!(out, "route_to {}", sa.route_to)?;
    }

    if let Some(infil) = view.infiltration {
        writeln!(out, "[INFILTRATION]")?;
        writeln!(out, "suction {}", format_number(infil.suction))?;
        writeln!(out, "conductivity {}", format_number(infil.conductivity))?;
        writeln!(out, "moisture_deficit {}", format_number(infil.moisture_deficit))?;
    }

    if !vertices.is_empty() {
        writeln!(out, "[POLYGONS]")?;
        for v in vertices {
            writeln!(out, "{} {}", format_number(v.point.x), format_number(v.point.y))?;
        }
    }

    Ok(())
}

fn footprint_summary<'a>(vertices: impl Iterator<Item = &'a Vertex>) -> String {
    vertices
        .map(|v| format!("({},{})", short_number(v.point.x), short_number(v.point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 18usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}┌{}┬{}┐", INDENT, k_line, v_line);

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(out, "{}└{}┴{}┘", INDENT, k_line, v_line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchgen::{LandCover, LandForm, classify};

    #[test]
    fn classification_lines_are_plain_key_value() {
        let classification = classify(LandForm::HigherHills, LandCover::Forests);
        let mut out = Vec::new();
        write_classification(&mut out, &classification).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "slope 25\nimpervious 2\ncategory forests\n");
    }

    #[test]
    fn kv_table_truncates_long_values() {
        let mut out = Vec::new();
        let long = "x".repeat(80);
        print_kv_table(&mut out, "Title", &[("Key", long)]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('…'));
        assert!(text.lines().all(|l| l.chars().count() <= BOX_INNER_WIDTH + INDENT.len()));
    }

    #[test]
    fn footprint_summary_lists_points_in_order() {
        let vertices = [Vertex::new("S1", 0.0, 0.0), Vertex::new("S1", 0.0, 5.0)];
        assert_eq!(footprint_summary(vertices.iter()), "(0,0) (0,5)");
    }
}
