use super::InpDocument;
use crate::model::{
    network::TimeseriesData,
    section::Section,
    tables::Tables,
};
use std::io::Write;

pub fn write<W: Write>(mut writer: W, document: &InpDocument) -> std::io::Result<()> {
    for line in &document.preamble {
        writeln!(writer, "{}", line)?;
    }
    for block in &document.blocks {
        writeln!(writer, "{}", block.header)?;
        for line in &block.body {
            writeln!(writer, "{}", line)?;
        }
    }
    writer.flush()
}

/// Renders the body of `section` from the current table contents.
///
/// The body starts with a `;;` column row and a dashed rule, followed by one
/// aligned line per record and a trailing blank line.
pub fn render_section(section: Section, tables: &Tables) -> Vec<String> {
    let mut header: Vec<String> = section.columns().iter().map(|c| c.to_string()).collect();
    header[0] = format!(";;{}", header[0]);
    let mut rule: Vec<String> = header.iter().map(|h| "-".repeat(h.len())).collect();
    rule[0].replace_range(0..2, ";;");

    let rows = section_rows(section, tables);
    let widths = column_widths(&header, &rows);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(align(&header, &widths));
    lines.push(align(&rule, &widths));
    for row in &rows {
        lines.push(align(row, &widths));
    }
    lines.push(String::new());
    lines
}

fn section_rows(section: Section, tables: &Tables) -> Vec<Vec<String>> {
    match section {
        Section::Raingages => tables
            .raingages
            .iter()
            .map(|r| {
                let mut row = vec![
                    r.name.clone(),
                    r.format.clone(),
                    r.interval.clone(),
                    r.snow_catch.clone(),
                    r.source.clone(),
                    r.source_name.clone(),
                ];
                row.extend(r.extra.iter().cloned());
                row
            })
            .collect(),
        Section::Subcatchments => tables
            .subcatchments
            .iter()
            .map(|s| {
                let mut row = vec![
                    s.name.clone(),
                    s.raingage.clone(),
                    s.outlet.clone(),
                    format_number(s.area),
                    format_number(s.percent_impervious),
                    format_number(s.width),
                    format_number(s.percent_slope),
                    format_number(s.curb_length),
                ];
                row.extend(s.snow_pack.iter().cloned());
                row
            })
            .collect(),
        Section::Subareas => tables
            .subareas
            .iter()
            .map(|s| {
                let mut row = vec![
                    s.subcatchment.clone(),
                    format_number(s.n_imperv),
                    format_number(s.n_perv),
                    format_number(s.s_imperv),
                    format_number(s.s_perv),
                    format_number(s.pct_zero),
                    s.route_to.clone(),
                ];
                row.extend(s.pct_routed.map(format_number));
                row
            })
            .collect(),
        Section::Infiltration => tables
            .infiltration
            .iter()
            .map(|i| {
                let mut row = vec![
                    i.subcatchment.clone(),
                    format_number(i.suction),
                    format_number(i.conductivity),
                    format_number(i.moisture_deficit),
                ];
                row.extend(i.param4.map(format_number));
                row.extend(i.param5.map(format_number));
                row.extend(i.method.iter().cloned());
                row
            })
            .collect(),
        Section::Junctions => tables
            .junctions
            .iter()
            .map(|j| {
                let mut row = vec![j.name.clone(), format_number(j.elevation)];
                row.extend(j.rest.iter().cloned());
                row
            })
            .collect(),
        Section::Timeseries => tables
            .timeseries
            .iter()
            .map(|t| match &t.data {
                TimeseriesData::Sample { date, time, value } => vec![
                    t.name.clone(),
                    date.clone().unwrap_or_default(),
                    time.clone(),
                    format_number(*value),
                ],
                TimeseriesData::File(path) => {
                    vec![t.name.clone(), "FILE".to_string(), path.clone()]
                }
            })
            .collect(),
        Section::Polygons => tables
            .polygons
            .iter()
            .map(|v| {
                vec![
                    v.subcatchment.clone(),
                    format_number(v.point.x),
                    format_number(v.point.y),
                ]
            })
            .collect(),
    }
}

fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows
        .iter()
        .map(|r| r.len())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .chain(header.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn align(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&format!("{:<width$}", cell, width = widths[i]));
    }
    line.trim_end().to_string()
}

/// Shortest decimal form that parses back to the same `f64`.
///
/// Rows already in the model are re-rendered on every section rewrite, so the
/// text must round-trip exactly.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}
