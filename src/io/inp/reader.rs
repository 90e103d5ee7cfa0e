use super::{Block, InpDocument};
use crate::io::error::Error;
use crate::model::{
    network::{Junction, Raingage, TimeseriesData, TimeseriesEntry},
    section::Section,
    subcatchment::{Infiltration, Point, Subarea, Subcatchment, Vertex},
    tables::Tables,
};
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<InpDocument, Error> {
    let mut document = InpDocument::default();
    let mut current: Option<Block> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Io { source: e })?;
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            if let Some(block) = current.take() {
                document.blocks.push(block);
            }
            current = Some(Block {
                header: trimmed.to_string(),
                header_line: idx + 1,
                body: Vec::new(),
            });
            continue;
        }

        match current.as_mut() {
            Some(block) => block.body.push(line),
            None => document.preamble.push(line),
        }
    }

    if let Some(block) = current {
        document.blocks.push(block);
    }

    Ok(document)
}

pub fn read_tables(document: &InpDocument) -> Result<Tables, Error> {
    let mut tables = Tables::new();

    for section in Section::ALL {
        let Some(block) = document.block(section) else {
            continue;
        };

        for (line_no, tokens) in data_rows(block) {
            let row = Row {
                section,
                line: line_no,
                tokens: &tokens,
            };
            match section {
                Section::Raingages => tables.raingages.push(parse_raingage(&row)?),
                Section::Subcatchments => tables.subcatchments.push(parse_subcatchment(&row)?),
                Section::Subareas => tables.subareas.push(parse_subarea(&row)?),
                Section::Infiltration => tables.infiltration.push(parse_infiltration(&row)?),
                Section::Junctions => tables.junctions.push(parse_junction(&row)?),
                Section::Timeseries => tables.timeseries.extend(parse_timeseries(&row)?),
                Section::Polygons => tables.polygons.push(parse_vertex(&row)?),
            }
        }
    }

    Ok(tables)
}

/// Non-empty, non-comment body lines split into tokens, with inline `;` comments removed.
fn data_rows(block: &Block) -> Vec<(usize, Vec<&str>)> {
    block
        .body
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| {
            let content = raw.split(';').next().unwrap_or("");
            let tokens: Vec<&str> = content.split_whitespace().collect();
            if tokens.is_empty() {
                None
            } else {
                Some((block.header_line + i + 1, tokens))
            }
        })
        .collect()
}

struct Row<'a> {
    section: Section,
    line: usize,
    tokens: &'a [&'a str],
}

impl Row<'_> {
    fn require(&self, count: usize) -> Result<(), Error> {
        if self.tokens.len() < count {
            return Err(Error::parse(
                self.section,
                self.line,
                format!(
                    "expected at least {} fields, found {}",
                    count,
                    self.tokens.len()
                ),
            ));
        }
        Ok(())
    }

    fn text(&self, idx: usize) -> String {
        self.tokens[idx].to_string()
    }

    fn number(&self, idx: usize, what: &str) -> Result<f64, Error> {
        self.tokens[idx].parse::<f64>().map_err(|_| {
            Error::parse(
                self.section,
                self.line,
                format!("invalid {} '{}'", what, self.tokens[idx]),
            )
        })
    }

    fn optional_number(&self, idx: usize, what: &str) -> Result<Option<f64>, Error> {
        if idx < self.tokens.len() {
            self.number(idx, what).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn parse_raingage(row: &Row<'_>) -> Result<Raingage, Error> {
    row.require(6)?;
    Ok(Raingage {
        name: row.text(0),
        format: row.text(1),
        interval: row.text(2),
        snow_catch: row.text(3),
        source: row.text(4),
        source_name: row.text(5),
        extra: row.tokens[6..].iter().map(|t| t.to_string()).collect(),
    })
}

fn parse_subcatchment(row: &Row<'_>) -> Result<Subcatchment, Error> {
    row.require(8)?;
    Ok(Subcatchment {
        name: row.text(0),
        raingage: row.text(1),
        outlet: row.text(2),
        area: row.number(3, "area")?,
        percent_impervious: row.number(4, "percent impervious")?,
        width: row.number(5, "width")?,
        percent_slope: row.number(6, "percent slope")?,
        curb_length: row.number(7, "curb length")?,
        snow_pack: row.tokens.get(8).map(|t| t.to_string()),
    })
}

fn parse_subarea(row: &Row<'_>) -> Result<Subarea, Error> {
    row.require(7)?;
    Ok(Subarea {
        subcatchment: row.text(0),
        n_imperv: row.number(1, "N-Imperv")?,
        n_perv: row.number(2, "N-Perv")?,
        s_imperv: row.number(3, "S-Imperv")?,
        s_perv: row.number(4, "S-Perv")?,
        pct_zero: row.number(5, "PctZero")?,
        route_to: row.text(6),
        pct_routed: row.optional_number(7, "PctRouted")?,
    })
}

fn parse_infiltration(row: &Row<'_>) -> Result<Infiltration, Error> {
    row.require(4)?;

    // SWMM 5.2 allows a trailing method keyword after the numeric parameters.
    let mut numeric_end = row.tokens.len();
    let method = match row.tokens.last() {
        Some(last) if numeric_end > 4 && last.parse::<f64>().is_err() => {
            numeric_end -= 1;
            Some(last.to_string())
        }
        _ => None,
    };

    let optional = |idx: usize, what: &str| -> Result<Option<f64>, Error> {
        if idx < numeric_end {
            row.number(idx, what).map(Some)
        } else {
            Ok(None)
        }
    };

    Ok(Infiltration {
        subcatchment: row.text(0),
        suction: row.number(1, "suction head")?,
        conductivity: row.number(2, "conductivity")?,
        moisture_deficit: row.number(3, "moisture deficit")?,
        param4: optional(4, "fourth parameter")?,
        param5: optional(5, "fifth parameter")?,
        method,
    })
}

fn parse_junction(row: &Row<'_>) -> Result<Junction, Error> {
    row.require(2)?;
    Ok(Junction {
        name: row.text(0),
        elevation: row.number(1, "elevation")?,
        rest: row.tokens[2..].iter().map(|t| t.to_string()).collect(),
    })
}

/// A timeseries line holds either `Name FILE Path` or any number of
/// `[Date] Time Value` groups. A date applies to the pairs after it on the
/// same line.
fn parse_timeseries(row: &Row<'_>) -> Result<Vec<TimeseriesEntry>, Error> {
    row.require(3)?;
    let name = row.text(0);

    if row.tokens[1].eq_ignore_ascii_case("FILE") {
        return Ok(vec![TimeseriesEntry {
            name,
            data: TimeseriesData::File(row.text(2)),
        }]);
    }

    let mut entries = Vec::new();
    let mut date: Option<String> = None;
    let mut idx = 1;

    while idx < row.tokens.len() {
        if is_date(row.tokens[idx]) {
            date = Some(row.text(idx));
            idx += 1;
            continue;
        }
        if idx + 1 >= row.tokens.len() {
            return Err(Error::parse(
                row.section,
                row.line,
                format!("time '{}' has no value", row.tokens[idx]),
            ));
        }
        entries.push(TimeseriesEntry {
            name: name.clone(),
            data: TimeseriesData::Sample {
                date: date.clone(),
                time: row.text(idx),
                value: row.number(idx + 1, "value")?,
            },
        });
        idx += 2;
    }

    if entries.is_empty() {
        return Err(Error::parse(
            row.section,
            row.line,
            "expected at least one time/value pair",
        ));
    }

    Ok(entries)
}

/// `MM/DD/YYYY` or `MMM-DD-YYYY`; times and values never contain two dashes.
fn is_date(token: &str) -> bool {
    token.contains('/') || token.matches('-').count() == 2
}

fn parse_vertex(row: &Row<'_>) -> Result<Vertex, Error> {
    row.require(3)?;
    Ok(Vertex {
        subcatchment: row.text(0),
        point: Point::new(row.number(1, "x coordinate")?, row.number(2, "y coordinate")?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
[TITLE]
;;Project Title/Notes
demo

[RAINGAGES]
;;Name Format Interval SCF Source
RG7 INTENSITY 0:15 1.0 TIMESERIES storm
RGF VOLUME 1:00 1.0 FILE rain.dat STA01 MM

[SUBCATCHMENTS]
;;Name Raingage Outlet Area %Imperv Width %Slope CurbLen SnowPack
S1 RG7 J1 10 25 316.2 0.5 0
S2 RG7 J1 2.5 40 158.1 1.5 0 pack1 ; inline comment

[subareas]
S1 0.013 0.15 1.27 5.08 90 OUTLET
S2 0.013 0.24 1.27 5.08 80 PERVIOUS 50

[INFILTRATION]
S1 3.5 0.5 0.25 7 0
S2 3.0 0.5 4 GREEN_AMPT

[JUNCTIONS]
J1 96 4 0 0 0

[TIMESERIES]
storm 1:00 0.5
storm 01/01/2024 2:00 1.25
design FILE design.dat

[POLYGONS]
S1 0 0
S1 0 5
S1 5 5
S1 5 0
";

    fn sample_tables() -> Tables {
        let document = read(Cursor::new(SAMPLE)).expect("read document");
        read_tables(&document).expect("parse tables")
    }

    #[test]
    fn reads_blocks_and_keeps_unknown_sections() {
        let document = read(Cursor::new(SAMPLE)).unwrap();
        assert!(document.preamble.is_empty());
        assert_eq!(document.blocks.len(), 8);
        assert_eq!(document.blocks[0].header, "[TITLE]");
        assert_eq!(document.blocks[0].header_line, 1);
    }

    #[test]
    fn parses_subcatchments_with_optional_snow_pack() {
        let tables = sample_tables();
        assert_eq!(tables.subcatchments.len(), 2);

        let s1 = &tables.subcatchments[0];
        assert_eq!(s1.name, "S1");
        assert_eq!(s1.raingage, "RG7");
        assert_eq!(s1.outlet, "J1");
        assert_eq!(s1.area, 10.0);
        assert!(s1.snow_pack.is_none());

        assert_eq!(tables.subcatchments[1].snow_pack.as_deref(), Some("pack1"));
    }

    #[test]
    fn section_headers_match_case_insensitively() {
        let tables = sample_tables();
        assert_eq!(tables.subareas.len(), 2);
        assert_eq!(tables.subareas[1].route_to, "PERVIOUS");
        assert_eq!(tables.subareas[1].pct_routed, Some(50.0));
    }

    #[test]
    fn parses_infiltration_with_trailing_method() {
        let tables = sample_tables();
        let s1 = &tables.infiltration[0];
        assert_eq!(s1.param4, Some(7.0));
        assert_eq!(s1.param5, Some(0.0));
        assert!(s1.method.is_none());

        let s2 = &tables.infiltration[1];
        assert_eq!(s2.moisture_deficit, 4.0);
        assert_eq!(s2.param4, None);
        assert_eq!(s2.method.as_deref(), Some("GREEN_AMPT"));
    }

    #[test]
    fn parses_raingage_extras_and_timeseries_forms() {
        let tables = sample_tables();
        assert_eq!(tables.raingages[0].source_name, "storm");
        assert_eq!(tables.raingages[1].extra, vec!["STA01", "MM"]);

        assert_eq!(tables.timeseries.len(), 3);
        assert_eq!(
            tables.timeseries[1].data,
            TimeseriesData::Sample {
                date: Some("01/01/2024".into()),
                time: "2:00".into(),
                value: 1.25,
            }
        );
        assert_eq!(
            tables.timeseries[2].data,
            TimeseriesData::File("design.dat".into())
        );
    }

    #[test]
    fn timeseries_line_may_hold_several_pairs() {
        let input = "\
[TIMESERIES]
TS1 0:00 0.0 1:00 0.5 2:00 0.8
TS2 06/01/2024 0:00 1 1:00 2 06/02/2024 0:00 3
";
        let document = read(Cursor::new(input)).unwrap();
        let tables = read_tables(&document).unwrap();

        assert_eq!(tables.timeseries_len("TS1"), 3);
        assert_eq!(
            tables.timeseries[2].data,
            TimeseriesData::Sample {
                date: None,
                time: "2:00".into(),
                value: 0.8,
            }
        );

        let dates: Vec<_> = tables
            .timeseries
            .iter()
            .filter(|t| t.name == "TS2")
            .map(|t| match &t.data {
                TimeseriesData::Sample { date, time, .. } => (date.clone().unwrap(), time.clone()),
                other => panic!("unexpected row {other:?}"),
            })
            .collect();
        assert_eq!(
            dates,
            vec![
                ("06/01/2024".to_string(), "0:00".to_string()),
                ("06/01/2024".to_string(), "1:00".to_string()),
                ("06/02/2024".to_string(), "0:00".to_string()),
            ]
        );
    }

    #[test]
    fn timeseries_time_without_value_is_rejected() {
        let input = "[TIMESERIES]\nTS1 0:00 0.0 1:00\n";
        let document = read(Cursor::new(input)).unwrap();
        let err = read_tables(&document).unwrap_err();
        assert!(err.to_string().contains("has no value"));
    }

    #[test]
    fn parses_junctions_and_polygons_in_file_order() {
        let tables = sample_tables();
        assert_eq!(tables.first_junction(), Some("J1"));
        let ys: Vec<_> = tables.polygons.iter().map(|v| v.point.y).collect();
        assert_eq!(ys, vec![0.0, 5.0, 5.0, 0.0]);
    }

    #[test]
    fn missing_sections_yield_empty_tables() {
        let document = read(Cursor::new("[TITLE]\nnothing here\n")).unwrap();
        let tables = read_tables(&document).unwrap();
        assert_eq!(tables, Tables::new());
    }

    #[test]
    fn malformed_number_reports_section_and_line() {
        let input = "[SUBCATCHMENTS]\n;;header\nS1 RG1 J1 ten 25 316 0.5 0\n";
        let document = read(Cursor::new(input)).unwrap();
        let err = read_tables(&document).unwrap_err();
        match err {
            Error::Parse {
                section,
                line,
                details,
            } => {
                assert_eq!(section, Section::Subcatchments);
                assert_eq!(line, 3);
                assert!(details.contains("area"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_row_is_rejected() {
        let input = "[POLYGONS]\nS1 0\n";
        let document = read(Cursor::new(input)).unwrap();
        let err = read_tables(&document).unwrap_err();
        assert!(err.to_string().contains("expected at least 3 fields"));
    }
}
