use std::fmt;

/// The model sections whose rows are parsed into [`Tables`](super::tables::Tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Raingages,
    Subcatchments,
    Subareas,
    Infiltration,
    Junctions,
    Timeseries,
    Polygons,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Raingages,
        Section::Subcatchments,
        Section::Subareas,
        Section::Infiltration,
        Section::Junctions,
        Section::Timeseries,
        Section::Polygons,
    ];

    /// Bracketed header as written in the file.
    pub fn header(&self) -> &'static str {
        match self {
            Section::Raingages => "[RAINGAGES]",
            Section::Subcatchments => "[SUBCATCHMENTS]",
            Section::Subareas => "[SUBAREAS]",
            Section::Infiltration => "[INFILTRATION]",
            Section::Junctions => "[JUNCTIONS]",
            Section::Timeseries => "[TIMESERIES]",
            Section::Polygons => "[POLYGONS]",
        }
    }

    pub fn from_header(header: &str) -> Option<Section> {
        let header = header.trim();
        Section::ALL
            .into_iter()
            .find(|s| s.header().eq_ignore_ascii_case(header))
    }

    /// Column names written in the `;;` comment row above the records.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Section::Raingages => &[
                "Name",
                "Format",
                "Interval",
                "SCF",
                "Source",
                "SourceName",
            ],
            Section::Subcatchments => &[
                "Name",
                "Raingage",
                "Outlet",
                "Area",
                "%Imperv",
                "Width",
                "%Slope",
                "CurbLen",
            ],
            Section::Subareas => &[
                "Subcatchment",
                "N-Imperv",
                "N-Perv",
                "S-Imperv",
                "S-Perv",
                "PctZero",
                "RouteTo",
            ],
            Section::Infiltration => &["Subcatchment", "Suction", "Ksat", "IMD", "Param4", "Param5"],
            Section::Junctions => &["Name", "Elevation", "MaxDepth", "InitDepth", "SurDepth", "Aponded"],
            Section::Timeseries => &["Name", "Date", "Time", "Value"],
            Section::Polygons => &["Subcatchment", "X-Coord", "Y-Coord"],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
