//! Catchment synthesis: allocates an identifier, bootstraps the raingage and
//! outlet a new subcatchment depends on, derives its hydrologic parameters
//! and footprint, and persists every affected section.

mod allocate;
mod bootstrap;
mod config;
mod derive;
mod error;
mod geometry;
mod params;
mod request;

pub use allocate::{ID_PREFIX, allocate_id};
pub use bootstrap::{DEFAULT_RAINGAGE, DEFAULT_TIMESERIES, Dependencies, resolve_outlet};
pub use config::SynthConfig;
pub use derive::{derive_infiltration, derive_subarea};
pub use error::Error;
pub use geometry::{DEFAULT_FOOTPRINT, footprint_vertices, next_footprint};
pub use params::{
    CoverParams, InfiltrationParams, ParameterTables, get_default_parameters, load_parameters,
};
pub use request::{CatchmentRequest, Stage, Synthesized};

use crate::io::SectionStore;
use crate::model::section::Section;
use crate::model::subcatchment::Subcatchment;
use crate::model::tables::{Tables, upsert};

/// Adds one subcatchment to `tables` and persists it through `store`.
///
/// Everything that can fail without touching the store (area validation,
/// parameter lookup, footprint placement) runs before the first section is
/// written. Sections are then rewritten one at a time, each right after its
/// rows are inserted; the first store failure stops the sequence.
pub fn synthesize<S: SectionStore + ?Sized>(
    tables: &mut Tables,
    store: &mut S,
    request: &CatchmentRequest,
    config: &SynthConfig,
) -> Result<Synthesized, Error> {
    let mut stage = Stage::Idle;
    let result = run(tables, store, request, config, &mut stage);

    match &result {
        Ok(report) => {
            enter(&mut stage, Stage::Done);
            tracing::info!(
                id = %report.id,
                raingage = %report.subcatchment.raingage,
                outlet = %report.subcatchment.outlet,
                sections = report.persisted.len(),
                "subcatchment synthesized"
            );
        }
        Err(e) => {
            let failed_in = stage;
            enter(&mut stage, Stage::Failed);
            tracing::warn!(stage = %failed_in, error = %e, "synthesis aborted");
        }
    }
    result
}

fn enter(stage: &mut Stage, next: Stage) {
    tracing::debug!(from = %stage, to = %next, "synthesis stage");
    *stage = next;
}

fn run<S: SectionStore + ?Sized>(
    tables: &mut Tables,
    store: &mut S,
    request: &CatchmentRequest,
    config: &SynthConfig,
    stage: &mut Stage,
) -> Result<Synthesized, Error> {
    if !request.area.is_finite() || request.area <= 0.0 {
        return Err(Error::InvalidArea(request.area));
    }

    enter(stage, Stage::Allocating);
    let id = allocate_id(tables);
    tracing::debug!(id = %id, existing = tables.subcatchment_count(), "identifier allocated");

    enter(stage, Stage::Bootstrapping);
    let deps = Dependencies::plan(tables, &id);
    if deps.creates_timeseries() {
        tracing::debug!(name = DEFAULT_TIMESERIES, "generating rainfall timeseries");
    }
    if deps.creates_raingage() {
        tracing::debug!(name = %deps.raingage, "creating raingage");
    }

    enter(stage, Stage::Deriving);
    let params = load_parameters(config.params.as_deref())?;
    let subcatchment = Subcatchment::new(
        id.as_str(),
        deps.raingage.as_str(),
        deps.outlet.as_str(),
        request.area,
        request.impervious,
        request.slope,
    );
    let subarea = derive_subarea(&id, &request.category, &params)?;
    let infiltration = derive_infiltration(&id, &params);
    let footprint = next_footprint(&tables.polygons)?;
    let vertices = footprint_vertices(&id, &footprint);

    enter(stage, Stage::Persisting);
    let mut persisted = Vec::with_capacity(6);

    if deps.insert_timeseries(tables) {
        persist(store, Section::Timeseries, tables, &mut persisted)?;
    }
    if deps.insert_raingage(tables) {
        persist(store, Section::Raingages, tables, &mut persisted)?;
    }

    upsert(&mut tables.subcatchments, subcatchment.clone());
    persist(store, Section::Subcatchments, tables, &mut persisted)?;

    upsert(&mut tables.subareas, subarea.clone());
    persist(store, Section::Subareas, tables, &mut persisted)?;

    tables.polygons.extend(vertices.iter().cloned());
    persist(store, Section::Polygons, tables, &mut persisted)?;

    upsert(&mut tables.infiltration, infiltration.clone());
    persist(store, Section::Infiltration, tables, &mut persisted)?;

    Ok(Synthesized {
        id,
        subcatchment,
        subarea,
        infiltration,
        vertices,
        created_timeseries: deps
            .creates_timeseries()
            .then(|| DEFAULT_TIMESERIES.to_string()),
        created_raingage: deps.new_raingage.map(|r| r.name),
        persisted,
    })
}

fn persist<S: SectionStore + ?Sized>(
    store: &mut S,
    section: Section,
    tables: &Tables,
    persisted: &mut Vec<Section>,
) -> Result<(), Error> {
    store
        .replace_section(section, tables)
        .map_err(|source| Error::persistence(section, source))?;
    tracing::debug!(section = %section, rows = row_count(section, tables), "section persisted");
    persisted.push(section);
    Ok(())
}

fn row_count(section: Section, tables: &Tables) -> usize {
    match section {
        Section::Raingages => tables.raingages.len(),
        Section::Subcatchments => tables.subcatchments.len(),
        Section::Subareas => tables.subareas.len(),
        Section::Infiltration => tables.infiltration.len(),
        Section::Junctions => tables.junctions.len(),
        Section::Timeseries => tables.timeseries.len(),
        Section::Polygons => tables.polygons.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::InpDocument;
    use crate::model::network::{Junction, Raingage};
    use crate::model::subcatchment::Point;
    use std::io::Cursor;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6
    }

    /// Store that records calls and fails on one section.
    #[derive(Default)]
    struct RecordingStore {
        calls: Vec<Section>,
        fail_on: Option<Section>,
    }

    impl SectionStore for RecordingStore {
        fn replace_section(
            &mut self,
            section: Section,
            _tables: &Tables,
        ) -> Result<(), crate::io::Error> {
            self.calls.push(section);
            if self.fail_on == Some(section) {
                return Err(std::io::Error::other("disk full").into());
            }
            Ok(())
        }
    }

    fn urban(area: f64) -> CatchmentRequest {
        CatchmentRequest::new(area, 1.5, 75.0, "urban")
    }

    #[test]
    fn empty_model_end_to_end() {
        let mut tables = Tables::new();
        let mut store = RecordingStore::default();
        let report = synthesize(&mut tables, &mut store, &urban(10.0), &SynthConfig::default())
            .unwrap();

        assert_eq!(report.id, "S1");
        assert_eq!(report.subcatchment.outlet, "S1");
        assert_eq!(report.subcatchment.raingage, "RG1");
        assert!(approx_eq(report.subcatchment.width, 316.227766));
        assert_eq!(report.subcatchment.curb_length, 0.0);

        let subarea = tables.subarea("S1").unwrap();
        assert_eq!(subarea.n_imperv, 0.013);
        assert_eq!(subarea.n_perv, 0.15);
        assert!(approx_eq(subarea.s_imperv, 1.27));
        assert!(approx_eq(subarea.s_perv, 5.08));
        assert_eq!(subarea.pct_zero, 90.0);

        let points: Vec<Point> = tables.vertices_of("S1").map(|v| v.point).collect();
        assert_eq!(points, DEFAULT_FOOTPRINT.to_vec());

        assert_eq!(tables.timeseries.len(), 12);
        assert_eq!(tables.timeseries_len(DEFAULT_TIMESERIES), 12);
        assert_eq!(tables.raingages.len(), 1);
        assert_eq!(tables.raingages[0].source_name, DEFAULT_TIMESERIES);
        assert!(tables.infiltration_of("S1").is_some());

        assert_eq!(report.created_timeseries.as_deref(), Some(DEFAULT_TIMESERIES));
        assert_eq!(report.created_raingage.as_deref(), Some("RG1"));
        let expected = vec![
            Section::Timeseries,
            Section::Raingages,
            Section::Subcatchments,
            Section::Subareas,
            Section::Polygons,
            Section::Infiltration,
        ];
        assert_eq!(report.persisted, expected);
        assert_eq!(store.calls, expected);
    }

    #[test]
    fn second_catchment_reuses_dependencies_and_stacks_below() {
        let mut tables = Tables::new();
        let mut store = RecordingStore::default();
        let config = SynthConfig::default();
        synthesize(&mut tables, &mut store, &urban(10.0), &config).unwrap();
        store.calls.clear();

        let request = CatchmentRequest::new(4.0, 35.0, 2.0, "forests");
        let report = synthesize(&mut tables, &mut store, &request, &config).unwrap();

        assert_eq!(report.id, "S2");
        assert_eq!(report.subcatchment.raingage, "RG1");
        assert_eq!(report.subcatchment.outlet, "S2");
        assert!(report.created_raingage.is_none());
        assert!(report.created_timeseries.is_none());
        assert_eq!(tables.timeseries.len(), 12);
        assert_eq!(tables.raingages.len(), 1);
        assert_eq!(
            store.calls,
            vec![
                Section::Subcatchments,
                Section::Subareas,
                Section::Polygons,
                Section::Infiltration,
            ]
        );

        let points: Vec<Point> = report.vertices.iter().map(|v| v.point).collect();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, -5.0),
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, -5.0),
            ]
        );
    }

    #[test]
    fn outlet_is_first_junction_when_present() {
        let mut tables = Tables::new();
        tables.junctions.push(Junction {
            name: "J1".to_string(),
            elevation: 10.0,
            rest: Vec::new(),
        });
        tables.raingages.push(Raingage::from_timeseries("G", "TS"));
        let mut store = RecordingStore::default();

        let report =
            synthesize(&mut tables, &mut store, &urban(1.0), &SynthConfig::default()).unwrap();
        assert_eq!(report.subcatchment.outlet, "J1");
        assert_eq!(report.subcatchment.raingage, "G");
        assert!(tables.timeseries.is_empty());
    }

    #[test]
    fn subcatchment_persistence_failure_stops_pipeline() {
        let mut tables = Tables::new();
        let mut store = RecordingStore {
            fail_on: Some(Section::Subcatchments),
            ..Default::default()
        };

        let err = synthesize(&mut tables, &mut store, &urban(3.0), &SynthConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Persistence {
                section: Section::Subcatchments,
                ..
            }
        ));
        assert_eq!(
            store.calls,
            vec![
                Section::Timeseries,
                Section::Raingages,
                Section::Subcatchments
            ]
        );
        assert!(tables.contains_subcatchment("S1"));
        assert!(tables.subareas.is_empty());
        assert!(tables.polygons.is_empty());
        assert!(tables.infiltration.is_empty());
    }

    #[test]
    fn unknown_category_writes_nothing() {
        let mut tables = Tables::new();
        let mut store = RecordingStore::default();
        let request = CatchmentRequest::new(1.0, 1.0, 1.0, "glacier");

        let err = synthesize(&mut tables, &mut store, &request, &SynthConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownLandCoverCategory(_)));
        assert!(store.calls.is_empty());
        assert_eq!(tables, Tables::new());
    }

    #[test]
    fn custom_table_without_category_is_rejected() {
        let config = SynthConfig::with_params(
            r#"
            [categories.forests]
            n_imperv = 0.4
            n_perv = 0.8
            s_imperv = 0.05
            s_perv = 0.3
            pct_zero = 5
            "#,
        );
        let mut tables = Tables::new();
        let mut store = RecordingStore::default();

        let err = synthesize(&mut tables, &mut store, &urban(1.0), &config).unwrap_err();
        assert!(matches!(err, Error::UnknownLandCoverCategory(ref key) if key == "urban"));
        assert!(store.calls.is_empty());
    }

    #[test]
    fn malformed_polygons_write_nothing() {
        let mut tables = Tables::new();
        tables
            .polygons
            .push(crate::model::subcatchment::Vertex::new("X", 0.0, 0.0));
        let before = tables.clone();
        let mut store = RecordingStore::default();

        let err = synthesize(&mut tables, &mut store, &urban(1.0), &SynthConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidGeometryState { vertices: 1, .. }));
        assert!(store.calls.is_empty());
        assert_eq!(tables, before);
    }

    #[test]
    fn rejects_non_positive_area() {
        let mut tables = Tables::new();
        let mut store = RecordingStore::default();
        for area in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = synthesize(&mut tables, &mut store, &urban(area), &SynthConfig::default())
                .unwrap_err();
            assert!(matches!(err, Error::InvalidArea(_)));
        }
        assert!(store.calls.is_empty());
    }

    #[test]
    fn document_store_round_trips_new_sections() {
        let input = "[TITLE]\ndemo model\n\n[OPTIONS]\nFLOW_UNITS CMS\n";
        let mut document = InpDocument::parse(Cursor::new(input)).unwrap();
        let mut tables = document.tables().unwrap();

        synthesize(&mut tables, &mut document, &urban(10.0), &SynthConfig::default()).unwrap();

        let mut out = Vec::new();
        document.write(&mut out).unwrap();
        let reparsed = InpDocument::parse(Cursor::new(out)).unwrap();
        let reread = reparsed.tables().unwrap();

        assert_eq!(reread.subcatchments.len(), 1);
        assert_eq!(reread.subcatchments[0].name, "S1");
        assert!(approx_eq(reread.subcatchments[0].width, 316.227766));
        assert_eq!(reread.timeseries.len(), 12);
        assert_eq!(reread.raingages[0].snow_catch, "1.0");
        assert_eq!(reread.polygons.len(), 4);
        assert!(reparsed.section_text(Section::Subareas).is_some());
        assert!(reparsed.has_section(Section::Infiltration));
    }

    #[test]
    fn existing_rows_survive_section_rewrites_unchanged() {
        let input = "\
[RAINGAGES]
RG1 INTENSITY 1:00 1.0 TIMESERIES storm

[SUBCATCHMENTS]
OLD RG1 J1 0.0000004 25 1.23456789 0.5 0

[SUBAREAS]
OLD 0.0123456789 0.15 1.27 7.619999999999999 90 OUTLET

[INFILTRATION]
OLD 3.14159265 0.5 0.25 7 0

[POLYGONS]
OLD 1.1111111 2.2222222
OLD 1.1111111 7.2222222
OLD 6.1111111 7.2222222
OLD 6.1111111 2.2222222
";
        let mut document = InpDocument::parse(Cursor::new(input)).unwrap();
        let mut tables = document.tables().unwrap();
        let before = tables.clone();

        let report =
            synthesize(&mut tables, &mut document, &urban(10.0), &SynthConfig::default()).unwrap();

        let mut out = Vec::new();
        document.write(&mut out).unwrap();
        let reread = InpDocument::parse(Cursor::new(out)).unwrap().tables().unwrap();

        assert_eq!(reread.subcatchments[0], before.subcatchments[0]);
        assert_eq!(reread.subcatchments[0].area, 0.000_000_4);
        assert_eq!(reread.subcatchments[0].width, 1.234_567_89);
        assert_eq!(reread.subareas[0], before.subareas[0]);
        assert_eq!(reread.infiltration[0], before.infiltration[0]);
        assert_eq!(reread.polygons[..4], before.polygons[..]);
        assert_eq!(reread.raingages, before.raingages);

        assert_eq!(reread.subcatchments[1], report.subcatchment);
        assert_eq!(reread.polygons[4..], report.vertices[..]);
    }
}
