use crate::io::{self, InpFile};
use crate::model::subcatchment::{Infiltration, Subarea, Subcatchment, Vertex};
use crate::model::tables::Tables;
use crate::synth::{self, CatchmentRequest, SynthConfig, Synthesized};
use std::path::Path;

/// A model file opened for editing, with its parsed tables.
#[derive(Debug, Clone)]
pub struct Project {
    file: InpFile,
    tables: Tables,
}

/// One subcatchment together with its dependent rows.
#[derive(Debug, Clone, Copy)]
pub struct CatchmentView<'a> {
    pub subcatchment: &'a Subcatchment,
    pub subarea: Option<&'a Subarea>,
    pub infiltration: Option<&'a Infiltration>,
}

impl Project {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = InpFile::open(path)?;
        let tables = file.document().tables()?;
        Ok(Self { file, tables })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn file(&self) -> &InpFile {
        &self.file
    }

    pub fn subcatchment(&self, name: &str) -> Option<&Subcatchment> {
        self.tables.subcatchment(name)
    }

    pub fn catchment(&self, name: &str) -> Option<CatchmentView<'_>> {
        let subcatchment = self.tables.subcatchment(name)?;
        Some(CatchmentView {
            subcatchment,
            subarea: self.tables.subarea(name),
            infiltration: self.tables.infiltration_of(name),
        })
    }

    pub fn vertices_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Vertex> + 'a {
        self.tables.vertices_of(name)
    }

    /// Synthesizes one subcatchment and rewrites the affected sections on disk.
    pub fn add_catchment(
        &mut self,
        request: &CatchmentRequest,
        config: &SynthConfig,
    ) -> Result<Synthesized, synth::Error> {
        synth::synthesize(&mut self.tables, &mut self.file, request, config)
    }

    /// Runs the synthesis against an in-memory copy of the document and
    /// returns the resulting document; the file is left untouched.
    pub fn preview_catchment(
        &self,
        request: &CatchmentRequest,
        config: &SynthConfig,
    ) -> Result<(Synthesized, io::InpDocument), synth::Error> {
        let mut tables = self.tables.clone();
        let mut document = self.file.document().clone();
        let report = synth::synthesize(&mut tables, &mut document, request, config)?;
        Ok((report, document))
    }
}
