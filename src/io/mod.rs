//! Reading and rewriting model configuration files.
//!
//! A model file is a plain-text document of bracketed sections (`[SUBCATCHMENTS]`,
//! `[POLYGONS]`, ...). [`InpDocument`] keeps every section verbatim and
//! re-renders only the sections that are explicitly replaced. [`InpFile`]
//! ties a document to its backing path and rewrites the file on every
//! replacement.
//!
//! Persistence goes through the [`SectionStore`] seam so the synthesis
//! pipeline can run against a file, an in-memory document, or a test double.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub mod error;
mod inp;

pub use error::Error;
pub use inp::{InpDocument, format_number};

use crate::model::{section::Section, tables::Tables};

/// Destination for whole-section rewrites.
pub trait SectionStore {
    /// Replaces the named section with the current contents of its table.
    fn replace_section(&mut self, section: Section, tables: &Tables) -> Result<(), Error>;
}

impl SectionStore for InpDocument {
    fn replace_section(&mut self, section: Section, tables: &Tables) -> Result<(), Error> {
        InpDocument::replace_section(self, section, tables);
        Ok(())
    }
}

/// A model document bound to the file it was read from.
#[derive(Debug, Clone)]
pub struct InpFile {
    path: PathBuf,
    document: InpDocument,
}

impl InpFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let document = InpDocument::parse(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), sections = document.blocks.len(), "model file loaded");
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &InpDocument {
        &self.document
    }

    /// Writes the whole document back to the backing file.
    pub fn save(&self) -> Result<(), Error> {
        let file = File::create(&self.path)?;
        self.document.write(BufWriter::new(file))
    }
}

impl SectionStore for InpFile {
    fn replace_section(&mut self, section: Section, tables: &Tables) -> Result<(), Error> {
        self.document.replace_section(section, tables);
        self.save()?;
        tracing::debug!(section = %section, path = %self.path.display(), "section rewritten");
        Ok(())
    }
}
