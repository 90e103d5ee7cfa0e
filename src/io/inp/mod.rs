mod reader;
mod writer;

pub use writer::format_number;

use crate::io::error::Error;
use crate::model::{section::Section, tables::Tables};
use std::io::{BufRead, Write};

/// A bracketed section and its raw body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block {
    pub header: String,
    /// 1-based line number of the header in the source text.
    pub header_line: usize,
    pub body: Vec<String>,
}

/// A model configuration file held as ordered, verbatim sections.
///
/// Only sections replaced through [`InpDocument::replace_section`] are
/// re-rendered; everything else, comments included, is written back as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InpDocument {
    pub(crate) preamble: Vec<String>,
    pub(crate) blocks: Vec<Block>,
}

impl InpDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<R: BufRead>(reader: R) -> Result<Self, Error> {
        reader::read(reader)
    }

    /// Parses the owned sections into a table snapshot.
    pub fn tables(&self) -> Result<Tables, Error> {
        reader::read_tables(self)
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<(), Error> {
        writer::write(writer, self)?;
        Ok(())
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.block(section).is_some()
    }

    /// Section headers in file order, as written.
    pub fn section_headers(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.header.as_str())
    }

    /// Replaces the body of `section` with the rendered table, appending the
    /// section at the end of the document when it does not exist yet.
    pub fn replace_section(&mut self, section: Section, tables: &Tables) {
        let body = writer::render_section(section, tables);

        match self.block_mut(section) {
            Some(block) => block.body = body,
            None => {
                tracing::warn!(section = %section, "section missing from model, appending it");
                if let Some(last) = self.blocks.last_mut() {
                    if last.body.last().is_some_and(|l| !l.trim().is_empty()) {
                        last.body.push(String::new());
                    }
                }
                let header_line = self.line_count() + 1;
                self.blocks.push(Block {
                    header: section.header().to_string(),
                    header_line,
                    body,
                });
            }
        }
    }

    /// Rendered text of one section, header included.
    pub fn section_text(&self, section: Section) -> Option<String> {
        self.block(section).map(|block| {
            let mut text = format!("{}\n", block.header);
            for line in &block.body {
                text.push_str(line);
                text.push('\n');
            }
            text
        })
    }

    pub(crate) fn block(&self, section: Section) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|b| Section::from_header(&b.header) == Some(section))
    }

    fn block_mut(&mut self, section: Section) -> Option<&mut Block> {
        self.blocks
            .iter_mut()
            .find(|b| Section::from_header(&b.header) == Some(section))
    }

    fn line_count(&self) -> usize {
        self.preamble.len() + self.blocks.iter().map(|b| 1 + b.body.len()).sum::<usize>()
    }
}
