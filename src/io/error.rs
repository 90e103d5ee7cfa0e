use crate::model::section::Section;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {section} row: {details} (at line {line})")]
    Parse {
        section: Section,
        line: usize,
        details: String,
    },
}

impl Error {
    pub fn parse(section: Section, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            section,
            line,
            details: details.into(),
        }
    }
}
