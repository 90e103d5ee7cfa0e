use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        collector.collect_synth_hints(err);
        collector.collect_io_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use catchgen::io::Error as IoError;

        let Some(io_err) = err.chain().find_map(|e| e.downcast_ref::<IoError>()) else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { section, line, .. } => {
                self.add(format!("Malformed row in {} near line {}", section, line));
                self.add(format!("Expected columns: {}", section.columns().join(" ")));
                self.add("Comment lines must start with ';'");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the model file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the model file");
                self.add("The file must be readable and writable");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("Export the model from SWMM as a plain .inp file");
            }

            ErrorKind::WriteZero | ErrorKind::StorageFull => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_synth_hints(&mut self, err: &Error) {
        use catchgen::SynthError;

        let Some(synth_err) = err.downcast_ref::<SynthError>() else {
            return;
        };

        self.mark_typed();

        match synth_err {
            SynthError::ParameterParse(_) => {
                self.add("Parameter table file has invalid TOML syntax");
                self.add("Each [categories.<name>] table needs n_imperv, n_perv, s_imperv, s_perv and pct_zero");
            }

            SynthError::InvalidArea(_) => {
                self.add("Pass a positive catchment area with --area");
            }

            SynthError::UnknownLandCoverCategory(key) => {
                self.add(format!("No parameter entry for category '{}'", key));
                self.add(format!("Add a [categories.{}] table to the --params file", key));
                self.add("Or omit --params to use the built-in tables");
            }

            SynthError::InvalidGeometryState { vertices, .. } => {
                self.add(format!(
                    "The [POLYGONS] section holds {} vertices; every subcatchment needs exactly 4",
                    vertices
                ));
                self.add("Fix or remove the incomplete polygon, then retry");
                self.add("Nothing was written to the model file");
            }

            SynthError::Persistence { section, .. } => {
                self.add(format!("Sections written before {} are already on disk", section));
                self.add(format!("Inspect {} in the model file", section));
                self.add("Reload the model before retrying; the operation is not rolled back");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("doesn't exist") {
            self.add("Subcatchment names are case-sensitive");
            self.add("List the [SUBCATCHMENTS] section to see available names");
        } else if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
        } else if msg.contains("permission denied") {
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
