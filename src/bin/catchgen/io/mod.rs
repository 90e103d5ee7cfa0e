use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use catchgen::InpDocument;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Writes a dry-run model to `output`, or to stdout when no path is given.
///
/// `output` may not name the model being previewed.
pub fn write_preview(document: &InpDocument, model: &Path, output: Option<&Path>) -> Result<()> {
    let Some(path) = output else {
        let mut out = BufWriter::new(io::stdout().lock());
        document
            .write(&mut out)
            .context("Failed to write updated model to stdout")?;
        return out.flush().context("Failed to flush stdout");
    };

    if same_file(path, model) {
        bail!(
            "Dry-run output {} is the model file itself; drop --dry-run to edit it in place",
            path.display()
        );
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    document
        .write(&mut out)
        .with_context(|| format!("Failed to write updated model: {}", path.display()))?;
    out.flush()
        .with_context(|| format!("Failed to write updated model: {}", path.display()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
