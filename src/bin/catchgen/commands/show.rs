use anyhow::{Context, Result, bail};

use catchgen::Project;

use crate::cli::ShowArgs;
use crate::display::{Context as DisplayContext, print_catchment};

pub fn run_show(args: ShowArgs, _ctx: DisplayContext) -> Result<()> {
    let project = Project::open(&args.model)
        .with_context(|| format!("Failed to read model: {}", args.model.display()))?;

    let Some(view) = project.catchment(&args.name) else {
        bail!("Subcatchment with name: {} doesn't exist", args.name);
    };

    let vertices: Vec<_> = project.vertices_of(&args.name).collect();
    print_catchment(&mut std::io::stdout().lock(), &view, &vertices)?;

    Ok(())
}
