use anyhow::{Context, Result};

use catchgen::{CatchmentRequest, Classification, Project, Synthesized, classify};

use crate::cli::AddArgs;
use crate::config::build_synth_config;
use crate::display::{
    Context as DisplayContext, Progress, print_classification, print_model_summary,
    print_synthesized,
};
use crate::io::write_preview;

const TOTAL_STEPS: u8 = 3;

pub fn run_add(args: AddArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading model");
    let mut project = Project::open(&args.model)
        .with_context(|| format!("Failed to read model: {}", args.model.display()))?;
    let config = build_synth_config(args.params.as_deref())?;

    let read_substeps = build_read_substeps(&project, args.params.is_some());
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading model", &read_substeps_ref);

    if ctx.interactive {
        print_model_summary(project.tables());
    }

    progress.step("Classifying catchment");
    let classification = classify(args.land.land_form.into(), args.land.land_cover.into());
    let request = CatchmentRequest::from_classification(args.area, &classification);
    progress.complete_step("Classifying catchment", &[]);

    if ctx.interactive {
        print_classification(&classification);
    }

    progress.step("Synthesizing subcatchment");
    let report = if args.dry_run {
        let (report, document) = project
            .preview_catchment(&request, &config)
            .context("Subcatchment synthesis failed")?;

        write_preview(&document, &args.model, args.output.as_deref())?;
        report
    } else {
        project
            .add_catchment(&request, &config)
            .context("Subcatchment synthesis failed")?
    };

    let synth_substeps = build_synth_substeps(&report, &classification, args.dry_run);
    let synth_substeps_ref: Vec<&str> = synth_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Synthesizing subcatchment", &synth_substeps_ref);

    if ctx.interactive {
        print_synthesized(&report);
    }

    progress.finish(&if args.dry_run {
        format!("Previewed {} (model unchanged)", report.id)
    } else {
        format!("Added {} to {}", report.id, args.model.display())
    });

    if !ctx.interactive && !args.dry_run {
        println!("{}", report.id);
    }

    Ok(())
}

fn build_read_substeps(project: &Project, custom_params: bool) -> Vec<String> {
    let tables = project.tables();
    let mut steps = vec![
        format!("Parse {}", project.path().display()),
        format!(
            "{} subcatchments, {} junctions, {} raingages",
            tables.subcatchments.len(),
            tables.junctions.len(),
            tables.raingages.len()
        ),
    ];
    if custom_params {
        steps.push("Load custom parameter tables".to_string());
    }
    steps
}

fn build_synth_substeps(
    report: &Synthesized,
    classification: &Classification,
    dry_run: bool,
) -> Vec<String> {
    let mut steps = vec![format!("Allocate identifier {}", report.id)];

    if let Some(series) = &report.created_timeseries {
        steps.push(format!("Generate rainfall timeseries '{}'", series));
    }
    if let Some(gage) = &report.created_raingage {
        steps.push(format!("Create raingage '{}'", gage));
    }
    if report.subcatchment.outlet == report.id {
        steps.push("No junction found, outlet set to itself".to_string());
    } else {
        steps.push(format!("Drain to {}", report.subcatchment.outlet));
    }

    steps.push(format!(
        "Derive {} subarea parameters",
        classification.category
    ));

    let sections: Vec<String> = report.persisted.iter().map(|s| s.to_string()).collect();
    if dry_run {
        steps.push(format!("Render {} (model file unchanged)", sections.join(" ")));
    } else {
        steps.push(format!("Rewrite {}", sections.join(" ")));
    }

    steps
}
