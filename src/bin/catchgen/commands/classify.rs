use anyhow::Result;

use catchgen::classify;

use crate::cli::ClassifyArgs;
use crate::display::{Context as DisplayContext, print_classification, write_classification};

pub fn run_classify(args: ClassifyArgs, ctx: DisplayContext) -> Result<()> {
    let classification = classify(args.land.land_form.into(), args.land.land_cover.into());

    if ctx.interactive {
        print_classification(&classification);
    } else {
        write_classification(&mut std::io::stdout().lock(), &classification)?;
    }

    Ok(())
}
