mod add;
mod classify;
mod show;

use add::run_add;
use classify::run_classify;
use show::run_show;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Add(args) => run_add(args, ctx),
        Command::Show(args) => run_show(args, ctx),
        Command::Classify(args) => run_classify(args, ctx),
    }
}
