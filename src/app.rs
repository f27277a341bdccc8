// src/app.rs
use anyhow::{Context, Result};
use chrono::Local;

use textfix_infra::{JsonVersionStore, LocalFileStore, SolutionLocator};
use textfix_shared_kernel::TabWidth;
use textfix_usecase::{
    BumpPlan, BumpVersion, ConvertIndentation, EndingsPlan, FixEndings, IndentPlan,
};

use crate::cli::args::{Args, Command};
use crate::presentation;

pub fn run(args: Args) -> Result<()> {
    if !args.no_logo {
        presentation::print_logo(&args.command);
    }

    let store = LocalFileStore;

    match args.command {
        Command::Endings { file, output, fix } => {
            let plan = EndingsPlan { input: file, output, style: fix.map(Into::into) };
            let outcome = FixEndings::new(&store).run(&plan)?;
            presentation::print_endings(&outcome, args.json)?;
        }
        Command::Indent { file, output, mode, tab_size } => {
            // Validated before any file is opened.
            let tab_width = TabWidth::new(tab_size)?;
            let plan =
                IndentPlan { input: file, output, direction: mode.map(Into::into), tab_width };
            let outcome = ConvertIndentation::new(&store).run(&plan)?;
            presentation::print_indent(&outcome, args.json)?;
        }
        Command::Bump { dir } => {
            let start_dir = match dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("resolving current directory")?,
            };
            let locator = SolutionLocator;
            let versions = JsonVersionStore;
            let plan = BumpPlan { start_dir, today: Local::now().date_naive() };
            let outcome = BumpVersion::new(&store, &locator, &versions).run(&plan)?;
            presentation::print_bump(&outcome, args.json)?;
        }
    }

    Ok(())
}
