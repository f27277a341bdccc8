// src/main.rs
#![allow(clippy::multiple_crate_versions)]

mod app;
mod cli;
mod presentation;

use std::process::ExitCode;

use clap::Parser;

use cli::args::Args;

pub(crate) const VERSION: &str = "0.3.2";

fn main() -> ExitCode {
    let args = Args::parse();

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
