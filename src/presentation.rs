// src/presentation.rs
use anyhow::Result;
use textfix_usecase::{BumpOutcome, EndingsOutcome, IndentOutcome};

use crate::cli::args::Command;

pub fn print_logo(command: &Command) {
    let what = match command {
        Command::Endings { .. } => "text line ending fixer",
        Command::Indent { .. } => "tab/spaces converter",
        Command::Bump { .. } => "version number maintainer",
    };
    println!("textfix {what}. Version {}", crate::VERSION);
}

pub fn print_endings(outcome: &EndingsOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let mut line = format!(
        "{} lines={}, cr={}, lf={}, crlf={}",
        outcome.input.display(),
        outcome.lines.value(),
        outcome.counts.cr,
        outcome.counts.lf,
        outcome.counts.crlf
    );
    if let Some(rewrite) = &outcome.rewrite {
        line.push_str(&format!(
            " -> {}, lines={}, {}={}",
            rewrite.output.display(),
            rewrite.lines.value(),
            rewrite.style,
            rewrite.terminators
        ));
    }
    println!("{line}");
    Ok(())
}

pub fn print_indent(outcome: &IndentOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let mut line = format!(
        "tabs={}, spaces={}",
        outcome.before.tabs.value(),
        outcome.before.spaces.value()
    );
    if let Some(rewrite) = &outcome.rewrite {
        line.push_str(&format!(
            " -> tabs={}, spaces={}",
            rewrite.after.tabs.value(),
            rewrite.after.spaces.value()
        ));
    }
    println!("{line}");
    Ok(())
}

pub fn print_bump(outcome: &BumpOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!("Project root is '{}'", outcome.project_root.display());
    println!("Version file is '{}'", outcome.version_file.display());
    println!("New version is {}", outcome.version);
    println!("Updating version information in files:");
    for path in &outcome.updated {
        println!("{}", path.display());
    }
    for path in &outcome.missing {
        println!("File '{}' does not exist", path.display());
    }
    Ok(())
}
