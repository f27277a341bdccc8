// crates/usecase/src/orchestrator.rs
use std::path::PathBuf;

use textfix_domain::endings;
use textfix_domain::indent::{self, ConversionRequest};
use textfix_domain::version::{VersionInfo, update_for_path};
use textfix_ports::filesystem::{ProjectLocator, TextFileStore};
use textfix_ports::version_store::{VersionRecord, VersionStore};
use textfix_shared_kernel::{ApplicationError, Result};

use crate::dto::{
    BumpOutcome, BumpPlan, EndingsOutcome, EndingsPlan, IndentOutcome, IndentPlan,
    IndentRewriteSummary, RewriteSummary,
};

/// Report on a file's line endings and optionally rewrite them.
pub struct FixEndings<'a> {
    store: &'a dyn TextFileStore,
}

impl<'a> FixEndings<'a> {
    pub fn new(store: &'a dyn TextFileStore) -> Self {
        Self { store }
    }

    pub fn run(&self, plan: &EndingsPlan) -> Result<EndingsOutcome> {
        let buf = self.store.load(&plan.input)?;
        let counts = endings::scan(&buf);

        let rewrite = match plan.style {
            None => None,
            Some(choice) => {
                let style = choice.resolve(&counts);
                let normalized = endings::normalize(&buf, style);
                let output = plan.output_path().to_path_buf();
                self.store.save(&output, &normalized.output)?;
                Some(RewriteSummary {
                    output,
                    style,
                    lines: normalized.lines(),
                    terminators: normalized.written,
                })
            }
        };

        Ok(EndingsOutcome { input: plan.input.clone(), lines: counts.lines(), counts, rewrite })
    }
}

/// Report on a file's leading whitespace and optionally convert it.
pub struct ConvertIndentation<'a> {
    store: &'a dyn TextFileStore,
}

impl<'a> ConvertIndentation<'a> {
    pub fn new(store: &'a dyn TextFileStore) -> Self {
        Self { store }
    }

    pub fn run(&self, plan: &IndentPlan) -> Result<IndentOutcome> {
        let request = ConversionRequest { direction: plan.direction, tab_width: plan.tab_width };
        let buf = self.store.load(&plan.input)?;
        let text = String::from_utf8_lossy(&buf);
        let outcome = indent::convert(&text, &request);

        let rewrite = match (outcome.output, outcome.after) {
            (Some(converted), Some(after)) => {
                let output = plan.output_path().to_path_buf();
                self.store.save(&output, converted.as_bytes())?;
                Some(IndentRewriteSummary { output, after })
            }
            _ => None,
        };

        Ok(IndentOutcome { input: plan.input.clone(), before: outcome.before, rewrite })
    }
}

/// Advance the project version and rewrite every embedded version string.
pub struct BumpVersion<'a> {
    store: &'a dyn TextFileStore,
    locator: &'a dyn ProjectLocator,
    versions: &'a dyn VersionStore,
}

impl<'a> BumpVersion<'a> {
    pub fn new(
        store: &'a dyn TextFileStore,
        locator: &'a dyn ProjectLocator,
        versions: &'a dyn VersionStore,
    ) -> Self {
        Self { store, locator, versions }
    }

    pub fn run(&self, plan: &BumpPlan) -> Result<BumpOutcome> {
        let solution = self.locator.find_solution(&plan.start_dir)?.ok_or_else(|| {
            ApplicationError::ProjectRootNotFound { search_root: plan.start_dir.clone() }
        })?;

        let project_root =
            solution.parent().map_or_else(|| plan.start_dir.clone(), PathBuf::from);
        let file_name = solution.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let project_name = match file_name.split('.').next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(ApplicationError::ProjectNameUnresolved {
                    path: solution.clone(),
                    reason: "solution file name has no stem".to_string(),
                }
                .into());
            }
        };

        let version_file = project_root.join(format!("{project_name}.version"));
        let mut version = match self.versions.load(&version_file)? {
            Some(record) => record_to_version(record),
            None => VersionInfo::initial(plan.today),
        };
        version.advance(plan.today);

        let mut updated = Vec::new();
        let mut missing = Vec::new();
        for file in &version.files {
            let path = project_root.join(file);
            if !self.store.exists(&path) {
                missing.push(path);
                continue;
            }
            let contents = self.store.load(&path)?;
            let text = String::from_utf8_lossy(&contents);
            if let Some(rewritten) = update_for_path(&path, &text, &version, &project_name) {
                self.store.save(&path, rewritten.as_bytes())?;
                updated.push(path);
            }
        }

        self.versions.save(&version_file, &version_to_record(&version))?;

        Ok(BumpOutcome {
            project_root,
            project_name,
            version_file,
            version: version.full(),
            updated,
            missing,
        })
    }
}

fn record_to_version(record: VersionRecord) -> VersionInfo {
    VersionInfo {
        major: record.major,
        minor: record.minor,
        build: record.build,
        revision: record.revision,
        start_year: record.start_year,
        files: record.files,
    }
}

fn version_to_record(version: &VersionInfo) -> VersionRecord {
    VersionRecord {
        major: version.major,
        minor: version.minor,
        build: version.build,
        revision: version.revision,
        start_year: version.start_year,
        files: version.files.clone(),
    }
}
