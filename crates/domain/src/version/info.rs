// crates/domain/src/version/info.rs
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Persisted project version state plus the list of files carrying
/// embedded version strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
    pub start_year: i32,
    #[serde(default)]
    pub files: Vec<String>,
}

impl VersionInfo {
    /// State used when no version file exists yet.
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            major: 1,
            minor: 0,
            build: 0,
            revision: 0,
            start_year: today.year(),
            files: Vec::new(),
        }
    }

    /// Date code packing years-since-start, month and day into one number,
    /// e.g. start year 2012 on 2013-02-20 gives 20220.
    pub fn date_code(today: NaiveDate, start_year: i32) -> u32 {
        let years = today.year() - start_year + 1;
        (years * 10_000) as u32 + today.month() * 100 + today.day()
    }

    /// Advance for a build on `today`: a new date code resets the revision,
    /// another build on the same code increments it.
    pub fn advance(&mut self, today: NaiveDate) {
        let code = Self::date_code(today, self.start_year);
        if self.build == code {
            self.revision += 1;
        } else {
            self.revision = 0;
            self.build = code;
        }
    }

    pub fn full(&self) -> String {
        format!("{}.{}.{}.{}", self.major, self.minor, self.build, self.revision)
    }

    pub fn full_csv(&self) -> String {
        self.full().replace('.', ",")
    }

    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    pub fn major_minor_build(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.build)
    }

    pub fn build_revision(&self) -> String {
        format!("{}.{}", self.build, self.revision)
    }
}
