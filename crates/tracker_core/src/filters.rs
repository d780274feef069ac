use crate::{Experience, Job, JobSource, WorkMode};

/// Control value meaning "no constraint on this dimension".
pub const ALL_SENTINEL: &str = "all";

/// One filter dimension: either unconstrained or an exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Exactly(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Exactly(wanted) => wanted == value,
        }
    }
}

impl<T> Choice<T> {
    /// Parses a select value; the sentinel, blank input, and anything `parse`
    /// rejects all mean "no constraint".
    pub fn from_control(value: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_SENTINEL {
            return Choice::All;
        }
        parse(value).map_or(Choice::All, Choice::Exactly)
    }

    pub fn exact(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Exactly(value) => Some(value),
        }
    }

    /// The select value that reproduces this choice.
    pub fn control_value<'a>(&'a self, label: impl FnOnce(&'a T) -> &'a str) -> &'a str {
        match self {
            Choice::All => ALL_SENTINEL,
            Choice::Exactly(value) => label(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most recent first.
    #[default]
    Latest,
    /// Highest match score first.
    Match,
    /// Highest salary midpoint first.
    SalaryHigh,
    /// Lowest salary midpoint first.
    SalaryLow,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Latest,
        SortMode::Match,
        SortMode::SalaryHigh,
        SortMode::SalaryLow,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SortMode::Latest => "latest",
            SortMode::Match => "match",
            SortMode::SalaryHigh => "salary-high",
            SortMode::SalaryLow => "salary-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Latest => "Latest",
            SortMode::Match => "Match Score",
            SortMode::SalaryHigh => "Salary: High to Low",
            SortMode::SalaryLow => "Salary: Low to High",
        }
    }

    /// `salary` is accepted as the older name of `salary-high`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "salary" => Some(SortMode::SalaryHigh),
            other => Self::ALL.into_iter().find(|mode| mode.value() == other),
        }
    }
}

/// Ephemeral dashboard filter state; reset on every load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub keyword: String,
    pub location: Choice<String>,
    pub mode: Choice<WorkMode>,
    pub experience: Choice<Experience>,
    pub source: Choice<JobSource>,
    pub sort: SortMode,
    /// Drop jobs scoring below the preference threshold.
    pub only_matches: bool,
}

impl Filters {
    /// Keyword and exact-match dimensions; the score threshold is applied by the pipeline.
    pub fn admits(&self, job: &Job) -> bool {
        self.keyword_matches(job)
            && self.location.admits(&job.location)
            && self.mode.admits(&job.mode)
            && self.experience.admits(&job.experience)
            && self.source.admits(&job.source)
    }

    fn keyword_matches(&self, job: &Job) -> bool {
        let needle = self.keyword.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        format!("{} {}", job.title, job.company)
            .to_lowercase()
            .contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_blank_mean_all() {
        assert_eq!(Choice::from_control("all", WorkMode::parse), Choice::All);
        assert_eq!(Choice::from_control("  ", WorkMode::parse), Choice::All);
        assert_eq!(Choice::from_control("Spaceship", WorkMode::parse), Choice::All);
        assert_eq!(
            Choice::from_control("Hybrid", WorkMode::parse),
            Choice::Exactly(WorkMode::Hybrid)
        );
    }

    #[test]
    fn control_value_round_trips() {
        let choice = Choice::Exactly(JobSource::Indeed);
        assert_eq!(choice.control_value(|s| s.label()), "Indeed");
        let all: Choice<JobSource> = Choice::All;
        assert_eq!(all.control_value(|s| s.label()), ALL_SENTINEL);
    }

    #[test]
    fn sort_names_from_every_iteration_parse() {
        assert_eq!(SortMode::parse("latest"), Some(SortMode::Latest));
        assert_eq!(SortMode::parse("match"), Some(SortMode::Match));
        assert_eq!(SortMode::parse("salary"), Some(SortMode::SalaryHigh));
        assert_eq!(SortMode::parse("salary-high"), Some(SortMode::SalaryHigh));
        assert_eq!(SortMode::parse("salary-low"), Some(SortMode::SalaryLow));
        assert_eq!(SortMode::parse("oldest"), None);
    }
}
