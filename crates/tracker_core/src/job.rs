use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub type JobId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkMode {
    pub const ALL: [WorkMode; 3] = [WorkMode::Remote, WorkMode::Hybrid, WorkMode::Onsite];

    pub fn label(self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
            WorkMode::Onsite => "Onsite",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == value.trim())
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Experience band a listing is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Experience {
    Fresher,
    #[serde(rename = "0-1")]
    UpToOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::Fresher,
        Experience::UpToOne,
        Experience::OneToThree,
        Experience::ThreeToFive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Experience::Fresher => "Fresher",
            Experience::UpToOne => "0-1",
            Experience::OneToThree => "1-3",
            Experience::ThreeToFive => "3-5",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|band| band.label() == value.trim())
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobSource {
    LinkedIn,
    Naukri,
    Indeed,
}

impl JobSource {
    pub const ALL: [JobSource; 3] = [JobSource::LinkedIn, JobSource::Naukri, JobSource::Indeed];

    pub fn label(self) -> &'static str {
        match self {
            JobSource::LinkedIn => "LinkedIn",
            JobSource::Naukri => "Naukri",
            JobSource::Indeed => "Indeed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|source| source.label() == value.trim())
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single listing from the read-only catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Empty when the listing carries no id; such a job can be shown but not acted on.
    #[serde(default)]
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub mode: WorkMode,
    pub experience: Experience,
    pub source: JobSource,
    /// Free text; see [`crate::salary_midpoint`] for the encodings understood.
    pub salary_range: String,
    pub posted_days_ago: u32,
    pub description: String,
    pub skills: Vec<String>,
    pub apply_url: String,
}

/// Ordered, shared, immutable job catalog supplied at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    jobs: Arc<[Job]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs: jobs.into() }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// First job carrying `id`. Duplicate ids resolve to the earliest entry;
    /// the empty id never resolves.
    pub fn find(&self, id: &str) -> Option<&Job> {
        if id.is_empty() {
            return None;
        }
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Distinct locations in catalog order.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for job in self.jobs.iter() {
            if !seen.contains(&job.location.as_str()) {
                seen.push(&job.location);
            }
        }
        seen
    }
}

impl From<Vec<Job>> for Catalog {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_labels_parse_back() {
        for mode in WorkMode::ALL {
            assert_eq!(WorkMode::parse(mode.label()), Some(mode));
        }
        for band in Experience::ALL {
            assert_eq!(Experience::parse(band.label()), Some(band));
        }
        for source in JobSource::ALL {
            assert_eq!(JobSource::parse(source.label()), Some(source));
        }
        assert_eq!(WorkMode::parse("all"), None);
        assert_eq!(Experience::parse("10+"), None);
    }

    #[test]
    fn job_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": "j1",
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Pune",
            "mode": "Hybrid",
            "experience": "1-3",
            "source": "Naukri",
            "salaryRange": "8-12 LPA",
            "postedDaysAgo": 3,
            "description": "Build services",
            "skills": ["Rust", "SQL"],
            "applyUrl": "https://example.com/apply/j1"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.experience, Experience::OneToThree);
        assert_eq!(job.source, JobSource::Naukri);
        assert_eq!(job.posted_days_ago, 3);
        assert_eq!(job.apply_url, "https://example.com/apply/j1");
    }

    #[test]
    fn missing_id_decodes_empty_and_never_resolves() {
        let json = r#"{
            "title": "Unlabelled Role",
            "company": "Acme",
            "location": "Pune",
            "mode": "Onsite",
            "experience": "Fresher",
            "source": "Indeed",
            "salaryRange": "Negotiable",
            "postedDaysAgo": 0,
            "description": "",
            "skills": [],
            "applyUrl": "https://example.com"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "");
        let catalog = Catalog::new(vec![job]);
        assert!(catalog.find("").is_none());
        assert!(!catalog.contains(""));
    }
}
