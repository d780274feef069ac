use std::cmp::Ordering;

use crate::{match_score, salary_midpoint, Filters, Job, Preferences, SavedJobs, SortMode};

pub const DIGEST_LIMIT: usize = 10;

/// A catalog entry paired with its derived sort keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredJob<'a> {
    pub job: &'a Job,
    pub score: u8,
    pub salary_midpoint: f64,
}

impl<'a> ScoredJob<'a> {
    pub fn new(job: &'a Job, prefs: &Preferences) -> Self {
        Self {
            job,
            score: match_score(job, prefs),
            salary_midpoint: salary_midpoint(&job.salary_range),
        }
    }
}

/// Dashboard view of the catalog: keyword, exact-match and threshold filters,
/// then a stable sort by the selected key.
pub fn filter_jobs<'a>(
    jobs: &'a [Job],
    filters: &Filters,
    prefs: &Preferences,
) -> Vec<ScoredJob<'a>> {
    let mut view: Vec<ScoredJob<'a>> = jobs
        .iter()
        .filter(|job| filters.admits(job))
        .map(|job| ScoredJob::new(job, prefs))
        .filter(|scored| !filters.only_matches || scored.score >= prefs.min_match_score)
        .collect();
    sort_jobs(&mut view, filters.sort);
    view
}

/// Stable in-place sort; equal keys keep their current relative order.
pub fn sort_jobs(view: &mut [ScoredJob<'_>], mode: SortMode) {
    match mode {
        SortMode::Latest => view.sort_by_key(|scored| scored.job.posted_days_ago),
        SortMode::Match => view.sort_by(|a, b| b.score.cmp(&a.score)),
        SortMode::SalaryHigh => {
            view.sort_by(|a, b| b.salary_midpoint.total_cmp(&a.salary_midpoint))
        }
        SortMode::SalaryLow => {
            view.sort_by(|a, b| a.salary_midpoint.total_cmp(&b.salary_midpoint))
        }
    }
}

/// Saved jobs in catalog order. Ids no longer in the catalog are skipped.
pub fn saved_jobs<'a>(
    jobs: &'a [Job],
    saved: &SavedJobs,
    prefs: &Preferences,
) -> Vec<ScoredJob<'a>> {
    jobs.iter()
        .filter(|job| saved.contains(&job.id))
        .map(|job| ScoredJob::new(job, prefs))
        .collect()
}

/// Top matches at or above the threshold: score descending, then most recent.
pub fn digest_jobs<'a>(jobs: &'a [Job], prefs: &Preferences) -> Vec<ScoredJob<'a>> {
    let mut picks: Vec<ScoredJob<'a>> = jobs
        .iter()
        .map(|job| ScoredJob::new(job, prefs))
        .filter(|scored| scored.score >= prefs.min_match_score)
        .collect();
    picks.sort_by(|a, b| match b.score.cmp(&a.score) {
        Ordering::Equal => a.job.posted_days_ago.cmp(&b.job.posted_days_ago),
        other => other,
    });
    picks.truncate(DIGEST_LIMIT);
    picks
}
