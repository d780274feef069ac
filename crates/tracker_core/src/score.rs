use crate::{Job, JobSource, Preferences};

const TITLE_KEYWORD_POINTS: u32 = 25;
const DESCRIPTION_KEYWORD_POINTS: u32 = 15;
const LOCATION_POINTS: u32 = 15;
const MODE_POINTS: u32 = 10;
const EXPERIENCE_POINTS: u32 = 10;
const SKILL_POINTS: u32 = 15;
const RECENT_POINTS: u32 = 5;
const LINKEDIN_POINTS: u32 = 5;

const RECENT_DAYS: u32 = 2;
const SCORE_CEILING: u32 = 100;

/// Additive 0..=100 relevance of `job` for `prefs`.
///
/// Every rule is evaluated independently; the sum is clamped to 100.
pub fn match_score(job: &Job, prefs: &Preferences) -> u8 {
    let keywords = prefs.role_keywords();
    let skills = prefs.skill_tokens();
    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();

    let mut total = 0;

    if keywords.iter().any(|keyword| title.contains(keyword.as_str())) {
        total += TITLE_KEYWORD_POINTS;
    }
    if keywords
        .iter()
        .any(|keyword| description.contains(keyword.as_str()))
    {
        total += DESCRIPTION_KEYWORD_POINTS;
    }
    if prefs.preferred_locations.contains(&job.location) {
        total += LOCATION_POINTS;
    }
    if prefs.preferred_modes.contains(&job.mode) {
        total += MODE_POINTS;
    }
    if prefs.experience_level == Some(job.experience) {
        total += EXPERIENCE_POINTS;
    }
    if job
        .skills
        .iter()
        .any(|skill| skills.contains(&skill.trim().to_lowercase()))
    {
        total += SKILL_POINTS;
    }
    if job.posted_days_ago <= RECENT_DAYS {
        total += RECENT_POINTS;
    }
    if job.source == JobSource::LinkedIn {
        total += LINKEDIN_POINTS;
    }

    total.min(SCORE_CEILING) as u8
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::{Experience, WorkMode};

    fn react_job() -> Job {
        Job {
            id: "react-1".to_string(),
            title: "Senior React Developer".to_string(),
            company: "Pixel Labs".to_string(),
            location: "Remote".to_string(),
            mode: WorkMode::Remote,
            experience: Experience::ThreeToFive,
            source: JobSource::LinkedIn,
            salary_range: "18-24 LPA".to_string(),
            posted_days_ago: 1,
            description: "Own the design system and component library.".to_string(),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            apply_url: "https://example.com/react-1".to_string(),
        }
    }

    #[test]
    fn documented_example_scores_sixty_five() {
        let prefs = Preferences {
            role_keywords: "React Developer".to_string(),
            preferred_locations: BTreeSet::from(["Remote".to_string()]),
            skills: "react".to_string(),
            min_match_score: 40,
            ..Preferences::default()
        };
        assert_eq!(match_score(&react_job(), &prefs), 65);
    }

    #[test]
    fn title_and_description_rules_fire_independently() {
        let mut job = react_job();
        job.description = "Looking for a react developer to join".to_string();
        job.posted_days_ago = 10;
        job.source = JobSource::Indeed;
        let prefs = Preferences {
            role_keywords: "react developer".to_string(),
            ..Preferences::default()
        };
        assert_eq!(match_score(&job, &prefs), 40);
    }

    #[test]
    fn every_rule_at_once_reaches_the_ceiling() {
        let mut job = react_job();
        job.description = "react developer wanted".to_string();
        let prefs = Preferences {
            role_keywords: "react".to_string(),
            preferred_locations: BTreeSet::from(["Remote".to_string()]),
            preferred_modes: BTreeSet::from([WorkMode::Remote]),
            experience_level: Some(Experience::ThreeToFive),
            skills: "typescript".to_string(),
            min_match_score: 0,
        };
        assert_eq!(match_score(&job, &prefs), 100);
    }

    #[test]
    fn default_preferences_only_earn_recency_and_source() {
        assert_eq!(match_score(&react_job(), &Preferences::default()), 10);
    }
}
