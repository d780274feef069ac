use crate::pipeline::{digest_jobs, filter_jobs, saved_jobs, ScoredJob};
use crate::{AppState, Experience, Filters, Job, JobId, JobSource, Preferences, Route, WorkMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeView {
    pub route: Route,
    pub title: &'static str,
    pub subtext: &'static str,
    pub nav: Vec<NavLinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub route: Route,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub mode: WorkMode,
    pub experience: Experience,
    pub source: JobSource,
    pub salary_range: String,
    pub posted_label: String,
    /// Present only while preferences are active.
    pub score: Option<u8>,
    pub saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub filters: Filters,
    pub locations: Vec<String>,
    pub preferences_active: bool,
    pub min_match_score: u8,
    pub cards: Vec<JobCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedView {
    pub cards: Vec<JobCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestView {
    pub preferences_active: bool,
    pub min_match_score: u8,
    pub cards: Vec<JobCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub preferences: Preferences,
    pub locations: Vec<String>,
    pub preferences_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItemView {
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofView {
    pub checklist: Vec<ChecklistItemView>,
    pub catalog_size: usize,
    pub saved_count: usize,
    pub preferences_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub job_id: JobId,
    pub title: String,
    /// "company · location · mode"
    pub meta_line: String,
    pub salary_range: String,
    pub description: String,
    pub skills: Vec<String>,
    pub saved: bool,
}

pub const PROOF_CHECKLIST: [&str; 4] = ["UI built", "Logic working", "Test passed", "Deployed"];

impl AppState {
    pub fn chrome(&self) -> ChromeView {
        ChromeView {
            route: self.route,
            title: self.route.title(),
            subtext: self.route.subtext(),
            nav: Route::NAV
                .into_iter()
                .filter_map(|route| {
                    route.path().map(|path| NavLinkView {
                        route,
                        label: route.nav_label(),
                        path,
                        active: route == self.route,
                    })
                })
                .collect(),
        }
    }

    pub fn dashboard(&self) -> DashboardView {
        let view = filter_jobs(self.catalog.jobs(), &self.filters, &self.preferences);
        DashboardView {
            filters: self.filters.clone(),
            locations: self.location_options(),
            preferences_active: self.preferences.is_active(),
            min_match_score: self.preferences.min_match_score,
            cards: self.cards(&view),
        }
    }

    pub fn saved_page(&self) -> SavedView {
        let view = saved_jobs(self.catalog.jobs(), &self.saved, &self.preferences);
        SavedView {
            cards: self.cards(&view),
        }
    }

    pub fn digest(&self) -> DigestView {
        let preferences_active = self.preferences.is_active();
        let cards = if preferences_active {
            self.cards(&digest_jobs(self.catalog.jobs(), &self.preferences))
        } else {
            Vec::new()
        };
        DigestView {
            preferences_active,
            min_match_score: self.preferences.min_match_score,
            cards,
        }
    }

    pub fn settings(&self) -> SettingsView {
        SettingsView {
            preferences: self.preferences.clone(),
            locations: self.location_options(),
            preferences_active: self.preferences.is_active(),
        }
    }

    pub fn proof(&self) -> ProofView {
        ProofView {
            checklist: PROOF_CHECKLIST
                .into_iter()
                .map(|label| ChecklistItemView { label, done: false })
                .collect(),
            catalog_size: self.catalog.len(),
            saved_count: self.saved.len(),
            preferences_active: self.preferences.is_active(),
        }
    }

    pub fn modal_view(&self) -> Option<ModalView> {
        let job = self.open_job()?;
        Some(ModalView {
            job_id: job.id.clone(),
            title: job.title.clone(),
            meta_line: format!("{} · {} · {}", job.company, job.location, job.mode),
            salary_range: job.salary_range.clone(),
            description: job.description.clone(),
            skills: job.skills.clone(),
            saved: self.saved.contains(&job.id),
        })
    }

    fn location_options(&self) -> Vec<String> {
        self.catalog
            .locations()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect()
    }

    fn cards(&self, view: &[ScoredJob<'_>]) -> Vec<JobCardView> {
        let show_score = self.preferences.is_active();
        view.iter()
            .map(|scored| {
                let saved = self.saved.contains(&scored.job.id);
                card(scored.job, show_score.then_some(scored.score), saved)
            })
            .collect()
    }
}

fn card(job: &Job, score: Option<u8>, saved: bool) -> JobCardView {
    JobCardView {
        job_id: job.id.clone(),
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        mode: job.mode,
        experience: job.experience,
        source: job.source,
        salary_range: job.salary_range.clone(),
        posted_label: posted_label(job.posted_days_ago),
        score,
        saved,
    }
}

pub fn posted_label(days: u32) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        n => format!("{n} days ago"),
    }
}
