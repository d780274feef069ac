//! Job tracker core: pure state machine, matching and view-model helpers.
mod effect;
mod filters;
mod job;
mod msg;
mod pipeline;
mod preferences;
mod route;
mod salary;
mod saved;
mod score;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filters::{Choice, Filters, SortMode, ALL_SENTINEL};
pub use job::{Catalog, Experience, Job, JobId, JobSource, WorkMode};
pub use msg::{Msg, PreferenceEdit};
pub use pipeline::{digest_jobs, filter_jobs, saved_jobs, sort_jobs, ScoredJob, DIGEST_LIMIT};
pub use preferences::{parse_list, Preferences, DEFAULT_MIN_MATCH_SCORE, MAX_MATCH_SCORE};
pub use route::{resolve, Route, ROUTE_TABLE};
pub use salary::salary_midpoint;
pub use saved::SavedJobs;
pub use score::match_score;
pub use state::{AppState, Redraw};
pub use update::update;
pub use view_model::{
    posted_label, ChecklistItemView, ChromeView, DashboardView, DigestView, JobCardView,
    ModalView, NavLinkView, ProofView, SavedView, SettingsView, PROOF_CHECKLIST,
};
