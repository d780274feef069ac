use std::fmt::Write as _;

use chrono::NaiveDate;
use tracker_core::{
    AppState, Experience, JobSource, ModalView, Route, SortMode, WorkMode, ALL_SENTINEL,
    MAX_MATCH_SCORE,
};

use super::constants::*;
use super::markup::{
    action_button, checkbox, empty_state, escape, job_list, route_link, select, text_input,
};

/// Inputs a renderer needs beyond application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub today: NaiveDate,
}

const NO_MATCHES: &str = "No roles match your criteria. Adjust filters or lower threshold.";
const NO_SAVED: &str =
    "You haven't saved any jobs yet. Save roles from the dashboard to review them here.";
const NO_DIGEST: &str = "No matching roles today. Check again tomorrow.";

fn results_slot() -> String {
    format!(r#"<section id="{ELEMENT_PAGE_RESULTS}"></section>"#)
}

pub fn landing_body(_state: &AppState, _ctx: &RenderContext) -> String {
    let mut html = String::from(r#"<div class="hero">"#);
    html.push_str(
        "<p>Precision-matched job discovery delivered daily at 9AM. \
         Set your preferences once and let the tracker surface the roles worth your time.</p>",
    );
    if let Some(path) = Route::Settings.path() {
        html.push_str(&route_link(
            Route::Settings.id(),
            path,
            "Start Tracking",
            "btn btn-primary",
        ));
    }
    html.push_str("</div>");
    html
}

pub fn dashboard_body(state: &AppState, _ctx: &RenderContext) -> String {
    let view = state.dashboard();
    let filters = &view.filters;
    let mut html = String::new();

    if !view.preferences_active {
        html.push_str(
            r#"<div class="banner">Set your preferences to activate intelligent matching. "#,
        );
        if let Some(path) = Route::Settings.path() {
            html.push_str(&route_link(Route::Settings.id(), path, "Open settings", "link"));
        }
        html.push_str("</div>");
    }

    html.push_str(r#"<div class="filter-bar">"#);
    html.push_str(&text_input(
        INPUT_KEYWORD,
        "Keyword",
        &filters.keyword,
        "Search title or company",
    ));

    let locations = with_all(
        "All locations",
        view.locations.iter().map(|l| (l.clone(), l.clone())),
    );
    html.push_str(&select(
        SELECT_LOCATION,
        "Location",
        &locations,
        filters.location.control_value(String::as_str),
    ));

    let modes = with_all("All modes", label_options(WorkMode::ALL, WorkMode::label));
    html.push_str(&select(
        SELECT_MODE,
        "Mode",
        &modes,
        filters.mode.control_value(|m| m.label()),
    ));

    let experience = with_all(
        "All experience",
        label_options(Experience::ALL, Experience::label),
    );
    html.push_str(&select(
        SELECT_EXPERIENCE,
        "Experience",
        &experience,
        filters.experience.control_value(|e| e.label()),
    ));

    let sources = with_all("All sources", label_options(JobSource::ALL, JobSource::label));
    html.push_str(&select(
        SELECT_SOURCE,
        "Source",
        &sources,
        filters.source.control_value(|s| s.label()),
    ));

    let sorts: Vec<(String, String)> = SortMode::ALL
        .into_iter()
        .map(|mode| (mode.value().to_string(), mode.label().to_string()))
        .collect();
    html.push_str(&select(SELECT_SORT, "Sort", &sorts, filters.sort.value()));

    html.push_str(&checkbox(
        TOGGLE_ONLY_MATCHES,
        "on",
        &format!(
            "Show only jobs above my threshold ({}%)",
            view.min_match_score
        ),
        filters.only_matches,
    ));
    html.push_str("</div>");

    html.push_str(&results_slot());
    html
}

pub fn dashboard_results(state: &AppState, _ctx: &RenderContext) -> String {
    let view = state.dashboard();
    let mut html = format!(
        r#"<p class="result-count">{} of {} jobs</p>"#,
        view.cards.len(),
        state.catalog().len()
    );
    if view.cards.is_empty() {
        html.push_str(&empty_state(NO_MATCHES));
    } else {
        html.push_str(&job_list(&view.cards));
    }
    html
}

pub fn saved_body(_state: &AppState, _ctx: &RenderContext) -> String {
    results_slot()
}

pub fn saved_results(state: &AppState, _ctx: &RenderContext) -> String {
    let view = state.saved_page();
    if view.cards.is_empty() {
        empty_state(NO_SAVED)
    } else {
        job_list(&view.cards)
    }
}

pub fn digest_body(state: &AppState, _ctx: &RenderContext) -> String {
    if state.preferences().is_active() {
        return results_slot();
    }
    let mut html = String::from(
        r#"<div class="banner">Set preferences to generate a personalized digest. "#,
    );
    if let Some(path) = Route::Settings.path() {
        html.push_str(&route_link(Route::Settings.id(), path, "Go to settings", "link"));
    }
    html.push_str("</div>");
    html
}

pub fn digest_results(state: &AppState, ctx: &RenderContext) -> String {
    let view = state.digest();
    if !view.preferences_active {
        return String::new();
    }
    let mut html = format!(
        r#"<header class="digest-header"><h2>Top {} Jobs For You, 9AM Digest</h2><p>{}</p></header>"#,
        view.cards.len(),
        ctx.today.format("%A, %-d %B %Y")
    );
    if view.cards.is_empty() {
        html.push_str(&empty_state(NO_DIGEST));
    } else {
        html.push_str(&job_list(&view.cards));
    }
    let _ = write!(
        html,
        r#"<p class="digest-note">Jobs scoring at least {}% against your preferences.</p>"#,
        view.min_match_score
    );
    html
}

pub fn settings_body(state: &AppState, _ctx: &RenderContext) -> String {
    let view = state.settings();
    let prefs = &view.preferences;
    let mut html = String::from(r#"<form class="settings">"#);

    html.push_str(&text_input(
        INPUT_ROLE_KEYWORDS,
        "Role keywords",
        &prefs.role_keywords,
        "e.g. Frontend, React Developer",
    ));

    html.push_str(r#"<fieldset><legend>Preferred locations</legend>"#);
    for location in &view.locations {
        html.push_str(&checkbox(
            CHECK_LOCATION,
            location,
            location,
            prefs.preferred_locations.contains(location),
        ));
    }
    html.push_str("</fieldset>");

    html.push_str(r#"<fieldset><legend>Work mode</legend>"#);
    for mode in WorkMode::ALL {
        html.push_str(&checkbox(
            CHECK_MODE,
            mode.label(),
            mode.label(),
            prefs.preferred_modes.contains(&mode),
        ));
    }
    html.push_str("</fieldset>");

    let levels = with_all("Any level", label_options(Experience::ALL, Experience::label));
    html.push_str(&select(
        SELECT_PREF_EXPERIENCE,
        "Experience level",
        &levels,
        prefs.experience_level.map_or(ALL_SENTINEL, Experience::label),
    ));

    html.push_str(&text_input(
        INPUT_SKILLS,
        "Skills",
        &prefs.skills,
        "e.g. React, TypeScript",
    ));

    let _ = write!(
        html,
        r#"<label class="field"><span>Minimum match score: {score}</span><input type="range" min="0" max="{MAX_MATCH_SCORE}" data-control="{RANGE_MIN_SCORE}" value="{score}"></label>"#,
        score = prefs.min_match_score
    );

    html.push_str(r#"<button type="button" class="btn btn-secondary" data-action=""#);
    html.push_str(ACTION_RESET_PREFERENCES);
    html.push_str(r#"">Reset preferences</button></form>"#);

    html.push_str(&results_slot());
    html
}

pub fn settings_results(state: &AppState, _ctx: &RenderContext) -> String {
    let view = state.settings();
    if view.preferences_active {
        format!(
            r#"<p class="settings-status">Matching is active. Threshold: {}%.</p>"#,
            view.preferences.min_match_score
        )
    } else {
        r#"<p class="settings-status">No preferences set. Scores are hidden until you add one.</p>"#
            .to_string()
    }
}

pub fn proof_body(state: &AppState, _ctx: &RenderContext) -> String {
    let view = state.proof();
    let mut html = String::from(r#"<ul class="checklist">"#);
    for item in &view.checklist {
        let status = if item.done { "done" } else { "pending" };
        let _ = write!(
            html,
            r#"<li class="{status}">{}<span class="status">{status}</span></li>"#,
            escape(item.label)
        );
    }
    html.push_str("</ul>");
    let _ = write!(
        html,
        r#"<dl class="proof-summary"><dt>Jobs in catalog</dt><dd>{}</dd><dt>Saved jobs</dt><dd>{}</dd><dt>Preferences</dt><dd>{}</dd></dl>"#,
        view.catalog_size,
        view.saved_count,
        if view.preferences_active { "Active" } else { "Not set" }
    );
    html
}

pub fn not_found_body(_state: &AppState, _ctx: &RenderContext) -> String {
    let mut html = String::from(
        "<p>The page you are looking for does not exist. Check the address or head back.</p>",
    );
    if let Some(path) = Route::Dashboard.path() {
        html.push_str(&route_link(
            Route::Dashboard.id(),
            path,
            "Back to dashboard",
            "btn btn-primary",
        ));
    }
    html
}

pub fn modal(view: &ModalView) -> String {
    let mut html = format!(r#"<h2 class="modal-title">{}</h2>"#, escape(&view.title));
    let _ = write!(
        html,
        r#"<p class="modal-meta">{}</p><p class="modal-salary">{}</p><p class="modal-description">{}</p>"#,
        escape(&view.meta_line),
        escape(&view.salary_range),
        escape(&view.description)
    );
    html.push_str(r#"<div class="skills">"#);
    for skill in &view.skills {
        let _ = write!(html, r#"<span class="skill-badge">{}</span>"#, escape(skill));
    }
    html.push_str("</div><div class=\"modal-actions\">");
    let save_label = if view.saved { "Saved" } else { "Save" };
    html.push_str(&action_button(ACTION_SAVE, &view.job_id, save_label, "btn btn-secondary"));
    html.push_str(&action_button(ACTION_APPLY, &view.job_id, "Apply", "btn btn-primary"));
    let _ = write!(
        html,
        r#"<button class="btn" data-action="{ACTION_CLOSE_MODAL}">Close</button></div>"#
    );
    html
}

fn label_options<T: Copy, const N: usize>(
    all: [T; N],
    label: fn(T) -> &'static str,
) -> impl Iterator<Item = (String, String)> {
    all.into_iter()
        .map(move |item| (label(item).to_string(), label(item).to_string()))
}

fn with_all(
    all_label: &str,
    options: impl Iterator<Item = (String, String)>,
) -> Vec<(String, String)> {
    std::iter::once((ALL_SENTINEL.to_string(), all_label.to_string()))
        .chain(options)
        .collect()
}
