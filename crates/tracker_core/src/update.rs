use url::Url;

use crate::{
    resolve, AppState, Choice, Effect, Experience, JobSource, Msg, PreferenceEdit, Preferences,
    Route, SortMode, WorkMode,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(route) => navigate(&mut state, route),
        Msg::PathOpened(path) => {
            let route = resolve(&path);
            let mut effects = Vec::new();
            if path != state.current_path {
                effects.push(Effect::PushHistory {
                    state: route.id().to_owned(),
                    path: path.clone(),
                });
                state.current_path = path;
            }
            enter_route(&mut state, route);
            effects
        }
        Msg::HistoryPopped {
            state: history_state,
            path,
        } => {
            let route = Route::from_history(history_state.as_deref(), &path);
            state.current_path = path;
            enter_route(&mut state, route);
            Vec::new()
        }
        Msg::KeywordChanged(keyword) => {
            state.filters.keyword = keyword;
            state.redraw.results = true;
            Vec::new()
        }
        Msg::LocationFilterChanged(value) => {
            state.filters.location = Choice::from_control(&value, |v| Some(v.to_owned()));
            state.redraw.results = true;
            Vec::new()
        }
        Msg::ModeFilterChanged(value) => {
            state.filters.mode = Choice::from_control(&value, WorkMode::parse);
            state.redraw.results = true;
            Vec::new()
        }
        Msg::ExperienceFilterChanged(value) => {
            state.filters.experience = Choice::from_control(&value, Experience::parse);
            state.redraw.results = true;
            Vec::new()
        }
        Msg::SourceFilterChanged(value) => {
            state.filters.source = Choice::from_control(&value, JobSource::parse);
            state.redraw.results = true;
            Vec::new()
        }
        Msg::SortChanged(value) => {
            state.filters.sort = SortMode::parse(&value).unwrap_or_default();
            state.redraw.results = true;
            Vec::new()
        }
        Msg::OnlyMatchesToggled(enabled) => {
            state.filters.only_matches = enabled;
            state.redraw.results = true;
            Vec::new()
        }
        Msg::SaveToggled { job_id } => {
            if !state.catalog.contains(&job_id) {
                return (state, Vec::new());
            }
            state.saved.toggle(&job_id);
            state.redraw.results = true;
            if state.modal.as_deref() == Some(job_id.as_str()) {
                state.redraw.modal = true;
            }
            vec![Effect::PersistSaved(state.saved.ids())]
        }
        Msg::ApplyClicked { job_id } => state
            .catalog
            .find(&job_id)
            .and_then(|job| apply_target(&job.apply_url))
            .map(|url| vec![Effect::OpenExternal { url }])
            .unwrap_or_default(),
        Msg::JobViewed { job_id } => {
            if state.catalog.contains(&job_id) {
                state.modal = Some(job_id);
                state.redraw.modal = true;
            }
            Vec::new()
        }
        Msg::ModalClosed => {
            state.close_modal();
            Vec::new()
        }
        Msg::PreferenceEdited(edit) => {
            let mut next = state.preferences.clone();
            apply_edit(&mut next, edit);
            if next == state.preferences {
                return (state, Vec::new());
            }
            state.preferences = next;
            state.redraw.results = true;
            vec![Effect::PersistPreferences(state.preferences.clone())]
        }
        Msg::PreferencesReset => {
            state.preferences = Preferences::default();
            state.redraw.page = true;
            vec![Effect::PersistPreferences(state.preferences.clone())]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn navigate(state: &mut AppState, route: Route) -> Vec<Effect> {
    let mut effects = Vec::new();
    // Re-navigating to the current route re-renders without a new history entry.
    if route != state.route {
        if let Some(path) = route.path() {
            effects.push(Effect::PushHistory {
                state: route.id().to_owned(),
                path: path.to_owned(),
            });
            state.current_path = path.to_owned();
        }
    }
    enter_route(state, route);
    effects
}

fn enter_route(state: &mut AppState, route: Route) {
    state.route = route;
    state.close_modal();
    state.redraw.page = true;
}

fn apply_edit(prefs: &mut Preferences, edit: PreferenceEdit) {
    match edit {
        PreferenceEdit::RoleKeywords(text) => prefs.role_keywords = text,
        PreferenceEdit::Location { location, selected } => {
            if selected {
                prefs.preferred_locations.insert(location);
            } else {
                prefs.preferred_locations.remove(&location);
            }
        }
        PreferenceEdit::Mode { mode, selected } => {
            if let Some(mode) = WorkMode::parse(&mode) {
                if selected {
                    prefs.preferred_modes.insert(mode);
                } else {
                    prefs.preferred_modes.remove(&mode);
                }
            }
        }
        PreferenceEdit::ExperienceLevel(value) => {
            prefs.experience_level = Choice::from_control(&value, Experience::parse)
                .exact()
                .copied();
        }
        PreferenceEdit::Skills(text) => prefs.skills = text,
        PreferenceEdit::MinMatchScore(value) => {
            if let Ok(score) = value.trim().parse::<i64>() {
                prefs.set_min_match_score(score);
            }
        }
    }
}

/// Only absolute http(s) links are opened.
fn apply_target(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.into())
}
