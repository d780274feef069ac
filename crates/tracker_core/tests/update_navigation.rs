use std::sync::Once;

use tracker_core::{update, AppState, Catalog, Effect, Msg, Preferences, Route, SavedJobs};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tracker_logging::initialize_for_tests);
}

fn start(path: &str) -> AppState {
    let mut state = AppState::new(
        Catalog::default(),
        Preferences::default(),
        SavedJobs::new(),
        path,
    );
    assert!(state.consume_redraw().page);
    state
}

#[test]
fn initial_path_selects_route_without_history_push() {
    init_logging();
    assert_eq!(start("/").route(), Route::Landing);
    assert_eq!(start("/saved").route(), Route::Saved);
    assert_eq!(start("/unknown-page").route(), Route::NotFound);
}

#[test]
fn navigate_pushes_canonical_path() {
    init_logging();
    let (mut state, effects) = update(start("/"), Msg::Navigate(Route::Dashboard));

    assert_eq!(state.route(), Route::Dashboard);
    assert_eq!(state.current_path(), "/dashboard");
    assert_eq!(
        effects,
        vec![Effect::PushHistory {
            state: "dashboard".to_string(),
            path: "/dashboard".to_string(),
        }]
    );
    assert!(state.consume_redraw().page);
}

#[test]
fn navigate_to_current_route_rerenders_without_push() {
    init_logging();
    let (mut state, effects) = update(start("/digest"), Msg::Navigate(Route::Digest));

    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Digest);
    assert!(state.consume_redraw().page);
}

#[test]
fn unknown_path_renders_not_found_and_keeps_typed_path() {
    init_logging();
    let (state, _) = update(start("/"), Msg::Navigate(Route::Dashboard));
    let (mut state, effects) = update(state, Msg::PathOpened("/unknown-page".to_string()));

    assert_eq!(state.route(), Route::NotFound);
    assert_eq!(state.chrome().title, "Page Not Found");
    assert_eq!(
        effects,
        vec![Effect::PushHistory {
            state: "not-found".to_string(),
            path: "/unknown-page".to_string(),
        }]
    );
    assert!(state.consume_redraw().page);

    let (state, effects) = update(
        state,
        Msg::HistoryPopped {
            state: Some("dashboard".to_string()),
            path: "/dashboard".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Dashboard);
    assert_eq!(state.current_path(), "/dashboard");
}

#[test]
fn reopening_current_path_does_not_push() {
    init_logging();
    let (_, effects) = update(start("/saved"), Msg::PathOpened("/saved".to_string()));
    assert!(effects.is_empty());
}

#[test]
fn popstate_without_state_falls_back_to_path() {
    init_logging();
    let (state, effects) = update(
        start("/saved"),
        Msg::HistoryPopped {
            state: None,
            path: "/settings".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Settings);
}

#[test]
fn navigating_to_not_found_keeps_the_address() {
    init_logging();
    let (state, effects) = update(start("/proof"), Msg::Navigate(Route::NotFound));
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::NotFound);
    assert_eq!(state.current_path(), "/proof");
}

#[test]
fn nav_marks_exactly_the_active_route() {
    init_logging();
    let (state, _) = update(start("/"), Msg::Navigate(Route::Saved));
    let chrome = state.chrome();
    let active: Vec<Route> = chrome
        .nav
        .iter()
        .filter(|link| link.active)
        .map(|link| link.route)
        .collect();
    assert_eq!(active, vec![Route::Saved]);
    assert_eq!(chrome.nav.len(), Route::NAV.len());
}
