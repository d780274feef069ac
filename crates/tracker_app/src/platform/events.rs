use tracker_core::{Msg, PreferenceEdit, Route};

use super::ui::constants::*;

/// Events as the document-level listeners see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// A delegated click; carries whatever markers the clicked element had.
    Click {
        route: Option<String>,
        action: Option<String>,
        job_id: Option<String>,
    },
    Input {
        control: String,
        value: String,
    },
    /// `checked` is present for checkboxes only.
    Change {
        control: String,
        value: String,
        checked: Option<bool>,
    },
    KeyDown {
        key: String,
    },
    PopState {
        state: Option<String>,
        path: String,
    },
    /// Address-bar navigation.
    Open {
        path: String,
    },
}

impl DomEvent {
    pub fn click_route(route: Route) -> Self {
        DomEvent::Click {
            route: Some(route.id().to_string()),
            action: None,
            job_id: None,
        }
    }

    pub fn click_action(action: &str, job_id: Option<&str>) -> Self {
        DomEvent::Click {
            route: None,
            action: Some(action.to_string()),
            job_id: job_id.map(str::to_string),
        }
    }
}

/// Translates a raw event into a message. Anything unrecognised becomes `NoOp`.
pub fn to_msg(event: DomEvent) -> Msg {
    match event {
        DomEvent::Click {
            route: Some(route), ..
        } => Route::from_id(&route).map_or(Msg::NoOp, Msg::Navigate),
        DomEvent::Click {
            action: Some(action),
            job_id,
            ..
        } => click_msg(&action, job_id),
        DomEvent::Click { .. } => Msg::NoOp,
        DomEvent::Input { control, value } => input_msg(&control, value),
        DomEvent::Change {
            control,
            value,
            checked,
        } => change_msg(&control, value, checked),
        DomEvent::KeyDown { key } if key == KEY_ESCAPE => Msg::ModalClosed,
        DomEvent::KeyDown { .. } => Msg::NoOp,
        DomEvent::PopState { state, path } => Msg::HistoryPopped { state, path },
        DomEvent::Open { path } => Msg::PathOpened(path),
    }
}

fn click_msg(action: &str, job_id: Option<String>) -> Msg {
    // Cards without an id degrade to a no-op.
    let job_id = job_id.filter(|id| !id.is_empty());
    match (action, job_id) {
        (ACTION_VIEW, Some(job_id)) => Msg::JobViewed { job_id },
        (ACTION_SAVE, Some(job_id)) => Msg::SaveToggled { job_id },
        (ACTION_APPLY, Some(job_id)) => Msg::ApplyClicked { job_id },
        (ACTION_CLOSE_MODAL | ACTION_MODAL_BACKDROP, _) => Msg::ModalClosed,
        (ACTION_RESET_PREFERENCES, _) => Msg::PreferencesReset,
        _ => Msg::NoOp,
    }
}

fn input_msg(control: &str, value: String) -> Msg {
    match control {
        INPUT_KEYWORD => Msg::KeywordChanged(value),
        INPUT_ROLE_KEYWORDS => Msg::PreferenceEdited(PreferenceEdit::RoleKeywords(value)),
        INPUT_SKILLS => Msg::PreferenceEdited(PreferenceEdit::Skills(value)),
        RANGE_MIN_SCORE => Msg::PreferenceEdited(PreferenceEdit::MinMatchScore(value)),
        _ => Msg::NoOp,
    }
}

fn change_msg(control: &str, value: String, checked: Option<bool>) -> Msg {
    match control {
        SELECT_LOCATION => Msg::LocationFilterChanged(value),
        SELECT_MODE => Msg::ModeFilterChanged(value),
        SELECT_EXPERIENCE => Msg::ExperienceFilterChanged(value),
        SELECT_SOURCE => Msg::SourceFilterChanged(value),
        SELECT_SORT => Msg::SortChanged(value),
        TOGGLE_ONLY_MATCHES => Msg::OnlyMatchesToggled(checked.unwrap_or(false)),
        CHECK_LOCATION => Msg::PreferenceEdited(PreferenceEdit::Location {
            location: value,
            selected: checked.unwrap_or(false),
        }),
        CHECK_MODE => Msg::PreferenceEdited(PreferenceEdit::Mode {
            mode: value,
            selected: checked.unwrap_or(false),
        }),
        SELECT_PREF_EXPERIENCE => Msg::PreferenceEdited(PreferenceEdit::ExperienceLevel(value)),
        // Text controls also fire `change` on blur.
        _ => input_msg(control, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_markers_win_over_actions() {
        let event = DomEvent::Click {
            route: Some("saved".to_string()),
            action: Some(ACTION_SAVE.to_string()),
            job_id: Some("jn-001".to_string()),
        };
        assert_eq!(to_msg(event), Msg::Navigate(Route::Saved));
        assert_eq!(to_msg(DomEvent::click_route(Route::Proof)), Msg::Navigate(Route::Proof));
        let unknown = DomEvent::Click {
            route: Some("admin".to_string()),
            action: None,
            job_id: None,
        };
        assert_eq!(to_msg(unknown), Msg::NoOp);
    }

    #[test]
    fn card_actions_need_a_job_id() {
        assert_eq!(
            to_msg(DomEvent::click_action(ACTION_SAVE, Some("jn-002"))),
            Msg::SaveToggled {
                job_id: "jn-002".to_string()
            }
        );
        assert_eq!(to_msg(DomEvent::click_action(ACTION_SAVE, None)), Msg::NoOp);
        assert_eq!(to_msg(DomEvent::click_action(ACTION_APPLY, Some(""))), Msg::NoOp);
        assert_eq!(to_msg(DomEvent::click_action("share", Some("jn-002"))), Msg::NoOp);
    }

    #[test]
    fn modal_dismissals_converge() {
        assert_eq!(to_msg(DomEvent::click_action(ACTION_CLOSE_MODAL, None)), Msg::ModalClosed);
        assert_eq!(
            to_msg(DomEvent::click_action(ACTION_MODAL_BACKDROP, None)),
            Msg::ModalClosed
        );
        assert_eq!(
            to_msg(DomEvent::KeyDown {
                key: KEY_ESCAPE.to_string()
            }),
            Msg::ModalClosed
        );
        assert_eq!(
            to_msg(DomEvent::KeyDown {
                key: "Enter".to_string()
            }),
            Msg::NoOp
        );
    }

    #[test]
    fn checkboxes_carry_their_state() {
        let event = DomEvent::Change {
            control: CHECK_MODE.to_string(),
            value: "Hybrid".to_string(),
            checked: Some(true),
        };
        assert_eq!(
            to_msg(event),
            Msg::PreferenceEdited(PreferenceEdit::Mode {
                mode: "Hybrid".to_string(),
                selected: true,
            })
        );
        let toggle = DomEvent::Change {
            control: TOGGLE_ONLY_MATCHES.to_string(),
            value: "on".to_string(),
            checked: Some(false),
        };
        assert_eq!(to_msg(toggle), Msg::OnlyMatchesToggled(false));
    }
}
