use crate::{JobId, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A control carrying a route marker was clicked.
    Navigate(Route),
    /// A literal path was opened (address bar or plain link).
    PathOpened(String),
    /// Back/forward moved to an existing history entry.
    HistoryPopped { state: Option<String>, path: String },
    /// Dashboard keyword box changed.
    KeywordChanged(String),
    LocationFilterChanged(String),
    ModeFilterChanged(String),
    ExperienceFilterChanged(String),
    SourceFilterChanged(String),
    SortChanged(String),
    /// "Only show matches above my threshold" toggle.
    OnlyMatchesToggled(bool),
    SaveToggled { job_id: JobId },
    ApplyClicked { job_id: JobId },
    JobViewed { job_id: JobId },
    /// Close control, backdrop click, or Escape.
    ModalClosed,
    PreferenceEdited(PreferenceEdit),
    PreferencesReset,
    /// Fallback for events that carry nothing actionable.
    NoOp,
}

/// One settings control changing its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceEdit {
    RoleKeywords(String),
    Location { location: String, selected: bool },
    Mode { mode: String, selected: bool },
    ExperienceLevel(String),
    Skills(String),
    MinMatchScore(String),
}
