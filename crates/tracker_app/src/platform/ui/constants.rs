//! Element ids, control names and action markers shared by layout, render and
//! event translation.

pub const APP_NAME: &str = "Job Notification Tracker";

pub const ELEMENT_APP_NAME: &str = "app-name";
pub const ELEMENT_NAV: &str = "app-nav";
pub const ELEMENT_PAGE_TITLE: &str = "page-title";
pub const ELEMENT_PAGE_SUBTEXT: &str = "page-subtext";
pub const ELEMENT_PAGE_BODY: &str = "page-body";
pub const ELEMENT_PAGE_RESULTS: &str = "page-results";
pub const ELEMENT_MODAL_CONTENT: &str = "job-modal-content";
pub const ELEMENT_FOOTER: &str = "app-footer";

pub const ACTION_VIEW: &str = "view";
pub const ACTION_SAVE: &str = "save";
pub const ACTION_APPLY: &str = "apply";
pub const ACTION_CLOSE_MODAL: &str = "close-modal";
pub const ACTION_MODAL_BACKDROP: &str = "modal-backdrop";
pub const ACTION_RESET_PREFERENCES: &str = "reset-preferences";

pub const INPUT_KEYWORD: &str = "filter-keyword";
pub const SELECT_LOCATION: &str = "filter-location";
pub const SELECT_MODE: &str = "filter-mode";
pub const SELECT_EXPERIENCE: &str = "filter-experience";
pub const SELECT_SOURCE: &str = "filter-source";
pub const SELECT_SORT: &str = "filter-sort";
pub const TOGGLE_ONLY_MATCHES: &str = "filter-only-matches";

pub const INPUT_ROLE_KEYWORDS: &str = "pref-role-keywords";
pub const CHECK_LOCATION: &str = "pref-location";
pub const CHECK_MODE: &str = "pref-mode";
pub const SELECT_PREF_EXPERIENCE: &str = "pref-experience";
pub const INPUT_SKILLS: &str = "pref-skills";
pub const RANGE_MIN_SCORE: &str = "pref-min-score";

pub const KEY_ESCAPE: &str = "Escape";
