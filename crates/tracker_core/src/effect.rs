use crate::{JobId, Preferences};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Add a history entry; `state` is the route id.
    PushHistory { state: String, path: String },
    PersistSaved(Vec<JobId>),
    PersistPreferences(Preferences),
    /// Open an apply link in a new, opener-less browsing context.
    OpenExternal { url: String },
}
