use std::collections::BTreeSet;

use serde_json::Value;

use crate::JobId;

/// Bookmarked job ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedJobs {
    ids: BTreeSet<JobId>,
}

impl SavedJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the persisted JSON array; non-string entries are skipped and
    /// any other shape yields an empty set.
    pub fn from_json(value: &Value) -> Self {
        let ids = value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Self { ids }
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.ids.iter().cloned().map(Value::String).collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id`; returns whether it is saved afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<JobId> {
        self.ids.iter().cloned().collect()
    }
}

impl FromIterator<JobId> for SavedJobs {
    fn from_iter<I: IntoIterator<Item = JobId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
