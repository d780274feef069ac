use crate::{resolve, Catalog, Filters, Job, JobId, Preferences, Route, SavedJobs};

/// Regions of the document invalidated by the last messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Redraw {
    /// Page chrome and body: a full route application.
    pub page: bool,
    /// The live region of the current page (job list, settings summary).
    pub results: bool,
    pub modal: bool,
}

impl Redraw {
    pub fn is_empty(self) -> bool {
        !(self.page || self.results || self.modal)
    }
}

/// Everything the page session knows: the catalog plus the three stores.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) catalog: Catalog,
    pub(crate) route: Route,
    pub(crate) current_path: String,
    pub(crate) filters: Filters,
    pub(crate) preferences: Preferences,
    pub(crate) saved: SavedJobs,
    pub(crate) modal: Option<JobId>,
    pub(crate) redraw: Redraw,
}

impl AppState {
    /// Session start: filters reset, stores as loaded, route from the initial path.
    pub fn new(
        catalog: Catalog,
        preferences: Preferences,
        saved: SavedJobs,
        initial_path: &str,
    ) -> Self {
        Self {
            catalog,
            route: resolve(initial_path),
            current_path: initial_path.to_owned(),
            filters: Filters::default(),
            preferences,
            saved,
            modal: None,
            redraw: Redraw {
                page: true,
                ..Redraw::default()
            },
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn saved(&self) -> &SavedJobs {
        &self.saved
    }

    /// Job shown in the detail overlay, if any.
    pub fn open_job(&self) -> Option<&Job> {
        self.modal.as_deref().and_then(|id| self.catalog.find(id))
    }

    /// Returns and clears the pending redraw set.
    pub fn consume_redraw(&mut self) -> Redraw {
        std::mem::take(&mut self.redraw)
    }

    pub(crate) fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            self.redraw.modal = true;
        }
    }
}
