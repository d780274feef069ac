use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use tracker_core::Route;

use super::events::DomEvent;
use super::ui::constants::*;

const SNAPSHOT_REGIONS: [&str; 7] = [
    ELEMENT_APP_NAME,
    ELEMENT_PAGE_TITLE,
    ELEMENT_PAGE_SUBTEXT,
    ELEMENT_PAGE_BODY,
    ELEMENT_PAGE_RESULTS,
    ELEMENT_MODAL_CONTENT,
    ELEMENT_FOOTER,
];

/// A single mutation of the host document or browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetDocumentTitle(String),
    SetText {
        element: &'static str,
        text: String,
    },
    /// Replace the element's whole subtree.
    SetHtml {
        element: &'static str,
        html: String,
    },
    /// Toggle the active class on every element whose route marker equals `route`.
    SetRouteActive {
        route: &'static str,
        active: bool,
    },
    /// Flip the overlay's `hidden` flag and `aria-hidden` together.
    SetModalVisible(bool),
    PushHistory {
        state: String,
        path: String,
    },
    /// `window.open(url, "_blank", "noopener")`.
    OpenWindow {
        url: String,
    },
}

/// The document and browser chrome the platform renders into.
pub trait DomHost {
    fn apply(&mut self, command: DomCommand);

    /// Current `location.pathname`.
    fn location_path(&self) -> String;

    fn apply_all(&mut self, commands: Vec<DomCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: Option<String>,
    pub path: String,
}

/// In-memory document with a browser-style history stack.
#[derive(Debug, Clone)]
pub struct HeadlessDom {
    document_title: String,
    elements: BTreeMap<&'static str, String>,
    active_routes: BTreeSet<&'static str>,
    modal_hidden: bool,
    modal_aria_hidden: &'static str,
    history: Vec<HistoryEntry>,
    cursor: usize,
    opened_windows: Vec<String>,
}

impl HeadlessDom {
    pub fn new(initial_path: &str) -> Self {
        Self {
            document_title: String::new(),
            elements: BTreeMap::new(),
            active_routes: BTreeSet::new(),
            modal_hidden: true,
            modal_aria_hidden: "true",
            history: vec![HistoryEntry {
                state: None,
                path: initial_path.to_string(),
            }],
            cursor: 0,
            opened_windows: Vec::new(),
        }
    }

    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    pub fn element(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    pub fn is_route_active(&self, route: &str) -> bool {
        self.active_routes.contains(route)
    }

    pub fn modal_hidden(&self) -> bool {
        self.modal_hidden
    }

    pub fn modal_aria_hidden(&self) -> &str {
        self.modal_aria_hidden
    }

    pub fn opened_windows(&self) -> &[String] {
        &self.opened_windows
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.cursor]
    }

    /// Moves back one entry and returns the `popstate` the browser would fire.
    pub fn back(&mut self) -> Option<DomEvent> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.pop_state())
    }

    pub fn forward(&mut self) -> Option<DomEvent> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.pop_state())
    }

    fn pop_state(&self) -> DomEvent {
        let entry = self.current_entry();
        DomEvent::PopState {
            state: entry.state.clone(),
            path: entry.path.clone(),
        }
    }

    /// Plain-text dump of the document for the shell, regions in page order.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "== {} ({}) history {}/{}",
            self.document_title(),
            self.current_entry().path,
            self.cursor + 1,
            self.history().len()
        );
        let active: Vec<&str> = Route::NAV
            .into_iter()
            .map(Route::id)
            .filter(|id| self.is_route_active(id))
            .collect();
        let _ = writeln!(out, "nav active: [{}]", active.join(", "));
        for id in SNAPSHOT_REGIONS {
            if let Some(content) = self.element(id).filter(|c| !c.is_empty()) {
                let _ = writeln!(out, "-- #{id}\n{content}");
            }
        }
        let _ = writeln!(
            out,
            "modal: hidden={} aria-hidden={}",
            self.modal_hidden(),
            self.modal_aria_hidden()
        );
        if let Some(url) = self.opened_windows().last() {
            let _ = writeln!(out, "last opened window: {url}");
        }
        out
    }
}

impl DomHost for HeadlessDom {
    fn apply(&mut self, command: DomCommand) {
        match command {
            DomCommand::SetDocumentTitle(title) => self.document_title = title,
            DomCommand::SetText { element, text } | DomCommand::SetHtml { element, html: text } => {
                self.elements.insert(element, text);
            }
            DomCommand::SetRouteActive { route, active } => {
                if active {
                    self.active_routes.insert(route);
                } else {
                    self.active_routes.remove(route);
                }
            }
            DomCommand::SetModalVisible(visible) => {
                self.modal_hidden = !visible;
                self.modal_aria_hidden = if visible { "false" } else { "true" };
            }
            DomCommand::PushHistory { state, path } => {
                self.history.truncate(self.cursor + 1);
                self.history.push(HistoryEntry {
                    state: Some(state),
                    path,
                });
                self.cursor = self.history.len() - 1;
            }
            DomCommand::OpenWindow { url } => self.opened_windows.push(url),
        }
    }

    fn location_path(&self) -> String {
        self.current_entry().path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(dom: &mut HeadlessDom, state: &str, path: &str) {
        dom.apply(DomCommand::PushHistory {
            state: state.to_string(),
            path: path.to_string(),
        });
    }

    #[test]
    fn back_and_forward_walk_the_stack() {
        let mut dom = HeadlessDom::new("/");
        push(&mut dom, "dashboard", "/dashboard");
        push(&mut dom, "saved", "/saved");

        assert_eq!(
            dom.back(),
            Some(DomEvent::PopState {
                state: Some("dashboard".to_string()),
                path: "/dashboard".to_string(),
            })
        );
        assert_eq!(
            dom.back(),
            Some(DomEvent::PopState {
                state: None,
                path: "/".to_string(),
            })
        );
        assert_eq!(dom.back(), None);
        assert_eq!(dom.location_path(), "/");

        assert!(dom.forward().is_some());
        assert_eq!(dom.location_path(), "/dashboard");
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut dom = HeadlessDom::new("/");
        push(&mut dom, "dashboard", "/dashboard");
        push(&mut dom, "saved", "/saved");
        dom.back();
        push(&mut dom, "proof", "/proof");

        let paths: Vec<&str> = dom.history().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/dashboard", "/proof"]);
        assert_eq!(dom.forward(), None);
    }

    #[test]
    fn modal_visibility_keeps_aria_in_step() {
        let mut dom = HeadlessDom::new("/");
        assert!(dom.modal_hidden());
        dom.apply(DomCommand::SetModalVisible(true));
        assert!(!dom.modal_hidden());
        assert_eq!(dom.modal_aria_hidden(), "false");
        dom.apply(DomCommand::SetModalVisible(false));
        assert_eq!(dom.modal_aria_hidden(), "true");
    }
}
