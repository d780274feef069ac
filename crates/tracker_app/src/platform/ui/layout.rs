use tracker_core::Route;

use super::constants::*;
use super::markup::route_link;
use crate::platform::dom::DomCommand;

/// Static shell: top bar, navigation and footer. The modal starts hidden.
#[allow(clippy::vec_init_then_push)]
pub fn initial_commands() -> Vec<DomCommand> {
    let mut commands = Vec::new();

    commands.push(DomCommand::SetText {
        element: ELEMENT_APP_NAME,
        text: APP_NAME.to_string(),
    });

    commands.push(DomCommand::SetHtml {
        element: ELEMENT_NAV,
        html: nav_html(),
    });

    commands.push(DomCommand::SetHtml {
        element: ELEMENT_FOOTER,
        html: "<p>Demo data only. No notifications are sent.</p>".to_string(),
    });

    commands.push(DomCommand::SetHtml {
        element: ELEMENT_MODAL_CONTENT,
        html: String::new(),
    });
    commands.push(DomCommand::SetModalVisible(false));

    commands
}

fn nav_html() -> String {
    Route::NAV
        .into_iter()
        .filter_map(|route| {
            route
                .path()
                .map(|path| route_link(route.id(), path, route.nav_label(), "nav-link"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_carries_a_marker_per_route() {
        let html = nav_html();
        for route in Route::NAV {
            assert!(html.contains(&format!(r#"data-route="{}""#, route.id())));
        }
        assert!(!html.contains("not-found"));
    }

    #[test]
    fn modal_starts_hidden() {
        let commands = initial_commands();
        assert_eq!(commands.last(), Some(&DomCommand::SetModalVisible(false)));
    }
}
