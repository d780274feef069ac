//! Route application: page chrome, body, live region and nav state.

use tracker_core::{AppState, Redraw, Route};

use super::dom::DomCommand;
use super::ui::constants::*;
use super::ui::render::{self, RenderContext};

type Renderer = fn(&AppState, &RenderContext) -> String;

/// Renderers for one route. `results` fills the page's live region.
#[derive(Clone, Copy)]
pub struct PageRenderer {
    pub body: Renderer,
    pub results: Option<Renderer>,
}

/// Exhaustive over [`Route`], so the table cannot fall out of step with the route set.
pub fn renderer_for(route: Route) -> PageRenderer {
    match route {
        Route::Landing => PageRenderer {
            body: render::landing_body,
            results: None,
        },
        Route::Dashboard => PageRenderer {
            body: render::dashboard_body,
            results: Some(render::dashboard_results),
        },
        Route::Saved => PageRenderer {
            body: render::saved_body,
            results: Some(render::saved_results),
        },
        Route::Digest => PageRenderer {
            body: render::digest_body,
            results: Some(render::digest_results),
        },
        Route::Settings => PageRenderer {
            body: render::settings_body,
            results: Some(render::settings_results),
        },
        Route::Proof => PageRenderer {
            body: render::proof_body,
            results: None,
        },
        Route::NotFound => PageRenderer {
            body: render::not_found_body,
            results: None,
        },
    }
}

/// Full route application; the page body is replaced wholesale.
pub fn apply_route(state: &AppState, ctx: &RenderContext) -> Vec<DomCommand> {
    let chrome = state.chrome();
    let page = renderer_for(chrome.route);

    let mut commands = vec![
        DomCommand::SetDocumentTitle(format!("{} | {}", chrome.title, APP_NAME)),
        DomCommand::SetText {
            element: ELEMENT_PAGE_TITLE,
            text: chrome.title.to_string(),
        },
        DomCommand::SetText {
            element: ELEMENT_PAGE_SUBTEXT,
            text: chrome.subtext.to_string(),
        },
        DomCommand::SetHtml {
            element: ELEMENT_PAGE_BODY,
            html: (page.body)(state, ctx),
        },
        results_command(state, ctx, page),
    ];

    commands.extend(chrome.nav.iter().map(|link| DomCommand::SetRouteActive {
        route: link.route.id(),
        active: link.active,
    }));
    commands
}

fn results_command(state: &AppState, ctx: &RenderContext, page: PageRenderer) -> DomCommand {
    DomCommand::SetHtml {
        element: ELEMENT_PAGE_RESULTS,
        html: page.results.map(|results| results(state, ctx)).unwrap_or_default(),
    }
}

/// Commands for the regions named in `redraw`.
pub fn render(state: &AppState, redraw: Redraw, ctx: &RenderContext) -> Vec<DomCommand> {
    let mut commands = Vec::new();
    if redraw.page {
        commands.extend(apply_route(state, ctx));
    } else if redraw.results {
        commands.push(results_command(state, ctx, renderer_for(state.route())));
    }

    if redraw.modal {
        match state.modal_view() {
            Some(view) => {
                commands.push(DomCommand::SetHtml {
                    element: ELEMENT_MODAL_CONTENT,
                    html: render::modal(&view),
                });
                commands.push(DomCommand::SetModalVisible(true));
            }
            None => {
                commands.push(DomCommand::SetModalVisible(false));
                commands.push(DomCommand::SetHtml {
                    element: ELEMENT_MODAL_CONTENT,
                    html: String::new(),
                });
            }
        }
    }
    commands
}
