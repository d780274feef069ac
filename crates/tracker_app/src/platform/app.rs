use tracker_core::{update, AppState, Catalog, Msg};
use tracker_logging::{next_event_turn, tracker_debug, tracker_info, tracker_trace};

use super::dom::DomHost;
use super::effects::EffectRunner;
use super::events::{self, DomEvent};
use super::persistence::Storage;
use super::router;
use super::ui::layout;
use super::ui::render::RenderContext;

/// One page session: state, the document it renders into, and the effect runner.
pub struct App<H: DomHost> {
    state: AppState,
    host: H,
    effects: EffectRunner,
    ctx: RenderContext,
}

impl<H: DomHost> App<H> {
    /// Loads both stores, builds the shell and applies the route for the host's current path.
    pub fn start(catalog: Catalog, storage: Storage, mut host: H, ctx: RenderContext) -> Self {
        let preferences = storage.load_preferences();
        let saved = storage.load_saved();
        let path = host.location_path();
        tracker_info!(
            "Starting session at {} ({} jobs, {} saved, preferences active: {})",
            path,
            catalog.len(),
            saved.len(),
            preferences.is_active()
        );

        let state = AppState::new(catalog, preferences, saved, &path);
        host.apply_all(layout::initial_commands());

        let mut app = Self {
            state,
            host,
            effects: EffectRunner::new(storage),
            ctx,
        };
        app.flush_render();
        app
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Runs one event to completion: translate, update, effects, render.
    pub fn handle_event(&mut self, event: DomEvent) {
        let turn = next_event_turn();
        let msg = events::to_msg(event);
        if msg == Msg::NoOp {
            tracker_trace!("turn={} ignored event", turn);
            return;
        }
        tracker_debug!("turn={} dispatch {:?}", turn, msg);
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects, &mut self.host);
        self.flush_render();
    }

    fn flush_render(&mut self) {
        let redraw = self.state.consume_redraw();
        if redraw.is_empty() {
            return;
        }
        let commands = router::render(&self.state, redraw, &self.ctx);
        tracker_trace!("render {:?} -> {} commands", redraw, commands.len());
        self.host.apply_all(commands);
    }
}
