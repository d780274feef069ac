use tracker_core::Effect;
use tracker_logging::{event_turn, tracker_debug, tracker_info, tracker_warn};

use super::dom::{DomCommand, DomHost};
use super::persistence::Storage;

/// Executes effects against storage and the host document.
pub struct EffectRunner {
    storage: Storage,
}

impl EffectRunner {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn run<H: DomHost>(&mut self, effects: Vec<Effect>, host: &mut H) {
        for effect in effects {
            match effect {
                Effect::PushHistory { state, path } => {
                    tracker_debug!(
                        "turn={} PushHistory state={} path={}",
                        event_turn(),
                        state,
                        path
                    );
                    host.apply(DomCommand::PushHistory { state, path });
                }
                Effect::PersistSaved(ids) => {
                    if !self.storage.save_saved(&ids) {
                        tracker_warn!(
                            "turn={} Saved set kept in memory only ({} ids)",
                            event_turn(),
                            ids.len()
                        );
                    }
                }
                Effect::PersistPreferences(preferences) => {
                    if !self.storage.save_preferences(&preferences) {
                        tracker_warn!("turn={} Preferences kept in memory only", event_turn());
                    }
                }
                Effect::OpenExternal { url } => {
                    tracker_info!("turn={} OpenExternal url={}", event_turn(), url);
                    host.apply(DomCommand::OpenWindow { url });
                }
            }
        }
    }
}
