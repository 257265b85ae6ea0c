use crate::error::{BridgeError, QueryError};
use crate::types::{PlayerState, TrackInfo};

/// Application names tried in order. "iTunes" covers macOS before Catalina.
pub const DEFAULT_CANDIDATES: &[&str] = &["Music", "iTunes"];

/// The three things we ever ask a player application
pub trait PlayerApp {
    fn is_running(&self) -> Result<bool, BridgeError>;
    fn player_state(&self) -> Result<PlayerState, BridgeError>;
    fn current_track(&self) -> Result<TrackInfo, BridgeError>;
}

/// Hands out player handles by application display name
pub trait AutomationBridge {
    type App: PlayerApp;

    fn resolve(&self, name: &str) -> Result<Self::App, BridgeError>;
}

/// Return the handle of the first candidate that resolves.
pub fn resolve_first<B: AutomationBridge>(
    bridge: &B,
    candidates: &[&str],
) -> Result<B::App, QueryError> {
    let mut last_error = None;

    for name in candidates {
        match bridge.resolve(name) {
            Ok(app) => {
                log::debug!("Resolved application {:?}", name);
                return Ok(app);
            }
            Err(e) => {
                log::debug!("Application {:?} unavailable: {}", name, e);
                last_error = Some(e);
            }
        }
    }

    log::warn!("No player application could be resolved from {:?}", candidates);
    Err(QueryError::ApplicationUnavailable {
        tried: candidates.iter().map(|name| name.to_string()).collect(),
        source: last_error,
    })
}

/// Scripted in-memory bridge for tests
#[cfg(test)]
pub mod fake {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone)]
    pub struct FakeApp {
        pub running: bool,
        pub state: String,
        pub track: Option<TrackInfo>,
    }

    impl FakeApp {
        pub fn off() -> Self {
            Self {
                running: false,
                state: "stopped".into(),
                track: None,
            }
        }

        pub fn with_state(state: &str, track: Option<TrackInfo>) -> Self {
            Self {
                running: true,
                state: state.into(),
                track,
            }
        }
    }

    impl PlayerApp for FakeApp {
        fn is_running(&self) -> Result<bool, BridgeError> {
            Ok(self.running)
        }

        fn player_state(&self) -> Result<PlayerState, BridgeError> {
            Ok(PlayerState::parse(&self.state))
        }

        fn current_track(&self) -> Result<TrackInfo, BridgeError> {
            self.track
                .clone()
                .ok_or_else(|| BridgeError::UnexpectedOutput {
                    what: "current track",
                    output: String::new(),
                })
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeBridge {
        pub apps: HashMap<String, FakeApp>,
    }

    impl FakeBridge {
        pub fn with_app(name: &str, app: FakeApp) -> Self {
            let mut bridge = Self::default();
            bridge.apps.insert(name.to_string(), app);
            bridge
        }
    }

    impl AutomationBridge for FakeBridge {
        type App = FakeApp;

        fn resolve(&self, name: &str) -> Result<FakeApp, BridgeError> {
            self.apps
                .get(name)
                .cloned()
                .ok_or_else(|| BridgeError::UnexpectedOutput {
                    what: "resolve",
                    output: name.to_string(),
                })
        }
    }
}
