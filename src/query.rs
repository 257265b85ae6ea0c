use crate::bridge::{resolve_first, AutomationBridge, PlayerApp, DEFAULT_CANDIDATES};
use crate::error::QueryError;
use crate::types::{PlayerState, StatusPayload};

/// One-shot query of the player's status
pub struct StatusQuery<'a, B> {
    bridge: B,
    candidates: &'a [&'a str],
}

impl<B: AutomationBridge> StatusQuery<'static, B> {
    pub fn new(bridge: B) -> Self {
        Self::with_candidates(bridge, DEFAULT_CANDIDATES)
    }
}

impl<'a, B: AutomationBridge> StatusQuery<'a, B> {
    pub fn with_candidates(bridge: B, candidates: &'a [&'a str]) -> Self {
        Self { bridge, candidates }
    }

    pub fn run(&self) -> Result<StatusPayload, QueryError> {
        let app = resolve_first(&self.bridge, self.candidates)?;

        if !app.is_running()? {
            log::info!("Player is not running");
            return Ok(StatusPayload::Off);
        }

        let state = app.player_state()?;
        log::debug!("Player state: {:?}", state);

        let payload = match state {
            PlayerState::Stopped => StatusPayload::Stopped,
            PlayerState::Playing => StatusPayload::Playing {
                track: app.current_track()?,
            },
            // fast forwarding, rewinding etc. are reported as paused
            PlayerState::OtherNonStopped(_) => StatusPayload::Paused {
                track: app.current_track()?,
            },
        };

        match payload.track() {
            Some(track) => log::info!("Current track: {} ({:?})", track.summary(), state),
            None => log::info!("Player is stopped"),
        }

        Ok(payload)
    }
}
