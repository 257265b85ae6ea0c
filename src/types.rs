use serde::{Deserialize, Serialize};

/// Metadata of the track currently loaded in the player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackInfo {
    pub name: String,
    pub artist: String,
    pub album: String,
}

impl TrackInfo {
    /// Short human readable form, e.g. "Song A by Artist A"
    pub fn summary(&self) -> String {
        format!("{} by {}", self.name, self.artist)
    }
}

/// What the tool prints. Track fields only exist on `Playing` and `Paused`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum StatusPayload {
    Off,
    Stopped,
    Playing {
        #[serde(flatten)]
        track: TrackInfo,
    },
    Paused {
        #[serde(flatten)]
        track: TrackInfo,
    },
}

impl StatusPayload {
    pub fn track(&self) -> Option<&TrackInfo> {
        match self {
            StatusPayload::Playing { track } | StatusPayload::Paused { track } => Some(track),
            StatusPayload::Off | StatusPayload::Stopped => None,
        }
    }
}

/// Player state as reported by the scripting bridge.
///
/// Only "stopped" and "playing" are recognised. Everything else (paused,
/// fast forwarding, rewinding, ...) is kept as `OtherNonStopped` and reported
/// as paused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Playing,
    OtherNonStopped(String),
}

impl PlayerState {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "stopped" => PlayerState::Stopped,
            "playing" => PlayerState::Playing,
            other => PlayerState::OtherNonStopped(other.to_string()),
        }
    }
}
