use std::process::ExitStatus;

/// Failures talking to the scripting bridge
#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    #[error("Failed to run osascript: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("osascript exited with {status}: {stderr}")]
    Script { status: ExitStatus, stderr: String },

    #[error("osascript output is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Unexpected osascript output for {what}: {output:?}")]
    UnexpectedOutput { what: &'static str, output: String },

    #[error("Failed to parse track metadata {output:?}: {source}")]
    Json {
        source: serde_json::Error,
        output: String,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("None of the player applications are available (tried {tried:?})")]
    ApplicationUnavailable {
        tried: Vec<String>,
        #[source]
        source: Option<BridgeError>,
    },

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
