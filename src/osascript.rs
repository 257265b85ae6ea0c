use std::process::Command;

use crate::bridge::{AutomationBridge, PlayerApp};
use crate::error::BridgeError;
use crate::types::{PlayerState, TrackInfo};

/// Scripting bridge backed by `osascript -l JavaScript`.
///
/// Every call runs one short JavaScript for Automation snippet and reads its
/// result from stdout.
#[derive(Debug, Clone, Default)]
pub struct OsaScriptBridge;

impl OsaScriptBridge {
    pub fn new() -> Self {
        Self
    }
}

impl AutomationBridge for OsaScriptBridge {
    type App = OsaScriptApp;

    fn resolve(&self, name: &str) -> Result<OsaScriptApp, BridgeError> {
        // Application() throws when the scripting bridge doesn't know the name
        let output = run_script(&format!("Application({}); true", js_string(name)))?;
        parse_bool("resolve", &output)?;
        Ok(OsaScriptApp {
            name: name.to_string(),
        })
    }
}

/// Handle to one named application
#[derive(Debug, Clone)]
pub struct OsaScriptApp {
    name: String,
}

impl OsaScriptApp {
    fn app_expr(&self) -> String {
        format!("Application({})", js_string(&self.name))
    }
}

impl PlayerApp for OsaScriptApp {
    fn is_running(&self) -> Result<bool, BridgeError> {
        let output = run_script(&format!("{}.running()", self.app_expr()))?;
        parse_bool("running", &output)
    }

    fn player_state(&self) -> Result<PlayerState, BridgeError> {
        let output = run_script(&format!("{}.playerState()", self.app_expr()))?;
        Ok(PlayerState::parse(&output))
    }

    fn current_track(&self) -> Result<TrackInfo, BridgeError> {
        let output = run_script(&track_script(&self.app_expr()))?;
        parse_track(&output)
    }
}

fn track_script(app_expr: &str) -> String {
    format!(
        "var track = {}.currentTrack;\n\
         JSON.stringify({{ name: track.name(), artist: track.artist(), album: track.album() }});",
        app_expr
    )
}

/// Quote a value as a JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Run a JXA snippet and return its trimmed stdout
fn run_script(script: &str) -> Result<String, BridgeError> {
    log::debug!("Running osascript: {}", script);

    let output = Command::new("osascript")
        .arg("-l")
        .arg("JavaScript")
        .arg("-e")
        .arg(script)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(BridgeError::Script {
            status: output.status,
            stderr,
        });
    }

    // osascript terminates its result with a newline
    let stdout = std::str::from_utf8(&output.stdout)?;
    let result = stdout.trim_end_matches(['\r', '\n']).to_string();
    log::debug!("osascript result: {:?}", result);
    Ok(result)
}

fn parse_bool(what: &'static str, output: &str) -> Result<bool, BridgeError> {
    match output.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(BridgeError::UnexpectedOutput {
            what,
            output: output.to_string(),
        }),
    }
}

fn parse_track(output: &str) -> Result<TrackInfo, BridgeError> {
    serde_json::from_str(output.trim()).map_err(|source| BridgeError::Json {
        source,
        output: output.to_string(),
    })
}
