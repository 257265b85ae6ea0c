mod bridge;
mod error;
mod osascript;
mod query;
mod types;

use anyhow::{Context, Result};

use crate::osascript::OsaScriptBridge;
use crate::query::StatusQuery;

fn main() {
    // stdout carries the payload only, so stay quiet unless RUST_LOG asks otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    match run() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<String> {
    let payload = StatusQuery::new(OsaScriptBridge::new())
        .run()
        .context("Failed to query player status")?;

    serde_json::to_string(&payload).context("Failed to serialize player status")
}
