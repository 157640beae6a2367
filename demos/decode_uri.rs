//! Decode deep-link URIs given on the command line
//!
//! ```text
//! RUST_LOG=debug cargo run --example decode_uri -- "visma-identity://login?source=severa"
//! ```
//!
//! An optional `--config <json>` sets the decoder configuration.

use deeplink_sdk::{DecoderBuilder, RequestIdentifier};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1).peekable();
    let builder = if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let config = args
            .next()
            .ok_or_else(|| anyhow::anyhow!("--config needs a JSON argument"))?;
        DecoderBuilder::from_json(&config)?
    } else {
        DecoderBuilder::new()
    };
    let decoder = builder.build();

    let uris: Vec<String> = args.collect();
    if uris.is_empty() {
        anyhow::bail!("usage: decode_uri [--config <json>] <uri>...");
    }

    let mut failures = 0;
    for uri in &uris {
        let output = match RequestIdentifier::with_decoder(uri, &decoder) {
            Ok(identifier) => json!({ "uri": uri, "request": identifier }),
            Err(err) => {
                failures += 1;
                json!({ "uri": uri, "error": { "kind": err.kind().as_str(), "message": err.to_string() } })
            }
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    if failures > 0 {
        tracing::warn!(failures, total = uris.len(), "Some URIs were rejected");
    }
    Ok(())
}
