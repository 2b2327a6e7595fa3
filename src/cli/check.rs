//! Check command.
//!
//! Reports which signing keys are present without printing any value, then
//! fails exactly like the build would.

use serde_json::json;
use tracing::debug;

use crate::cli::{output, Context};
use crate::core::properties::KeyStatus;
use crate::core::signing::{Resolver, Signing};
use crate::error::Result;

/// Check the property file and report per-key status.
pub fn execute(ctx: &Context, json: bool, optional: bool) -> Result<()> {
    let config = ctx.resolver_config(optional)?;
    let resolver = Resolver::open(config)?;
    let outcome = resolver.resolve();

    let keystore = match &outcome {
        Ok(Signing::Release(creds)) => {
            let path = creds.store_file_in(&resolver.config().store_base);
            let exists = path.is_file();
            if !exists {
                debug!(path = %path.display(), "keystore not found");
            }
            Some((path, exists))
        }
        _ => None,
    };

    let props = resolver.properties();

    if json {
        let keys: serde_json::Map<String, serde_json::Value> = props
            .report()
            .into_iter()
            .map(|(key, status)| (key.to_string(), json!(status)))
            .collect();
        let signing = match &outcome {
            Ok(Signing::Release(_)) => "release",
            Ok(Signing::Skipped) => "skipped",
            Err(_) => "failed",
        };

        let report = json!({
            "file": props.path().display().to_string(),
            "exists": props.exists(),
            "keys": keys,
            "signing": signing,
            "keystore": keystore.as_ref().map(|(path, exists)| json!({
                "path": path.display().to_string(),
                "exists": exists,
            })),
            "error": outcome.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::section("Signing");
        let file_state = if props.exists() { "" } else { " (not found)" };
        output::kv("file", format!("{}{}", output::path(props.path().display()), file_state));

        for (key, status) in props.report() {
            let word = status.to_string();
            let colored = output::status(
                &word,
                status == KeyStatus::Present,
                status == KeyStatus::Missing,
            );
            output::kv(key, colored);
        }

        if let Some((path, exists)) = &keystore {
            if !exists {
                output::warn(&format!(
                    "keystore {} does not exist",
                    output::path(path.display())
                ));
            }
        }
    }

    match outcome? {
        Signing::Release(creds) => {
            if !json {
                output::success(&format!("release signing with alias '{}'", creds.key_alias()));
            }
        }
        Signing::Skipped => {
            if !json {
                output::success("no property file, signing skipped");
            }
        }
    }

    Ok(())
}
