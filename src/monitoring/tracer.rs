/*!
 * Structured Tracing
 *
 * One subscriber for library and host: an `EnvFilter` from RUST_LOG (falling
 * back to `tactsim=info`) and either compact text or one JSON object per event
 * when SIM_TRACE_JSON is set. Engine events carry tick, pid and core as fields,
 * so the JSON form is flat.
 */

use crate::core::config::env_flag;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "tactsim=info";
const JSON_ENV: &str = "SIM_TRACE_JSON";

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let json = env_flag(JSON_ENV);

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
    });
    let text_layer = (!json).then(|| fmt::layer().with_target(false).compact());

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    debug!(json, "Tracing subscriber installed");
    Ok(())
}
