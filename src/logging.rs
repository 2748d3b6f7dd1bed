//! Diagnostic logging.
//!
//! Every module logs through `tracing` macros. [`init`] installs a global
//! subscriber once per process:
//!
//! - **Native** (CLI, tests): a `tracing-subscriber` formatter writing
//!   human-readable lines to stderr, filtered by the `LANDING_KIT_LOG`
//!   environment variable (`info` when unset).
//! - **wasm32**: a `tracing-wasm` layer that sends each event to the browser
//!   console method matching its level. There is no environment, so the
//!   directive is read as a maximum level.
//!
//! Calling [`init`] more than once is harmless; later calls are ignored.

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "LANDING_KIT_LOG";

#[cfg(not(target_arch = "wasm32"))]
fn filter(default_directive: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive))
}

/// Install the global subscriber with `default_directive` (e.g. `"info"`)
/// as the fallback filter.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(default_directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Install the console subscriber with `default_directive` (e.g. `"info"`)
/// as the maximum level. Unknown directives fall back to `info`.
#[cfg(target_arch = "wasm32")]
pub fn init(default_directive: &str) {
    use std::sync::Once;
    static INSTALL: Once = Once::new();

    let level = default_directive
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    INSTALL.call_once(|| {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .set_report_logs_in_timings(false)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}
