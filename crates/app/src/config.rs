use std::sync::OnceLock;

use shared_types::AppConfig;

const CONFIG_PATH: &str = "config.toml";

/// The web target has no filesystem, so the file is baked in at build time.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Parse the embedded `config.toml` on first use. A broken file falls back
/// to defaults with a warning rather than stopping the app.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let (config, error) = AppConfig::from_toml_or_default(EMBEDDED_CONFIG);
        match error {
            Some(e) => tracing::warn!(
                path = CONFIG_PATH,
                error = %e,
                "failed to parse config, using defaults"
            ),
            None => tracing::info!(
                path = CONFIG_PATH,
                summarizer_delay_ms = config.intake.summarizer_delay_ms,
                max_upload_bytes = config.intake.max_upload_bytes,
                require_input = config.intake.require_input,
                default_view = config.dashboard.default_view.as_str(),
                "config loaded"
            ),
        }
        config
    })
}
