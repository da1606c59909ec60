use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::router::gate::ForbiddenRoutePolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Shape of `config.json` and of the `window.__HRDESK_*` globals. Every key
/// is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "VERIFY_SESSION")]
    pub verify_session: Option<bool>,
    #[serde(default, alias = "FORBIDDEN_ROUTE")]
    pub forbidden_route: Option<ForbiddenRoutePolicy>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills gaps in `self` from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            verify_session: self.verify_session.or(fallback.verify_session),
            forbidden_route: self.forbidden_route.or(fallback.forbidden_route),
            log_level: self.log_level.or(fallback.log_level),
        }
    }
}

/// Resolved configuration with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub verify_session: bool,
    pub forbidden_route: ForbiddenRoutePolicy,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::from(RuntimeConfig::default())
    }
}

impl From<RuntimeConfig> for AppConfig {
    fn from(cfg: RuntimeConfig) -> Self {
        let api_base_url = cfg
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let log_level = cfg
            .log_level
            .as_deref()
            .and_then(|level| level.parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Info);
        AppConfig {
            api_base_url,
            verify_session: cfg.verify_session.unwrap_or(true),
            forbidden_route: cfg.forbidden_route.unwrap_or_default(),
            log_level,
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn read_global(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json: String = js_sys::JSON::stringify(&any).ok()?.into();
    serde_json::from_str(&json).ok()
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__HRDESK_ENV (env.js) wins over window.__HRDESK_CONFIG.
    let env = read_global("__HRDESK_ENV").unwrap_or_default();
    let cfg = read_global("__HRDESK_CONFIG").unwrap_or_default();
    env.or(cfg)
}

const CONFIG_FILE: &str = "config.json";

/// Absolute location of `config.json` next to the page at `page_href`.
fn config_url(page_href: &str) -> Option<reqwest::Url> {
    reqwest::Url::parse(page_href).ok()?.join(CONFIG_FILE).ok()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = config_url(&href)?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache(config: AppConfig) -> AppConfig {
    APP_CONFIG.get_or_init(|| config).clone()
}

/// Resolves configuration once: globals, then `./config.json`, then
/// defaults. Later calls return the cached value.
pub async fn await_app_config() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    let merged = match fetch_runtime_config().await {
        Some(file) => globals.or(file),
        None => globals,
    };
    cache(AppConfig::from(merged))
}

pub async fn await_api_base_url() -> String {
    await_app_config().await.api_base_url
}

/// Cached configuration, or defaults when `init` has not finished.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn init() -> AppConfig {
    await_app_config().await
}
