//! Runtime configuration: every knob an environment variable with a default.

use crate::recipe::Theme;

#[derive(Debug, Clone)]
pub struct Config {
    /// Data-source location: an http(s) URL or a local path.
    pub recipes_location: String,
    pub fetch_timeout_secs: u64,
    /// SQLite file backing the persisted preference flag.
    pub prefs_path: String,
    /// Directory the container sinks write rendered HTML into.
    pub site_dir: String,
    /// Inclusive total-time ceiling for the "quick" filter, in minutes.
    pub quick_max_minutes: u32,
    /// Theme used when no preference has been persisted yet.
    pub default_theme: Theme,
}

impl Config {
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            recipes_location: std::env::var("RECIPES_URL").unwrap_or(base.recipes_location),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(base.fetch_timeout_secs),
            prefs_path: std::env::var("PREFS_PATH").unwrap_or(base.prefs_path),
            site_dir: std::env::var("SITE_DIR").unwrap_or(base.site_dir),
            quick_max_minutes: std::env::var("QUICK_MAX_MINS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(base.quick_max_minutes),
            default_theme: std::env::var("DEFAULT_THEME")
                .ok()
                .and_then(|v| Theme::parse(&v))
                .unwrap_or(base.default_theme),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipes_location: "recipes.xml".to_string(),
            fetch_timeout_secs: 10,
            prefs_path: "./prefs.sqlite".to_string(),
            site_dir: "./site".to_string(),
            quick_max_minutes: 15,
            default_theme: Theme::Light,
        }
    }
}
