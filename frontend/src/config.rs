//! Build-time settings.
//!
//! The bundle runs in the browser and has no environment of its own, so
//! the API origin is baked in at compile time from
//! `BRAND_STUDIO_API_BASE`. Left unset, requests go to the origin that
//! served the app.

/// Prefix for every API path, without a trailing slash.
pub const API_BASE: &str = match option_env!("BRAND_STUDIO_API_BASE") {
    Some(base) => base,
    None => "",
};

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Delay before a freshly mounted sheet gets its `show` class, so the
/// slide-in transition runs.
pub const SHEET_ANIMATION_DELAY_MS: u32 = 50;

/// Number of campaigns listed under "Recent" on the dashboard.
pub const DASHBOARD_RECENT_LIMIT: usize = 5;

/// Joins [`API_BASE`] and `path` with exactly one slash between them.
pub fn api_url(path: &str) -> String {
    let base = API_BASE.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
