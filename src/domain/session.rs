//! Client-side view of the backend session.
//!
//! The backend owns the session. All this side ever learns is whether the
//! refresh cookie is present, which is a hint and never proof: a stale cookie
//! still lets a user reach the dashboard, where the first authenticated call
//! fails and goes through the refresh path instead.

/// Cookie set by the backend on login/signup. Only its presence is read.
pub const DEFAULT_REFRESH_COOKIE: &str = "refreshToken";

/// Public entry point (login / signup).
pub const ENTRY_PATH: &str = "/";

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Capability to force a top-level navigation, used when the session cannot
/// be recovered.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Allow,
    Redirect(&'static str),
}

/// Navigation-time redirect decision.
///
/// Only `/` and the `/dashboard` prefix are watched; the prefix match is a
/// plain `starts_with`, so `/dashboardx` counts as dashboard too.
pub fn guard_decision(has_refresh_cookie: bool, path: &str) -> GuardAction {
    if has_refresh_cookie && path == ENTRY_PATH {
        return GuardAction::Redirect(DASHBOARD_PATH);
    }

    if !has_refresh_cookie && path.starts_with(DASHBOARD_PATH) {
        return GuardAction::Redirect(ENTRY_PATH);
    }

    GuardAction::Allow
}
