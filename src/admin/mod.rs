//! Admin-mode flag derivation.
//!
//! Admin mode is a UI-visibility switch, not an access-control
//! mechanism: the key travels in cleartext in the page URL and the
//! comparison runs in client-reachable logic. It only decides whether
//! the create/edit/delete/toggle affordances are shown. Constant-time
//! comparison is used for the match itself.

use subtle::ConstantTimeEq;
use url::Url;

/// Query parameter carrying the admin key.
pub const ADMIN_PARAM: &str = "admin";

/// Derive the admin-mode flag from the page URL.
///
/// If no key is configured, admin mode is unlocked for everyone (dev
/// mode) and a warning is logged.
pub fn admin_mode(page_url: &Url, expected_key: Option<&str>) -> bool {
    let Some(expected) = expected_key else {
        tracing::warn!("No admin key configured (SQUADHUB_ADMIN_KEY). Admin affordances are visible to everyone!");
        return true;
    };

    page_url
        .query_pairs()
        .find(|(name, _)| name == ADMIN_PARAM)
        .map(|(_, value)| constant_time_compare(&value, expected))
        .unwrap_or(false)
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
