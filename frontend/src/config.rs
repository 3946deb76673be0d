use log::Level;

pub const FIRM_NAME: &str = "Trembach Law Firm";
pub const INTAKE_EMAIL: &str = "info@trembachlawfirm.com";
pub const PHONE_DISPLAY: &str = "(818) 123-4567";
pub const PHONE_HREF: &str = "tel:8181234567";

/// Session storage key prefix, the route path is appended as is.
pub const SCROLL_KEY_PREFIX: &str = "scrollPosition_";
/// Delay before restoring a saved offset so the page has laid out.
pub const SCROLL_RESTORE_DELAY_MS: u32 = 100;
/// Quiet period before a burst of scroll events is persisted.
pub const SCROLL_PERSIST_DEBOUNCE_MS: u32 = 100;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Unknown form fields are programmer errors: panic while developing,
/// log and ignore in production.
#[cfg(debug_assertions)]
pub fn strict_forms() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn strict_forms() -> bool {
    false
}
