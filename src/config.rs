pub const SITE_NAME: &str = "CodeFlick";
pub const CONTACT_EMAIL: &str = "hello@codeflick.dev";

/// Verbose console logging in dev builds, warnings only in release.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}
