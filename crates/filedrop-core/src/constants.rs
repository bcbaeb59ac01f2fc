//! Application-wide constants.

/// Lifetime of a presigned download link, in seconds (7 days).
pub const DOWNLOAD_LINK_TTL_SECS: u64 = 604_800;

/// Maximum number of recipient addresses a single upload may be shared with.
pub const MAX_RECIPIENTS: usize = 5;

/// Session key under which the authenticated user's email is stored.
pub const SESSION_USER_EMAIL_KEY: &str = "user_email";

/// Session key under which pending flash messages are stored.
pub const SESSION_FLASH_KEY: &str = "flash";
