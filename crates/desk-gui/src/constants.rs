//! User-facing copy shared across views.
//!
//! Transport errors, bad statuses, and undecodable payloads all surface the
//! same load-error notice; only business unavailability gets its own copy.

/// Notice shown when a user lookup fails, whatever the cause.
pub const DETAIL_LOAD_ERROR: &str = "Unable to load user details.";

/// Notice shown when the backend reports the user as unavailable.
pub const DETAIL_UNAVAILABLE: &str = "User currently unavailable";

/// Confirmation shown after a message was accepted by the backend.
pub const MESSAGE_SENT: &str = "Message sent.";
