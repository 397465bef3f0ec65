//! Data model for the Responder Desk portal client.
//!
//! Mirrors the JSON shapes served by the portal backend. The wire format is
//! loose in a few places (numeric identifiers, 0/1 booleans, an unavailable
//! response that carries nothing but a flag), so deserialization here is
//! deliberately tolerant and the GUI never has to touch raw JSON.

pub mod user;

pub use user::{MessageDraft, UserId, UserRecord, UserSummary};
