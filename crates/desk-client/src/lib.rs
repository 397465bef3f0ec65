//! HTTP client for the Responder Desk portal backend.
//!
//! The GUI talks to the portal exclusively through [`PortalClient`]: user
//! directory listing, lookup of a single user by identifier, and message
//! submission. The contract is thin: given an identifier, eventually produce
//! a record or a failure. No retries, no caching.

mod api;
mod error;

pub use api::PortalClient;
pub use error::{ApiError, Result};
