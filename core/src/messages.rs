//! Common error messages used across Scribe components.
//!
//! These constants keep the wording identical between the engine, the
//! GraphQL layer and the tests that assert on it.

/// Error: another user already registered this email.
pub const ERR_EMAIL_TAKEN: &str = "Email taken";

/// Error: the referenced author is not a known user.
pub const ERR_AUTHOR_MISSING: &str = "author does not exist";

/// Error: the referenced post is missing or unpublished.
pub const ERR_POST_INVALID: &str = "post invalid";

