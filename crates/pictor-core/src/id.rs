//! Media identifier generation.
//!
//! Identifiers are UUIDv7: universally unique with a millisecond timestamp
//! prefix, so byte order approximates creation order. The id is assigned
//! before any storage write so that blob keys can reference it.

use uuid::Uuid;

/// Generate a new media identifier.
pub fn new_media_id() -> Uuid {
    Uuid::now_v7()
}
