//! Shared key generation for storage backends.
//!
//! Key format: `media/{id}/original` for the uploaded blob and
//! `media/{id}/thumbnail` for its derived variant.

use uuid::Uuid;

/// Storage key for the unmodified uploaded blob.
pub fn original_key(id: Uuid) -> String {
    format!("media/{}/original", id)
}

/// Storage key for the derived thumbnail blob.
pub fn thumbnail_key(id: Uuid) -> String {
    format!("media/{}/thumbnail", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_by_id_and_role() {
        let id = Uuid::now_v7();
        assert_eq!(original_key(id), format!("media/{}/original", id));
        assert_eq!(thumbnail_key(id), format!("media/{}/thumbnail", id));
    }

    #[test]
    fn keys_for_distinct_ids_never_collide() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        assert_ne!(original_key(a), original_key(b));
        assert_ne!(original_key(a), thumbnail_key(a));
    }
}
