//! Object storage lifecycle table.

use deploykit_common::types::Durability;
use serde::Serialize;

/// What happens to a bucket when its deployment unit is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Keep the bucket and its objects.
    Retain,
    /// Delete the bucket.
    Destroy,
}

/// Object storage lifecycle settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageProfile {
    /// Removal policy of the bucket.
    pub removal_policy: RemovalPolicy,
    /// Whether objects are emptied automatically on teardown.
    pub auto_delete_objects: bool,
    /// Days after which objects expire.
    pub expiration_days: u32,
}

const DURABLE: StorageProfile = StorageProfile {
    removal_policy: RemovalPolicy::Retain,
    auto_delete_objects: false,
    expiration_days: 90,
};

const DISPOSABLE: StorageProfile = StorageProfile {
    removal_policy: RemovalPolicy::Destroy,
    auto_delete_objects: true,
    expiration_days: 30,
};

/// Resolves the storage profile for a durability class.
#[must_use]
pub const fn resolve(durability: Durability) -> StorageProfile {
    match durability {
        Durability::Durable => DURABLE,
        Durability::Disposable => DISPOSABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durable_storage_is_retained() {
        let profile = resolve(Durability::Durable);
        assert_eq!(profile.removal_policy, RemovalPolicy::Retain);
        assert!(!profile.auto_delete_objects);
        assert_eq!(profile.expiration_days, 90);
    }

    #[test]
    fn disposable_storage_is_destroyed() {
        let profile = resolve(Durability::Disposable);
        assert_eq!(profile.removal_policy, RemovalPolicy::Destroy);
        assert!(profile.auto_delete_objects);
        assert_eq!(profile.expiration_days, 30);
    }
}
