//! Serverless database cluster table.

use deploykit_common::types::Durability;
use serde::Serialize;

/// Serverless capacity range in compute units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityRange {
    /// Minimum capacity.
    pub min: f64,
    /// Maximum capacity.
    pub max: f64,
}

/// Database cluster settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatabaseProfile {
    /// Whether the cluster refuses deletion.
    pub deletion_protection: bool,
    /// Days automated backups are kept.
    pub backup_retention_days: u32,
    /// Enhanced monitoring interval in seconds.
    pub monitoring_interval_secs: u32,
    /// Serverless capacity bounds.
    pub capacity: CapacityRange,
    /// Days performance insights are kept.
    pub performance_insights_retention_days: u32,
}

const DURABLE: DatabaseProfile = DatabaseProfile {
    deletion_protection: true,
    backup_retention_days: 7,
    monitoring_interval_secs: 60,
    capacity: CapacityRange { min: 2.0, max: 64.0 },
    performance_insights_retention_days: 7,
};

const DISPOSABLE: DatabaseProfile = DatabaseProfile {
    deletion_protection: false,
    backup_retention_days: 1,
    monitoring_interval_secs: 60,
    capacity: CapacityRange { min: 0.5, max: 2.0 },
    performance_insights_retention_days: 1,
};

/// Resolves the database profile for a durability class.
#[must_use]
pub const fn resolve(durability: Durability) -> DatabaseProfile {
    match durability {
        Durability::Durable => DURABLE,
        Durability::Disposable => DISPOSABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durable_database_is_protected() {
        let profile = resolve(Durability::Durable);
        assert!(profile.deletion_protection);
        assert_eq!(profile.backup_retention_days, 7);
        assert_eq!(profile.performance_insights_retention_days, 7);
        assert_eq!(profile.capacity, CapacityRange { min: 2.0, max: 64.0 });
    }

    #[test]
    fn disposable_database_is_minimal() {
        let profile = resolve(Durability::Disposable);
        assert!(!profile.deletion_protection);
        assert_eq!(profile.backup_retention_days, 1);
        assert_eq!(profile.performance_insights_retention_days, 1);
        assert_eq!(profile.capacity, CapacityRange { min: 0.5, max: 2.0 });
    }

    #[test]
    fn monitoring_interval_is_one_minute_everywhere() {
        assert_eq!(resolve(Durability::Durable).monitoring_interval_secs, 60);
        assert_eq!(resolve(Durability::Disposable).monitoring_interval_secs, 60);
    }
}
