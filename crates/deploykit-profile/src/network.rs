//! Networking profile table.

use deploykit_common::types::Durability;
use serde::Serialize;

/// Virtual network layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    /// Address block of the virtual network.
    pub cidr: &'static str,
    /// Number of NAT gateways.
    pub nat_gateways: u8,
    /// Number of availability zones spanned.
    pub max_azs: u8,
    /// Prefix length of every subnet.
    pub subnet_cidr_mask: u8,
}

const DURABLE: NetworkProfile = NetworkProfile {
    cidr: "10.0.0.0/16",
    nat_gateways: 2,
    max_azs: 2,
    subnet_cidr_mask: 24,
};

const DISPOSABLE: NetworkProfile = NetworkProfile {
    nat_gateways: 1,
    ..DURABLE
};

/// Resolves the networking profile for a durability class.
#[must_use]
pub const fn resolve(durability: Durability) -> NetworkProfile {
    match durability {
        Durability::Durable => DURABLE,
        Durability::Disposable => DISPOSABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durable_network_has_redundant_nat() {
        assert_eq!(resolve(Durability::Durable).nat_gateways, 2);
        assert_eq!(resolve(Durability::Disposable).nat_gateways, 1);
    }

    #[test]
    fn layout_is_shared_across_tiers() {
        let durable = resolve(Durability::Durable);
        let disposable = resolve(Durability::Disposable);
        assert_eq!(durable.cidr, disposable.cidr);
        assert_eq!(durable.max_azs, 2);
        assert_eq!(disposable.max_azs, 2);
        assert_eq!(durable.subnet_cidr_mask, 24);
        assert_eq!(disposable.subnet_cidr_mask, 24);
    }
}
