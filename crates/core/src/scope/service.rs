//! Scope resolution service.

use moneta_shared::Identity;

use super::types::{ProfilePartition, Scope};

/// Resolves the visibility scope for a caller.
pub struct ScopeResolver;

impl ScopeResolver {
    /// Derives the scope a caller may read for one request.
    ///
    /// - Super-admins see everything, regardless of the requested partition.
    /// - A caller without a tenant binding sees nothing. This is fail-closed:
    ///   an unresolvable tenant must never widen into another tenant's rows.
    /// - Everyone else sees their own tenant, within the requested partition.
    ///
    /// Pure function of its inputs; never fails.
    #[must_use]
    pub fn resolve(identity: &Identity, partition: ProfilePartition) -> Scope {
        if identity.is_super_admin {
            return Scope::Unrestricted;
        }

        match identity.tenant_id {
            Some(tenant_id) => Scope::Tenant {
                tenant_id,
                partition,
            },
            None => Scope::Empty,
        }
    }
}
