//! Caller identity established by the external auth collaborator.
//!
//! Moneta does not authenticate anyone. The surrounding application hands
//! the engine an [`Identity`] that was established once per session; the
//! engine treats it as immutable input and derives all row visibility
//! from it through the scope resolver.

use serde::{Deserialize, Serialize};

use crate::types::{TenantId, UserId};

/// The authenticated caller as seen by the reporting engine.
///
/// A user may lack a tenant binding (e.g. freshly provisioned, or a
/// broken profile join upstream). That is a representable state, not an
/// error: such a caller sees zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user this session belongs to.
    pub user_id: UserId,
    /// The tenant whose rows this user may read, if bound.
    pub tenant_id: Option<TenantId>,
    /// Whether this caller holds the cross-tenant administrative role.
    pub is_super_admin: bool,
}

impl Identity {
    /// Creates an identity bound to a tenant.
    #[must_use]
    pub const fn for_tenant(user_id: UserId, tenant_id: TenantId) -> Self {
        Self {
            user_id,
            tenant_id: Some(tenant_id),
            is_super_admin: false,
        }
    }

    /// Creates an identity with no tenant binding.
    #[must_use]
    pub const fn unbound(user_id: UserId) -> Self {
        Self {
            user_id,
            tenant_id: None,
            is_super_admin: false,
        }
    }

    /// Creates a super-admin identity with unrestricted visibility.
    #[must_use]
    pub const fn super_admin(user_id: UserId) -> Self {
        Self {
            user_id,
            tenant_id: None,
            is_super_admin: true,
        }
    }
}
