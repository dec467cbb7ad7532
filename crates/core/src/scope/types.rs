//! Scope domain types.

use moneta_shared::types::TenantId;
use serde::{Deserialize, Serialize};

/// Personal vs Business subdivision of one tenant's financial data.
///
/// The partition is request-scoped context chosen by the caller; it is
/// never persisted against an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfilePartition {
    /// Personal finances.
    Personal,
    /// Business finances.
    Business,
}

impl std::fmt::Display for ProfilePartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Personal => write!(f, "personal"),
            Self::Business => write!(f, "business"),
        }
    }
}

impl std::str::FromStr for ProfilePartition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "business" => Ok(Self::Business),
            _ => Err(format!("Unknown profile partition: {s}")),
        }
    }
}

/// The row-visibility boundary one report request is authorized to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scope {
    /// One tenant's rows within one profile partition.
    Tenant {
        /// The tenant whose rows are visible.
        tenant_id: TenantId,
        /// The partition within that tenant.
        partition: ProfilePartition,
    },
    /// Every row of every tenant (super-admin view).
    Unrestricted,
    /// Zero rows. The fail-closed result for an unresolvable tenant;
    /// a valid scope, not an error.
    Empty,
}

impl Scope {
    /// Returns true if this scope can never match any row.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if this scope spans all tenants.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }
}
