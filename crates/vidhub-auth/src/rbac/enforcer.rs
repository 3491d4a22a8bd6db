//! RBAC enforcement logic.
//!
//! VidHub has two tiers: any authenticated user may view, only admins may
//! mutate.

use vidhub_core::error::AppError;
use vidhub_entity::user::UserRole;

/// Enforces role-based access control.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ok(())` for admins, an `Authorization` error otherwise.
    pub fn require_admin(&self, role: UserRole) -> Result<(), AppError> {
        if self.is_admin(role) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' may not perform admin operations"
            )))
        }
    }

    /// Returns whether the role is an admin.
    pub fn is_admin(&self, role: UserRole) -> bool {
        matches!(role, UserRole::Admin)
    }
}
