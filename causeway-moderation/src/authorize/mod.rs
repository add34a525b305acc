//! The admin authorization gate.
//!
//! Every destructive or privilege-escalating operation passes through here
//! immediately before it runs. The gate always re-fetches the live role
//! from the store: a session-cached "is admin" flag is never trusted,
//! because the role can change between page load and action.
use causeway_repository::AccountsRepository;
use causeway_shared::types::Role;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::AuthorizationError;

/// Configuration for the gate.
#[derive(Debug, Clone, Copy)]
pub struct GateConfig {
    /// The single identity allowed to grant or revoke the admin role.
    pub super_admin_id: Uuid,
}

/// Re-verifies administrator privilege against current persisted state.
pub struct AdminGate {
    accounts: Arc<dyn AccountsRepository>,
    config: GateConfig,
}

impl AdminGate {
    pub fn new(accounts: Arc<dyn AccountsRepository>, config: GateConfig) -> Self {
        Self { accounts, config }
    }

    /// Confirms the acting account currently holds the admin role.
    ///
    /// # Errors
    ///
    /// * `AuthorizationError::UnknownAccount` - the account does not exist.
    /// * `AuthorizationError::NotAdmin` - the live role is not admin.
    /// * `AuthorizationError::Repository` - the role lookup itself failed.
    pub async fn ensure_admin(&self, acting_admin_id: Uuid) -> Result<(), AuthorizationError> {
        match self.accounts.get_account_role(acting_admin_id).await? {
            Some(Role::Admin) => Ok(()),
            Some(role) => Err(AuthorizationError::NotAdmin {
                id: acting_admin_id,
                role,
            }),
            None => Err(AuthorizationError::UnknownAccount(acting_admin_id)),
        }
    }

    /// Confirms the acting account is the designated super admin and still
    /// holds the admin role. Required for role grants and revocations.
    pub async fn ensure_super_admin(
        &self,
        acting_admin_id: Uuid,
    ) -> Result<(), AuthorizationError> {
        if acting_admin_id != self.config.super_admin_id {
            return Err(AuthorizationError::NotSuperAdmin(acting_admin_id));
        }
        self.ensure_admin(acting_admin_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAccounts;

    #[tokio::test]
    async fn admin_passes_the_gate() {
        let admin_id = Uuid::new_v4();
        let accounts = Arc::new(MockAccounts::default().with_role(admin_id, Role::Admin));
        let gate = AdminGate::new(accounts, GateConfig { super_admin_id: admin_id });

        assert!(gate.ensure_admin(admin_id).await.is_ok());
    }

    #[tokio::test]
    async fn non_admin_roles_are_refused() {
        let dev_id = Uuid::new_v4();
        let accounts = Arc::new(MockAccounts::default().with_role(dev_id, Role::Developer));
        let gate = AdminGate::new(
            accounts,
            GateConfig {
                super_admin_id: Uuid::new_v4(),
            },
        );

        let result = gate.ensure_admin(dev_id).await;
        assert!(matches!(
            result,
            Err(AuthorizationError::NotAdmin {
                role: Role::Developer,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn unknown_accounts_are_refused() {
        let gate = AdminGate::new(
            Arc::new(MockAccounts::default()),
            GateConfig {
                super_admin_id: Uuid::new_v4(),
            },
        );

        let id = Uuid::new_v4();
        assert!(matches!(
            gate.ensure_admin(id).await,
            Err(AuthorizationError::UnknownAccount(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn super_admin_check_requires_the_designated_identity() {
        let super_admin = Uuid::new_v4();
        let other_admin = Uuid::new_v4();
        let accounts = Arc::new(
            MockAccounts::default()
                .with_role(super_admin, Role::Admin)
                .with_role(other_admin, Role::Admin),
        );
        let gate = AdminGate::new(
            accounts,
            GateConfig {
                super_admin_id: super_admin,
            },
        );

        assert!(gate.ensure_super_admin(super_admin).await.is_ok());
        assert!(matches!(
            gate.ensure_super_admin(other_admin).await,
            Err(AuthorizationError::NotSuperAdmin(id)) if id == other_admin
        ));
    }

    #[tokio::test]
    async fn super_admin_must_still_hold_the_admin_role() {
        // A revoked super admin id must not pass on the configured id alone.
        let super_admin = Uuid::new_v4();
        let accounts =
            Arc::new(MockAccounts::default().with_role(super_admin, Role::Developer));
        let gate = AdminGate::new(
            accounts,
            GateConfig {
                super_admin_id: super_admin,
            },
        );

        assert!(gate.ensure_super_admin(super_admin).await.is_err());
    }
}
