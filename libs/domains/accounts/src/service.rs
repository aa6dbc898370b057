use std::sync::Arc;
use tracing::instrument;

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, AccountId, CreateAccount, PatchAccount, UpdateAccount};
use crate::password::{Argon2Hasher, PasswordHasher, validate_password};
use crate::repository::AccountRepository;

/// Service layer for Account business logic.
///
/// Holds no state besides its collaborators. "Not found" is reported as
/// `Ok(None)`, never as an error.
pub struct AccountService<R: AccountRepository, H: PasswordHasher = Argon2Hasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AccountRepository, H: PasswordHasher> Clone for AccountService<R, H> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_hasher(repository, Argon2Hasher::new())
    }
}

impl<R: AccountRepository, H: PasswordHasher> AccountService<R, H> {
    pub fn with_hasher(repository: R, hasher: H) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher: Arc::new(hasher),
        }
    }

    /// Create a new account with password hashing
    #[instrument(skip_all)]
    pub async fn create_account(&self, input: Option<CreateAccount>) -> AccountResult<Account> {
        let input = input.ok_or(AccountError::NullInput)?;

        let password = Self::check_password(input.password.as_deref())?;
        let password_hash = self.hasher.hash(password)?;

        let account = Account::new(input.name, input.email, password_hash);
        let created = self.repository.save(account).await?;

        tracing::info!(account_id = ?created.id, "Created account");
        Ok(created)
    }

    /// Get an account by ID
    #[instrument(skip(self))]
    pub async fn get_account(&self, id: AccountId) -> AccountResult<Option<Account>> {
        self.repository.find_by_id(id).await
    }

    /// List every account in repository order
    #[instrument(skip(self))]
    pub async fn list_accounts(&self) -> AccountResult<Vec<Account>> {
        self.repository.find_all().await
    }

    /// Overwrite name and email of an existing account.
    ///
    /// The stored password hash is left untouched.
    #[instrument(skip(self, input))]
    pub async fn update_account(
        &self,
        id: AccountId,
        input: UpdateAccount,
    ) -> AccountResult<Option<Account>> {
        let Some(mut account) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        account.apply_update(input);
        let updated = self.repository.save(account).await?;

        tracing::info!(account_id = id, "Updated account");
        Ok(Some(updated))
    }

    /// Replace the password of an existing account.
    ///
    /// Name and email are left untouched. A rejected password leaves the
    /// stored record unchanged.
    #[instrument(skip(self, input))]
    pub async fn patch_account(
        &self,
        id: AccountId,
        input: PatchAccount,
    ) -> AccountResult<Option<Account>> {
        let Some(mut account) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let password = Self::check_password(input.password.as_deref())?;
        let password_hash = self.hasher.hash(password)?;

        account.apply_password(password_hash);
        let patched = self.repository.save(account).await?;

        tracing::info!(account_id = id, "Patched account password");
        Ok(Some(patched))
    }

    /// Delete an account. Existence is not checked here.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, id: AccountId) -> AccountResult<()> {
        self.repository.delete_by_id(id).await?;

        tracing::info!(account_id = id, "Deleted account");
        Ok(())
    }

    fn check_password(password: Option<&str>) -> AccountResult<&str> {
        validate_password(password).inspect_err(|e| {
            tracing::debug!(reason = %e, "Rejected password");
        })
    }
}
