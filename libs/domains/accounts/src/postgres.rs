use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, AccountId};
use crate::repository::AccountRepository;

/// PostgreSQL implementation of AccountRepository using SeaORM
#[derive(Clone)]
pub struct PgAccountRepository {
    db: DatabaseConnection,
}

impl PgAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Row shape of the `accounts` table
#[derive(Debug, FromQueryResult)]
struct AccountRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: Some(row.id),
            name: row.name,
            email: row.email,
            password: row.password_hash,
        }
    }
}

fn db_error(e: sea_orm::DbErr) -> AccountError {
    AccountError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn save(&self, account: Account) -> AccountResult<Account> {
        let stmt = match account.id {
            None => Statement::from_sql_and_values(
                DbBackend::Postgres,
                r#"
                    INSERT INTO accounts (name, email, password_hash)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, email, password_hash
                "#,
                [
                    account.name.into(),
                    account.email.into(),
                    account.password.into(),
                ],
            ),
            Some(id) => Statement::from_sql_and_values(
                DbBackend::Postgres,
                r#"
                    INSERT INTO accounts (id, name, email, password_hash)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                    SET name = EXCLUDED.name,
                        email = EXCLUDED.email,
                        password_hash = EXCLUDED.password_hash,
                        updated_at = NOW()
                    RETURNING id, name, email, password_hash
                "#,
                [
                    id.into(),
                    account.name.into(),
                    account.email.into(),
                    account.password.into(),
                ],
            ),
        };

        let row = AccountRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or_else(|| AccountError::Internal("Failed to save account".to_string()))?;

        tracing::info!(account_id = row.id, "Saved account");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: AccountId) -> AccountResult<Option<Account>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT id, name, email, password_hash FROM accounts WHERE id = $1",
            [id.into()],
        );

        let row = AccountRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> AccountResult<Vec<Account>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT id, name, email, password_hash FROM accounts ORDER BY id",
            [],
        );

        let rows = AccountRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: AccountId) -> AccountResult<()> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            "DELETE FROM accounts WHERE id = $1",
            [id.into()],
        );

        let result = self.db.execute_raw(stmt).await.map_err(db_error)?;

        if result.rows_affected() > 0 {
            tracing::info!(account_id = id, "Deleted account");
        }

        Ok(())
    }
}
