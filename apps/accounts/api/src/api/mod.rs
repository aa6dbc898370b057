use axum::Router;
use domain_accounts::{
    AccountService, InMemoryAccountRepository, PgAccountRepository, handlers,
};
use sea_orm::DatabaseConnection;

/// Creates the API routes without the `/api` prefix, which `create_router` adds.
///
/// Accounts are stored in PostgreSQL when a connection is given and in
/// process memory otherwise.
pub fn routes(db: Option<&DatabaseConnection>) -> Router {
    let accounts = match db {
        Some(db) => handlers::router(AccountService::new(PgAccountRepository::new(db.clone()))),
        None => {
            tracing::warn!("DATABASE_URL not set, accounts are kept in memory");
            handlers::router(AccountService::new(InMemoryAccountRepository::new()))
        }
    };

    Router::new().nest("/accounts", accounts)
}
