//! Accounts Domain
//!
//! This module provides a complete domain implementation for account management.
//!
//! # Features
//!
//! - Account CRUD operations
//! - Password policy (length, mixed case, digit, alphanumeric only)
//! - Password hashing with Argon2
//! - Separate update paths: `update` touches name/email, `patch` touches the password
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, field validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Password policy, hashing, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_accounts::{
//!     handlers,
//!     repository::InMemoryAccountRepository,
//!     service::AccountService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryAccountRepository::new();
//! let service = AccountService::new(repository);
//!
//! // Create Axum router
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{AccountError, AccountResult};
pub use models::{
    Account, AccountId, AccountResponse, CreateAccount, MessageResponse, PatchAccount,
    UpdateAccount,
};
pub use password::{Argon2Hasher, PasswordHasher, validate_password};
pub use postgres::PgAccountRepository;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use service::AccountService;
