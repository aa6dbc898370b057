use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, JsonBody, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;
use validator::Validate;

use crate::error::{AccountError, AccountResult};
use crate::models::{AccountResponse, CreateAccount, MessageResponse, PatchAccount, UpdateAccount};
use crate::password::PasswordHasher;
use crate::repository::AccountRepository;
use crate::service::AccountService;

pub const TAG: &str = "accounts";

/// OpenAPI documentation for Accounts API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_accounts,
        create_account,
        get_account,
        update_account,
        patch_account,
        delete_account,
    ),
    components(
        schemas(AccountResponse, CreateAccount, UpdateAccount, PatchAccount, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Account management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the accounts router with all HTTP endpoints
pub fn router<R, H>(service: AccountService<R, H>) -> Router
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/{id}",
            get(get_account)
                .put(update_account)
                .patch(patch_account)
                .delete(delete_account),
        )
        .with_state(shared_service)
}

/// List all accounts
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of accounts", body = Vec<AccountResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_accounts<R: AccountRepository, H: PasswordHasher>(
    State(service): State<Arc<AccountService<R, H>>>,
) -> AccountResult<Json<Vec<AccountResponse>>> {
    let accounts = service.list_accounts().await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// Create a new account
///
/// A `null` body is passed to the service as a missing account. Field errors
/// and password policy failures are both answered with 400.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateAccount,
    responses(
        (status = 201, description = "Account created successfully", body = AccountResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_account<R: AccountRepository, H: PasswordHasher>(
    State(service): State<Arc<AccountService<R, H>>>,
    JsonBody(input): JsonBody<Option<CreateAccount>>,
) -> AccountResult<impl IntoResponse> {
    if let Some(ref fields) = input {
        fields.validate()?;
    }

    let account = service.create_account(input).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_account<R: AccountRepository, H: PasswordHasher>(
    State(service): State<Arc<AccountService<R, H>>>,
    IdPath(id): IdPath,
) -> AccountResult<Json<AccountResponse>> {
    let account = service
        .get_account(id)
        .await?
        .ok_or(AccountError::NotFound(id))?;
    Ok(Json(account.into()))
}

/// Update an account's name and email
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Account ID")),
    request_body = UpdateAccount,
    responses(
        (status = 200, description = "Account updated", body = AccountResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_account<R: AccountRepository, H: PasswordHasher>(
    State(service): State<Arc<AccountService<R, H>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateAccount>,
) -> AccountResult<Json<AccountResponse>> {
    let account = service
        .update_account(id, input)
        .await?
        .ok_or(AccountError::NotFound(id))?;
    Ok(Json(account.into()))
}

/// Replace an account's password
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Account ID")),
    request_body = PatchAccount,
    responses(
        (status = 200, description = "Password replaced", body = AccountResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_account<R: AccountRepository, H: PasswordHasher>(
    State(service): State<Arc<AccountService<R, H>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<PatchAccount>,
) -> AccountResult<Json<AccountResponse>> {
    let account = service
        .patch_account(id, input)
        .await?
        .ok_or(AccountError::NotFound(id))?;
    Ok(Json(account.into()))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_account<R: AccountRepository, H: PasswordHasher>(
    State(service): State<Arc<AccountService<R, H>>>,
    IdPath(id): IdPath,
) -> AccountResult<Json<MessageResponse>> {
    service.delete_account(id).await?;
    Ok(Json(MessageResponse {
        message: "Account Successfully Deleted".to_string(),
    }))
}
