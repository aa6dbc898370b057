use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Accounts API",
        version = "0.1.0",
        description = "Account registration and management with password policy enforcement"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/accounts", api = domain_accounts::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
