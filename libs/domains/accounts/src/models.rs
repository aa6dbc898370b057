use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Identifier assigned by the repository on first save
pub type AccountId = i64;

fn validate_name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("Name is mandatory")));
    }
    Ok(())
}

fn validate_email_not_blank(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("Email is mandatory")));
    }
    Ok(())
}

/// Account entity as held by the repository.
///
/// `password` is always a hash once the account went through create or patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unset until the first save
    pub id: Option<AccountId>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    /// Build an unpersisted account (password should already be hashed)
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password,
        }
    }

    /// Overwrite name and email, leaving the stored password untouched
    pub fn apply_update(&mut self, update: UpdateAccount) {
        self.name = update.name;
        self.email = update.email;
    }

    /// Overwrite the password hash, leaving name and email untouched
    pub fn apply_password(&mut self, password_hash: String) {
        self.password = password_hash;
    }
}

/// Account response DTO (without password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: Option<AccountId>,
    pub name: String,
    pub email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}

/// DTO for creating a new account.
///
/// `password` is plaintext here and is checked by the password policy in the
/// service, not by the declarative rules below.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAccount {
    #[serde(default)]
    #[validate(
        custom(function = "validate_name_not_blank"),
        length(max = 50, message = "Name cannot be longer than 50 characters")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_email_not_blank"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// DTO for the full update. Only name and email can change here.
///
/// Absent fields decode as empty strings so they fail as mandatory.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAccount {
    #[serde(default)]
    #[validate(
        custom(function = "validate_name_not_blank"),
        length(max = 50, message = "Name cannot be longer than 50 characters")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_email_not_blank"),
        email(message = "Invalid email format")
    )]
    pub email: String,
}

/// DTO for the partial update. Only the password can change here.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PatchAccount {
    #[serde(default)]
    pub password: Option<String>,
}

/// Confirmation body for operations that return no account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, email: &str) -> CreateAccount {
        CreateAccount {
            name: name.to_string(),
            email: email.to_string(),
            password: Some("Password123".to_string()),
        }
    }

    #[test]
    fn test_create_account_valid_fields() {
        assert!(create_input("John Doe", "john@example.com").validate().is_ok());
    }

    #[test]
    fn test_create_account_blank_name() {
        let errors = create_input("   ", "john@example.com").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_create_account_name_too_long() {
        let long_name = "a".repeat(51);
        let errors = create_input(&long_name, "john@example.com")
            .validate()
            .unwrap_err();
        let name_errors = &errors.field_errors()["name"];
        assert_eq!(
            name_errors[0].message.as_deref(),
            Some("Name cannot be longer than 50 characters")
        );
    }

    #[test]
    fn test_create_account_name_at_limit() {
        let name = "a".repeat(50);
        assert!(create_input(&name, "john@example.com").validate().is_ok());
    }

    #[test]
    fn test_create_account_invalid_email() {
        let errors = create_input("John", "not-an-email").validate().unwrap_err();
        let email_errors = &errors.field_errors()["email"];
        assert_eq!(email_errors[0].message.as_deref(), Some("Invalid email format"));
    }

    #[test]
    fn test_update_account_blank_email() {
        let input = UpdateAccount {
            name: "Jane".to_string(),
            email: String::new(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_apply_update_keeps_password() {
        let mut account = Account::new(
            "John".to_string(),
            "john@example.com".to_string(),
            "$argon2id$hash".to_string(),
        );
        account.apply_update(UpdateAccount {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
        });

        assert_eq!(account.name, "Jane");
        assert_eq!(account.email, "jane@x.com");
        assert_eq!(account.password, "$argon2id$hash");
    }

    #[test]
    fn test_response_hides_password() {
        let mut account = Account::new(
            "John".to_string(),
            "john@example.com".to_string(),
            "$argon2id$hash".to_string(),
        );
        account.id = Some(7);

        let json = serde_json::to_value(AccountResponse::from(account)).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("password").is_none());
    }
}
