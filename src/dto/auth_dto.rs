use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::account::{Account, Role};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
}

/// Identity returned on successful login/registration; the same values
/// are set as the `id` and `role` session cookies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub role: Role,
    pub name: String,
}

impl From<&Account> for AuthUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            role: account.role(),
            name: account.name().to_string(),
        }
    }
}
