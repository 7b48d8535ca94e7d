use subtle::ConstantTimeEq;

use crate::dto::auth_dto::{LoginPayload, RegistrationPayload};
use crate::error::{Error, Result};
use crate::models::account::{Account, Applicant, Employer, Role};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the account in the table selected by the payload's role.
    /// A duplicate email surfaces as Conflict through the unique index.
    pub async fn register(&self, payload: RegistrationPayload) -> Result<Account> {
        let account = match payload.role {
            Role::Employer => {
                let employer = sqlx::query_as::<_, Employer>(
                    r#"
                    INSERT INTO employers (name, email, password)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, email, password, created_at
                    "#,
                )
                .bind(&payload.name)
                .bind(&payload.email)
                .bind(&payload.password)
                .fetch_one(&self.pool)
                .await?;
                Account::Employer(employer)
            }
            Role::Applicant => {
                let applicant = sqlx::query_as::<_, Applicant>(
                    r#"
                    INSERT INTO applicants (name, email, password, status)
                    VALUES ($1, $2, $3, 'inactive')
                    RETURNING id, name, email, password, status, created_at
                    "#,
                )
                .bind(&payload.name)
                .bind(&payload.email)
                .bind(&payload.password)
                .fetch_one(&self.pool)
                .await?;
                Account::Applicant(applicant)
            }
        };

        tracing::info!(role = %account.role(), id = account.id(), "account registered");
        Ok(account)
    }

    /// Looks up the account by email in the role's table and compares the
    /// credential in constant time. Unknown email is NotFound; a mismatch
    /// is Unauthorized.
    pub async fn login(&self, payload: LoginPayload) -> Result<Account> {
        let account = self
            .find_by_email(payload.role, &payload.email)
            .await?
            .ok_or_else(|| Error::NotFound("No account with this email".to_string()))?;

        let matches: bool = account
            .password()
            .as_bytes()
            .ct_eq(payload.password.as_bytes())
            .into();
        if !matches {
            return Err(Error::Unauthorized("Invalid password".to_string()));
        }

        Ok(account)
    }

    pub async fn find_by_email(&self, role: Role, email: &str) -> Result<Option<Account>> {
        let account = match role {
            Role::Employer => sqlx::query_as::<_, Employer>(
                r#"SELECT id, name, email, password, created_at FROM employers WHERE email = $1"#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .map(Account::Employer),
            Role::Applicant => sqlx::query_as::<_, Applicant>(
                r#"SELECT id, name, email, password, status, created_at FROM applicants WHERE email = $1"#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .map(Account::Applicant),
        };

        Ok(account)
    }

    pub async fn get_employer(&self, id: i64) -> Result<Option<Employer>> {
        let employer = sqlx::query_as::<_, Employer>(
            r#"SELECT id, name, email, password, created_at FROM employers WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employer)
    }

    pub async fn get_applicant(&self, id: i64) -> Result<Option<Applicant>> {
        let applicant = sqlx::query_as::<_, Applicant>(
            r#"SELECT id, name, email, password, status, created_at FROM applicants WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(applicant)
    }
}
