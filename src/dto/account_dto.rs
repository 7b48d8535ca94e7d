use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::account::{Applicant, Employer};

/// Employer profile without the credential field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Applicant profile without the credential field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Employer> for EmployerProfile {
    fn from(value: Employer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            created_at: value.created_at,
        }
    }
}

impl From<Applicant> for ApplicantProfile {
    fn from(value: Applicant) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            status: value.status,
            created_at: value.created_at,
        }
    }
}
