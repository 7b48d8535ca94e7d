use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account variant. Stored in the `role` session cookie and used to pick
/// the backing table; never matched as a raw string outside this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employer,
    Applicant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "employer",
            Role::Applicant => "applicant",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "employer" => Some(Role::Employer),
            "applicant" => Some(Role::Applicant),
            _ => None,
        }
    }

    /// Landing page for an authenticated account of this role.
    pub fn home_path(&self, id: i64) -> String {
        match self {
            Role::Employer => format!("/employer/works/{}", id),
            Role::Applicant => format!("/applicant/vacancies/{}", id),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Applicant {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Sum type over the two account tables, so callers discriminate through
/// the type system instead of comparing role strings.
#[derive(Debug, Clone)]
pub enum Account {
    Employer(Employer),
    Applicant(Applicant),
}

impl Account {
    pub fn id(&self) -> i64 {
        match self {
            Account::Employer(e) => e.id,
            Account::Applicant(a) => a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Account::Employer(e) => &e.name,
            Account::Applicant(a) => &a.name,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Account::Employer(e) => &e.password,
            Account::Applicant(a) => &a.password,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Account::Employer(_) => Role::Employer,
            Account::Applicant(_) => Role::Applicant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_cookie_value() {
        assert_eq!(Role::parse("employer"), Some(Role::Employer));
        assert_eq!(Role::parse("applicant"), Some(Role::Applicant));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(Role::Employer.as_str()), Some(Role::Employer));
    }

    #[test]
    fn home_paths_carry_the_account_id() {
        assert_eq!(Role::Applicant.home_path(7), "/applicant/vacancies/7");
        assert_eq!(Role::Employer.home_path(12), "/employer/works/12");
    }
}
