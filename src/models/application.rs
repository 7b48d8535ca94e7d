use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle state of an application. Pending is the only non-terminal
/// post-creation state; Failed is entered directly when the screening
/// test is failed at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Failed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Failed => "failed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<ApplicationStatus> {
        match raw {
            "pending" => Some(ApplicationStatus::Pending),
            "failed" => Some(ApplicationStatus::Failed),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

/// Join entity keyed by the unique (vacancy_id, applicant_id) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyApplication {
    pub id: i64,
    pub vacancy_id: i64,
    pub applicant_id: i64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_the_only_non_terminal_state() {
        assert!(!ApplicationStatus::Pending.is_terminal());
        assert!(ApplicationStatus::Failed.is_terminal());
        assert!(ApplicationStatus::Accepted.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
    }

    #[test]
    fn status_round_trips_through_storage() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Failed,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ApplicationStatus::parse("withdrawn"), None);
    }
}
