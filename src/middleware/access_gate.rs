use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::models::account::Role;
use crate::utils::cookies::parse_cookies;

/// Paths reachable without a session.
pub const NOT_AUTHED_PATHS: &[&str] = &["/login", "/registration"];

/// Identity claims for one request, parsed from the `id` and `role`
/// cookies. Always passed explicitly; handlers never read cookies on
/// their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub id: Option<i64>,
    pub role: Option<Role>,
}

impl SessionContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookies = parse_cookies(headers);
        Self {
            id: cookies.get("id").and_then(|raw| raw.parse().ok()),
            role: cookies.get("role").and_then(|raw| Role::parse(raw)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(String),
}

/// Routing decision for one navigational request.
///
/// A session missing either cookie (or carrying an unparseable role) is
/// treated as unauthenticated, since it cannot be routed to a role home.
pub fn decide(path: &str, session: &SessionContext) -> GateDecision {
    let is_public = NOT_AUTHED_PATHS.contains(&path);

    let (id, role) = match (session.id, session.role) {
        (Some(id), Some(role)) => (id, role),
        _ => {
            return if is_public {
                GateDecision::Allow
            } else {
                GateDecision::Redirect("/login".to_string())
            };
        }
    };

    let home = role.home_path(id);

    // Login and registration are pointless with a live session.
    if is_public {
        return GateDecision::Redirect(home);
    }
    if path.starts_with("/employer") && role == Role::Applicant {
        return GateDecision::Redirect(home);
    }
    if path.starts_with("/applicant") && role == Role::Employer {
        return GateDecision::Redirect(home);
    }
    if path == "/" {
        return GateDecision::Redirect(home);
    }

    GateDecision::Allow
}

/// Applied in front of the static shell; API routes are not gated here.
pub async fn gate_middleware(req: Request, next: Next) -> Response {
    let session = SessionContext::from_headers(req.headers());
    match decide(req.uri().path(), &session) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Redirect(target) => Redirect::temporary(&target).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous() -> SessionContext {
        SessionContext::default()
    }

    fn applicant(id: i64) -> SessionContext {
        SessionContext {
            id: Some(id),
            role: Some(Role::Applicant),
        }
    }

    fn employer(id: i64) -> SessionContext {
        SessionContext {
            id: Some(id),
            role: Some(Role::Employer),
        }
    }

    #[test]
    fn anonymous_requests_are_sent_to_login() {
        for path in ["/", "/applicant/vacancies/3", "/employer/works/9", "/anything"] {
            assert_eq!(
                decide(path, &anonymous()),
                GateDecision::Redirect("/login".to_string()),
                "path {path}"
            );
        }
    }

    #[test]
    fn anonymous_requests_may_reach_login_and_registration() {
        assert_eq!(decide("/login", &anonymous()), GateDecision::Allow);
        assert_eq!(decide("/registration", &anonymous()), GateDecision::Allow);
    }

    #[test]
    fn authenticated_requests_to_login_go_home() {
        assert_eq!(
            decide("/login", &applicant(3)),
            GateDecision::Redirect("/applicant/vacancies/3".to_string())
        );
        assert_eq!(
            decide("/registration", &employer(4)),
            GateDecision::Redirect("/employer/works/4".to_string())
        );
    }

    #[test]
    fn applicant_cannot_enter_the_employer_area() {
        assert_eq!(
            decide("/employer/works/9", &applicant(3)),
            GateDecision::Redirect("/applicant/vacancies/3".to_string())
        );
    }

    #[test]
    fn employer_cannot_enter_the_applicant_area() {
        assert_eq!(
            decide("/applicant/vacancies/3", &employer(4)),
            GateDecision::Redirect("/employer/works/4".to_string())
        );
    }

    #[test]
    fn root_redirects_to_the_role_home() {
        assert_eq!(
            decide("/", &applicant(3)),
            GateDecision::Redirect("/applicant/vacancies/3".to_string())
        );
        assert_eq!(
            decide("/", &employer(4)),
            GateDecision::Redirect("/employer/works/4".to_string())
        );
    }

    #[test]
    fn own_area_is_allowed() {
        assert_eq!(decide("/applicant/analytics/3", &applicant(3)), GateDecision::Allow);
        assert_eq!(decide("/employer/works/4", &employer(4)), GateDecision::Allow);
    }

    #[test]
    fn session_without_a_usable_role_counts_as_unauthenticated() {
        let half_formed = SessionContext {
            id: Some(5),
            role: None,
        };
        assert_eq!(
            decide("/applicant/vacancies/5", &half_formed),
            GateDecision::Redirect("/login".to_string())
        );
        assert_eq!(decide("/login", &half_formed), GateDecision::Allow);
    }
}
