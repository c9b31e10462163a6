//! Route guard.
//!
//! Gates one role's route subtree on that role's session. The policy is
//! four deterministic quadrants: a guarded page renders only for an
//! authenticated session and otherwise redirects to the role's login
//! path; the login page renders only for an anonymous session and
//! otherwise redirects to the role's dashboard.

use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

use crate::routes::ScopedRoutes;
use crate::session::SessionState;

/// Query string carried to the login page so a successful login can
/// return the visitor to the page they originally asked for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// What the guard decided for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

/// The four-quadrant policy, kept free of any component machinery.
#[must_use]
pub fn guard_outcome(require_auth: bool, is_authenticated: bool) -> GuardOutcome {
    match (require_auth, is_authenticated) {
        (true, false) => GuardOutcome::RedirectToLogin,
        (false, true) => GuardOutcome::RedirectToDashboard,
        _ => GuardOutcome::Render,
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    /// `true` for guarded subtrees, `false` for the login route itself.
    #[prop_or(true)]
    pub require_auth: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Guard)]
pub fn guard<S: ScopedRoutes>(props: &GuardProps) -> Html {
    let session = use_store_value::<SessionState<S>>();
    let navigator = use_navigator();
    let location = use_location();
    let outcome = guard_outcome(props.require_auth, session.is_authenticated());

    use_effect_with(outcome, move |outcome| {
        if let Some(navigator) = navigator {
            match outcome {
                GuardOutcome::RedirectToLogin => {
                    // Keep the attempted page's own query string so it
                    // survives the login round-trip.
                    let query = LoginQuery {
                        from: location
                            .map(|current| format!("{}{}", current.path(), current.query_str())),
                    };
                    if navigator
                        .replace_with_query(&S::login_route(), &query)
                        .is_err()
                    {
                        navigator.replace(&S::login_route());
                    }
                }
                GuardOutcome::RedirectToDashboard => {
                    navigator.replace(&S::dashboard_route());
                }
                GuardOutcome::Render => {}
            }
        }
        || ()
    });

    if outcome == GuardOutcome::Render {
        html! { <>{ props.children.clone() }</> }
    } else {
        Html::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_page_renders_only_when_authenticated() {
        assert_eq!(guard_outcome(true, true), GuardOutcome::Render);
        assert_eq!(guard_outcome(true, false), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn login_page_renders_only_when_anonymous() {
        assert_eq!(guard_outcome(false, false), GuardOutcome::Render);
        assert_eq!(guard_outcome(false, true), GuardOutcome::RedirectToDashboard);
    }

    #[test]
    fn login_query_roundtrips_through_urlencoding() {
        let query = LoginQuery {
            from: Some("/admin/usersmanagement".to_string()),
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        let decoded: LoginQuery = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded, query);
    }

    #[test]
    fn query_bearing_target_roundtrips_intact() {
        let query = LoginQuery {
            from: Some("/user/account?page=3".to_string()),
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        let decoded: LoginQuery = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded, query);
    }

    #[test]
    fn empty_login_query_serializes_to_nothing() {
        let encoded = serde_urlencoded::to_string(LoginQuery::default()).unwrap();
        assert!(encoded.is_empty());
    }
}
