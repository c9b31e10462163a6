use festivia_shared::models::{LoginRequest, LoginResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::Routable;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::FestiviaClient;
use crate::guard::LoginQuery;
use crate::routes::ScopedRoutes;
use crate::session::SessionState;

/// Where to land after a successful login: the originally attempted
/// page when it belongs to this role's subtree, otherwise the role's
/// dashboard. The attempted page's own query string rides along.
///
/// `Routable::recognize` never returns `None` for a subtree with a
/// catch-all variant; it yields that variant instead, so paths from
/// outside the subtree are detected by comparing against it.
fn post_login_target<S: ScopedRoutes>(from: Option<&str>) -> (S::Route, Vec<(String, String)>) {
    let Some(from) = from else {
        return (S::dashboard_route(), Vec::new());
    };
    let (path, raw_query) = from.split_once('?').unwrap_or((from, ""));
    match S::Route::recognize(path) {
        Some(route) if route != S::not_found_route() => {
            let query = serde_urlencoded::from_str(raw_query).unwrap_or_default();
            (route, query)
        }
        _ => (S::dashboard_route(), Vec::new()),
    }
}

/// Email/password login form for one role's portal.
///
/// On a confirmed server response it performs the role session's only
/// Anonymous -> Authenticated transition, then navigates to the page
/// the visitor originally asked for (the `from` query parameter) or to
/// the role's dashboard.
#[function_component(LoginPage)]
pub fn login_page<S: ScopedRoutes>() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let location = use_location();
    let (_session, dispatch) = use_store::<SessionState<S>>();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        let location = location;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator_handle = navigator.clone();
            let return_to = location
                .as_ref()
                .and_then(|current| current.query::<LoginQuery>().ok())
                .and_then(|query| query.from);
            spawn_local(async move {
                let client = FestiviaClient::shared(S::ROLE);
                let request = LoginRequest {
                    email: email_value,
                    password: password_value,
                };
                match client.login(&request).await {
                    Ok(LoginResponse { token, profile }) => {
                        SessionState::<S>::login(&dispatch, profile, token);
                        if let Some(nav) = navigator_handle {
                            let (route, query) = post_login_target::<S>(return_to.as_deref());
                            if query.is_empty() || nav.push_with_query(&route, &query).is_err() {
                                nav.push(&route);
                            }
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.to_string()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;
    let title = format!("Sign in · {}", S::ROLE);

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{title}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{AdminRoute, UserRoute};
    use crate::session::{AdminScope, UserScope};

    #[test]
    fn same_role_path_is_returned_to() {
        let (route, query) = post_login_target::<UserScope>(Some("/user/account"));
        assert_eq!(route, UserRoute::Account);
        assert!(query.is_empty());
    }

    #[test]
    fn foreign_role_path_falls_back_to_dashboard() {
        // Another subtree's path recognizes as this subtree's catch-all
        // variant, which must not be pushed after a login.
        let (route, query) = post_login_target::<UserScope>(Some("/creator/dashboard"));
        assert_eq!(route, UserRoute::Dashboard);
        assert!(query.is_empty());
    }

    #[test]
    fn unknown_path_falls_back_to_dashboard() {
        let (route, _) = post_login_target::<AdminScope>(Some("/admin/billing"));
        assert_eq!(route, AdminRoute::Dashboard);
    }

    #[test]
    fn missing_target_lands_on_dashboard() {
        let (route, query) = post_login_target::<AdminScope>(None);
        assert_eq!(route, AdminRoute::Dashboard);
        assert!(query.is_empty());
    }

    #[test]
    fn attempted_query_string_rides_along() {
        let (route, query) = post_login_target::<UserScope>(Some("/user/account?page=3"));
        assert_eq!(route, UserRoute::Account);
        assert_eq!(query, vec![("page".to_string(), "3".to_string())]);
    }

    #[test]
    fn fallback_drops_the_foreign_query() {
        let (route, query) =
            post_login_target::<UserScope>(Some("/creator/eventmanagement?page=2"));
        assert_eq!(route, UserRoute::Dashboard);
        assert!(query.is_empty());
    }
}
