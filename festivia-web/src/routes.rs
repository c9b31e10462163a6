use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::containers::layout::Layout;
use crate::guard::Guard;
use crate::pages::admin::{
    AdminDashboardPage, ApprovalsPage, CreatorManagementPage, UsersManagementPage,
};
use crate::pages::creator::{CreatorDashboardPage, EventManagementPage, PlansPage};
use crate::pages::user::{AccountPage, SubscriptionsPage, UserDashboardPage};
use crate::pages::{ErrorPage, LandingPage, LoginPage};
use crate::session::{AdminScope, CreatorScope, RoleScope, UserScope};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes: an ungated landing page plus three independently
/// guarded role subtrees.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Landing,
    #[at("/user")]
    UserRoot,
    #[at("/user/*")]
    User,
    #[at("/creator")]
    CreatorRoot,
    #[at("/creator/*")]
    Creator,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The end-user routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum UserRoute {
    #[at("/user")]
    Home,
    #[at("/user/login")]
    Login,
    #[at("/user/dashboard")]
    Dashboard,
    #[at("/user/account")]
    Account,
    #[at("/user/subscriptions")]
    Subscriptions,
    #[not_found]
    #[at("/user/404")]
    NotFound,
}

/// The event-creator routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum CreatorRoute {
    #[at("/creator")]
    Home,
    #[at("/creator/login")]
    Login,
    #[at("/creator/dashboard")]
    Dashboard,
    #[at("/creator/eventmanagement")]
    EventManagement,
    #[at("/creator/subscriptions")]
    Plans,
    #[not_found]
    #[at("/creator/404")]
    NotFound,
}

/// The administrator routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin")]
    Home,
    #[at("/admin/login")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/approvals")]
    Approvals,
    #[at("/admin/creatormanagement")]
    CreatorManagement,
    #[at("/admin/usersmanagement")]
    UsersManagement,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

/// Ties a role scope to its typed route subtree so the guard, layout,
/// and login page can navigate without knowing which role they serve.
pub trait ScopedRoutes: RoleScope {
    type Route: Routable + Clone + PartialEq + 'static;

    fn login_route() -> Self::Route;
    fn dashboard_route() -> Self::Route;
    /// The subtree's catch-all variant. `Routable::recognize` returns
    /// it for unmatched paths instead of `None`, so callers that treat
    /// recognition as fallible must compare against it.
    fn not_found_route() -> Self::Route;
    /// Navigation entries shown in the layout header, with labels.
    fn nav_items() -> Vec<(Self::Route, &'static str)>;
}

impl ScopedRoutes for UserScope {
    type Route = UserRoute;

    fn login_route() -> UserRoute {
        UserRoute::Login
    }

    fn dashboard_route() -> UserRoute {
        UserRoute::Dashboard
    }

    fn not_found_route() -> UserRoute {
        UserRoute::NotFound
    }

    fn nav_items() -> Vec<(UserRoute, &'static str)> {
        vec![
            (UserRoute::Dashboard, "Dashboard"),
            (UserRoute::Subscriptions, "Subscriptions"),
            (UserRoute::Account, "Account"),
        ]
    }
}

impl ScopedRoutes for CreatorScope {
    type Route = CreatorRoute;

    fn login_route() -> CreatorRoute {
        CreatorRoute::Login
    }

    fn dashboard_route() -> CreatorRoute {
        CreatorRoute::Dashboard
    }

    fn not_found_route() -> CreatorRoute {
        CreatorRoute::NotFound
    }

    fn nav_items() -> Vec<(CreatorRoute, &'static str)> {
        vec![
            (CreatorRoute::Dashboard, "Dashboard"),
            (CreatorRoute::EventManagement, "Events"),
            (CreatorRoute::Plans, "Plans"),
        ]
    }
}

impl ScopedRoutes for AdminScope {
    type Route = AdminRoute;

    fn login_route() -> AdminRoute {
        AdminRoute::Login
    }

    fn dashboard_route() -> AdminRoute {
        AdminRoute::Dashboard
    }

    fn not_found_route() -> AdminRoute {
        AdminRoute::NotFound
    }

    fn nav_items() -> Vec<(AdminRoute, &'static str)> {
        vec![
            (AdminRoute::Dashboard, "Dashboard"),
            (AdminRoute::Approvals, "Approvals"),
            (AdminRoute::CreatorManagement, "Creators"),
            (AdminRoute::UsersManagement, "Users"),
        ]
    }
}

/// Wrap guarded page content in the role's guard and layout.
fn guarded<S: ScopedRoutes>(content: Html) -> Html {
    html! {
        <Guard<S>>
            <Layout<S>>
                {content}
            </Layout<S>>
        </Guard<S>>
    }
}

/// A login page wrapped in the inverse guard.
fn login<S: ScopedRoutes>() -> Html {
    html! {
        <Guard<S> require_auth={false}>
            <LoginPage<S> />
        </Guard<S>>
    }
}

/// Switch function for the main routes.
pub fn switch_main(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    match route {
        MainRoute::Landing => html! { <LandingPage /> },
        MainRoute::UserRoot | MainRoute::User => {
            html! { <Switch<UserRoute> render={switch_user} /> }
        }
        MainRoute::CreatorRoot | MainRoute::Creator => {
            html! { <Switch<CreatorRoute> render={switch_creator} /> }
        }
        MainRoute::AdminRoot | MainRoute::Admin => {
            html! { <Switch<AdminRoute> render={switch_admin} /> }
        }
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}

fn switch_user(route: UserRoute) -> Html {
    match route {
        UserRoute::Home => html! { <Redirect<UserRoute> to={UserRoute::Dashboard} /> },
        UserRoute::Login => login::<UserScope>(),
        UserRoute::Dashboard => guarded::<UserScope>(html! { <UserDashboardPage /> }),
        UserRoute::Account => guarded::<UserScope>(html! { <AccountPage /> }),
        UserRoute::Subscriptions => guarded::<UserScope>(html! { <SubscriptionsPage /> }),
        UserRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> },
    }
}

fn switch_creator(route: CreatorRoute) -> Html {
    match route {
        CreatorRoute::Home => html! { <Redirect<CreatorRoute> to={CreatorRoute::Dashboard} /> },
        CreatorRoute::Login => login::<CreatorScope>(),
        CreatorRoute::Dashboard => guarded::<CreatorScope>(html! { <CreatorDashboardPage /> }),
        CreatorRoute::EventManagement => guarded::<CreatorScope>(html! { <EventManagementPage /> }),
        CreatorRoute::Plans => guarded::<CreatorScope>(html! { <PlansPage /> }),
        CreatorRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> },
    }
}

fn switch_admin(route: AdminRoute) -> Html {
    match route {
        AdminRoute::Home => html! { <Redirect<AdminRoute> to={AdminRoute::Dashboard} /> },
        AdminRoute::Login => login::<AdminScope>(),
        AdminRoute::Dashboard => guarded::<AdminScope>(html! { <AdminDashboardPage /> }),
        AdminRoute::Approvals => guarded::<AdminScope>(html! { <ApprovalsPage /> }),
        AdminRoute::CreatorManagement => guarded::<AdminScope>(html! { <CreatorManagementPage /> }),
        AdminRoute::UsersManagement => guarded::<AdminScope>(html! { <UsersManagementPage /> }),
        AdminRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> },
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
