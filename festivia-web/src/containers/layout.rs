use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::FestiviaClient;
use crate::routes::ScopedRoutes;
use crate::session::SessionState;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Chrome around every guarded page of one role's subtree: branding,
/// role navigation, the signed-in name, and logout.
#[function_component(Layout)]
pub fn layout<S: ScopedRoutes>(props: &LayoutProps) -> Html {
    let (session, dispatch) = use_store::<SessionState<S>>();
    let navigator = use_navigator();

    let nav_items = S::nav_items()
        .into_iter()
        .map(|(route, label)| {
            let navigator = navigator.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&route);
                }
            });
            html! {
                <button class="btn btn-ghost btn-sm" {onclick}>{label}</button>
            }
        })
        .collect::<Html>();

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Best effort: local teardown happens whatever the
                // server says.
                let _ = FestiviaClient::shared(S::ROLE).logout().await;
                SessionState::<S>::logout(&dispatch);
                if let Some(navigator) = navigator {
                    navigator.push(&S::login_route());
                }
            });
        })
    };

    let signed_in_as = session
        .profile()
        .map_or_else(|| S::ROLE.to_string(), |profile| profile.name.clone());

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <header class="navbar bg-base-200 border-b border-base-300">
                <div class="navbar-start gap-2">
                    <span class="text-xl font-bold px-2">{"Festivia"}</span>
                    <span class="badge badge-outline">{S::ROLE.to_string()}</span>
                </div>
                <div class="navbar-center gap-1">
                    {nav_items}
                </div>
                <div class="navbar-end gap-2">
                    <span class="text-sm opacity-70">{signed_in_as}</span>
                    <button class="btn btn-outline btn-sm" onclick={on_logout}>
                        {"Sign out"}
                    </button>
                </div>
            </header>
            <main class="flex-grow p-4">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2026 Festivia · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    }
}
