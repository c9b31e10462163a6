use festivia_shared::models::{DashboardStats, Role};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::FestiviaClient;
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;

/// End-user dashboard: bookings and subscription figures.
#[function_component(UserDashboardPage)]
pub fn user_dashboard_page() -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let error = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match FestiviaClient::shared(Role::User).dashboard().await {
                    Ok(payload) => stats.set(Some(payload)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    if let Some(message) = &*error {
        return html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        };
    }
    let Some(stats) = &*stats else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Your dashboard"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard title="Bookings" value={stats.total_bookings.to_string()} />
                <StatCard title="Upcoming events" value={stats.total_events.to_string()} />
                <StatCard
                    title="Active subscriptions"
                    value={stats.active_subscriptions.to_string()}
                />
            </div>
        </div>
    }
}
