use festivia_shared::models::{DashboardStats, Role};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::FestiviaClient;
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;

/// Creator dashboard: events, sales, and the monthly revenue series.
#[function_component(CreatorDashboardPage)]
pub fn creator_dashboard_page() -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let error = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match FestiviaClient::shared(Role::Creator).dashboard().await {
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

    let sales_rows = stats
        .monthly_sales
        .iter()
        .map(|point| {
            html! {
                <tr>
                    <td>{point.month.clone()}</td>
                    <td class="font-mono">{format!("{:.2}", point.amount)}</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Creator dashboard"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard title="Events" value={stats.total_events.to_string()} />
                <StatCard title="Tickets sold" value={stats.total_bookings.to_string()} />
                <StatCard
                    title="Revenue"
                    value={format!("{:.2}", stats.total_revenue)}
                />
            </div>
            if !stats.monthly_sales.is_empty() {
                <div>
                    <h2 class="text-xl font-semibold mb-2">{"Monthly sales"}</h2>
                    <table class="table table-zebra max-w-md">
                        <thead>
                            <tr><th>{"Month"}</th><th>{"Amount"}</th></tr>
                        </thead>
                        <tbody>{sales_rows}</tbody>
                    </table>
                </div>
            }
        </div>
    }
}
